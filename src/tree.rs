//! Arena-backed binary tree traversal
//!
//! Both the dictionary and the candidate set keep their nodes in a `Vec` and
//! link children by index. Traversals here use an explicit stack, so an
//! unbalanced dictionary (sorted insertion order) cannot exhaust the call stack.

/// Read access to an index-linked binary tree
pub trait BinaryTree {
    /// Value yielded for each node
    type Item: Copy;

    fn root(&self) -> Option<usize>;
    fn left(&self, node: usize) -> Option<usize>;
    fn right(&self, node: usize) -> Option<usize>;
    fn item(&self, node: usize) -> Self::Item;
}

/// Lazy in-order iterator
///
/// Created fresh by each `iter()` call, so enumeration restarts every time.
pub struct InOrder<'a, T: BinaryTree> {
    tree: &'a T,
    stack: Vec<usize>,
}

impl<'a, T: BinaryTree> InOrder<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<usize>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = self.tree.left(n);
        }
    }
}

impl<T: BinaryTree> Iterator for InOrder<'_, T> {
    type Item = T::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(self.tree.right(node));
        Some(self.tree.item(node))
    }
}

/// Number of nodes on the longest root-to-leaf path (0 for an empty tree)
pub fn height<T: BinaryTree>(tree: &T) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(usize, usize)> = tree.root().map(|r| (r, 1)).into_iter().collect();

    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        if let Some(l) = tree.left(node) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = tree.right(node) {
            stack.push((r, depth + 1));
        }
    }

    deepest
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (value, left, right)
    struct Fixture {
        root: Option<usize>,
        nodes: Vec<(u32, Option<usize>, Option<usize>)>,
    }

    impl BinaryTree for Fixture {
        type Item = u32;

        fn root(&self) -> Option<usize> {
            self.root
        }
        fn left(&self, node: usize) -> Option<usize> {
            self.nodes[node].1
        }
        fn right(&self, node: usize) -> Option<usize> {
            self.nodes[node].2
        }
        fn item(&self, node: usize) -> u32 {
            self.nodes[node].0
        }
    }

    #[test]
    fn in_order_empty_tree() {
        let tree = Fixture {
            root: None,
            nodes: Vec::new(),
        };
        assert_eq!(InOrder::new(&tree).count(), 0);
        assert_eq!(height(&tree), 0);
    }

    #[test]
    fn in_order_visits_left_root_right() {
        //      2
        //    1   4
        //       3
        let tree = Fixture {
            root: Some(0),
            nodes: vec![
                (2, Some(1), Some(2)),
                (1, None, None),
                (4, Some(3), None),
                (3, None, None),
            ],
        };
        let values: Vec<u32> = InOrder::new(&tree).collect();
        assert_eq!(values, [1, 2, 3, 4]);
        assert_eq!(height(&tree), 3);
    }

    #[test]
    fn height_of_right_spine() {
        let nodes = (0..1000)
            .map(|i| (i as u32, None, if i + 1 < 1000 { Some(i + 1) } else { None }))
            .collect();
        let tree = Fixture {
            root: Some(0),
            nodes,
        };
        assert_eq!(height(&tree), 1000);
        assert_eq!(InOrder::new(&tree).count(), 1000);
    }
}
