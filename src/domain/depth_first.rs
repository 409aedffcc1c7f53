//! Recursive pre-order traversal: node, then left subtree, then right subtree.

use crate::domain::node::{Node, Tree};

impl Node {
    /// Visit this subtree in pre-order.
    ///
    /// Recursion depth is bounded by the tree height.
    pub fn visit_preorder<F: FnMut(&Node)>(&self, visit: &mut F) {
        visit(self);
        if let Some(left) = self.left.as_deref() {
            left.visit_preorder(visit);
        }
        if let Some(right) = self.right.as_deref() {
            right.visit_preorder(visit);
        }
    }
}

impl Tree {
    /// Values in pre-order; empty for an empty tree.
    pub fn depth_first(&self) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            root.visit_preorder(&mut |node| values.push(node.value));
        }
        values
    }
}
