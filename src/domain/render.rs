//! termtree rendering of a tree.

use termtree::Tree as Rendered;

use crate::domain::node::{Node, Tree};

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Rendered<String>;
}

fn label(node: &Node) -> String {
    format!("{} (level {})", node.value, node.level)
}

impl TreeDisplay for Node {
    fn to_tree_string(&self) -> Rendered<String> {
        let leaves: Vec<_> = self.children().map(|c| c.to_tree_string()).collect();
        Rendered::new(label(self)).with_leaves(leaves)
    }
}

impl TreeDisplay for Tree {
    fn to_tree_string(&self) -> Rendered<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Rendered::new("Empty tree".to_string()),
        }
    }
}
