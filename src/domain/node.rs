//! Owned binary tree storage.
//!
//! Every node exclusively owns its children through `Option<Box<Node>>`, so the
//! structure can never share or cycle. The caller holds a [`Tree`], which is
//! either empty or owns the root together with the current node count.

/// A single tree node carrying an integer payload and its depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: i32,
    /// Number of edges between this node and the root
    pub level: usize,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: i32, level: usize) -> Self {
        Self {
            value,
            level,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// True if one of the immediate children holds `target`.
    pub fn has_child_with_value(&self, target: i32) -> bool {
        self.children().any(|child| child.value == target)
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().map(Node::subtree_len).sum::<usize>()
    }
}

/// The caller-held handle to a tree.
///
/// Removing the root turns the tree into [`Tree::Empty`] instead of leaving a
/// placeholder node behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tree {
    #[default]
    Empty,
    Rooted {
        root: Box<Node>,
        /// Nodes currently reachable from `root`
        len: usize,
    },
}

impl Tree {
    pub(crate) fn from_root(root: Box<Node>) -> Self {
        let len = root.subtree_len();
        Tree::Rooted { root, len }
    }

    pub fn root(&self) -> Option<&Node> {
        match self {
            Tree::Empty => None,
            Tree::Rooted { root, .. } => Some(root),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Tree::Empty => 0,
            Tree::Rooted { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    /// Number of levels in the tree; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.level_order()
            .map(|node| node.level + 1)
            .max()
            .unwrap_or(0)
    }
}
