//! Breadth-first engine.
//!
//! Both modes share the same FIFO mechanics: a `VecDeque` sized to the node
//! count, children enqueued left before right. Traverse mode is exposed as the
//! lazy [`LevelOrder`] iterator; parent-search mode stops at the first node one
//! of whose children holds the target.

use std::collections::VecDeque;

use tracing::{instrument, trace};

use crate::domain::node::{Node, Tree};

/// Level-order iterator over the nodes of a tree.
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> LevelOrder<'a> {
    fn new(root: Option<&'a Node>, node_count: usize) -> Self {
        let mut queue = VecDeque::with_capacity(node_count);
        queue.extend(root);
        Self { queue }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

impl Tree {
    /// Nodes in level order; a fresh call restarts from the root.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root(), self.len())
    }

    /// Values in level order.
    pub fn breadth_first(&self) -> impl Iterator<Item = i32> + '_ {
        self.level_order().map(|node| node.value)
    }
}

/// Parent of the first node (in level order) one of whose children holds
/// `target`. The root has no parent, so a target found only at the root
/// yields `None`.
///
/// Visits at most `node_count` nodes; exceeding the bound or draining the
/// queue without a match yields `None`.
#[instrument(level = "trace", skip(root))]
pub(crate) fn find_parent_mut(
    root: &mut Node,
    node_count: usize,
    target: i32,
) -> Option<&mut Node> {
    let mut queue: VecDeque<&mut Node> = VecDeque::with_capacity(node_count);
    queue.push_back(root);
    let mut visited = 0usize;

    while let Some(node) = queue.pop_front() {
        visited += 1;
        if visited > node_count {
            trace!("parent search bound of {} exceeded", node_count);
            return None;
        }
        if node.has_child_with_value(target) {
            return Some(node);
        }

        let Node { left, right, .. } = node;
        if let Some(left) = left.as_deref_mut() {
            queue.push_back(left);
        }
        if let Some(right) = right.as_deref_mut() {
            queue.push_back(right);
        }
    }

    None
}
