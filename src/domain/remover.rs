//! Subtree removal by value.
//!
//! The target node is located (root first, then via the parent search of the
//! breadth-first engine), detached from its parent and dropped together with
//! everything below it.

use tracing::{debug, instrument};

use crate::domain::level_order::find_parent_mut;
use crate::domain::node::Tree;

/// What a successful removal detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub value: i32,
    /// Level the removed node sat on
    pub level: usize,
    /// Nodes released, the removed node included
    pub released: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed(Removal),
    NotFound,
    /// Nothing left to remove from
    EmptyTree,
}

impl Tree {
    /// Remove the first node (in level order) holding `target`, with its subtree.
    ///
    /// Removing the root leaves the tree [`Tree::Empty`].
    #[instrument(level = "debug", skip(self), fields(len = self.len()))]
    pub fn remove(&mut self, target: i32) -> RemovalOutcome {
        let (root_value, node_count) = match self {
            Tree::Empty => return RemovalOutcome::EmptyTree,
            Tree::Rooted { root, len } => (root.value, *len),
        };

        if root_value == target {
            *self = Tree::Empty;
            debug!("removed root {}, tree is now empty", target);
            return RemovalOutcome::Removed(Removal {
                value: target,
                level: 0,
                released: node_count,
            });
        }

        let Tree::Rooted { root, len } = self else {
            return RemovalOutcome::EmptyTree;
        };
        let Some(parent) = find_parent_mut(root, node_count, target) else {
            debug!("{} not found", target);
            return RemovalOutcome::NotFound;
        };

        let slot = if parent.left.as_ref().is_some_and(|left| left.value == target) {
            &mut parent.left
        } else {
            &mut parent.right
        };
        let Some(detached) = slot.take() else {
            return RemovalOutcome::NotFound;
        };

        let released = detached.subtree_len();
        *len -= released;
        debug!(
            "detached {} at level {}, released {} nodes, {} remain",
            detached.value, detached.level, released, len
        );

        RemovalOutcome::Removed(Removal {
            value: detached.value,
            level: detached.level,
            released,
        })
    }
}
