//! Tree builder for turning a level-order list of integers into an owned tree.
//!
//! Construction runs in two passes over arena-staged nodes kept in creation
//! order. The first pass assigns levels with a doubling width counter, the
//! second links every node to the next two unlinked nodes after it. Only then
//! are the staged nodes moved into the boxed [`Node`] structure.

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::node::{Node, Tree};

/// Node as held during construction, before ownership is wired up.
#[derive(Debug)]
struct StagedNode {
    value: i32,
    level: usize,
    /// Already claimed as somebody's child (the root counts as claimed)
    linked: bool,
    left: Option<Index>,
    right: Option<Index>,
}

/// Constructs complete-shaped binary trees from level-order input.
#[derive(Debug)]
pub struct TreeBuilder {
    arena: Arena<StagedNode>,
    /// Arena handles in creation (= level) order
    order: Vec<Index>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            order: Vec::new(),
        }
    }

    /// Build a tree whose breadth-first reading reproduces `values`.
    ///
    /// # Errors
    /// * [`DomainError::EmptyInput`] if `values` is empty.
    #[instrument(level = "debug", skip(self, values), fields(len = values.len()))]
    pub fn build(&mut self, values: &[i32]) -> TreeResult<Tree> {
        if values.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        // Reset state for a fresh build
        self.arena = Arena::with_capacity(values.len());
        self.order.clear();

        self.assign_levels(values);
        self.link_children();

        let root_idx = self.order[0];
        let root = self.assemble(root_idx)?;

        if !self.arena.is_empty() {
            return Err(DomainError::Construction(format!(
                "{} staged nodes were never linked",
                self.arena.len()
            )));
        }

        let tree = Tree::from_root(root);
        debug!("built tree: {} nodes, {} levels", tree.len(), tree.depth());
        Ok(tree)
    }

    /// First pass: one staged node per value, level numbering of a complete tree.
    fn assign_levels(&mut self, values: &[i32]) {
        let mut level_width = 1usize;
        let mut created_on_level = 0usize;
        let mut level = 0usize;

        for &value in values {
            let idx = self.arena.insert(StagedNode {
                value,
                level,
                linked: self.order.is_empty(),
                left: None,
                right: None,
            });
            self.order.push(idx);

            created_on_level += 1;
            if created_on_level == level_width {
                created_on_level = 0;
                level_width *= 2;
                level += 1;
            }
        }
    }

    /// Second pass: each node claims the next two unlinked nodes after it.
    ///
    /// Quadratic forward scan; yields the same shape as the 2i+1 / 2i+2 rule.
    fn link_children(&mut self) {
        let count = self.order.len();

        for parent_pos in 0..count {
            let Some(first) = (parent_pos + 1..count).find(|&pos| !self.is_linked(pos)) else {
                continue;
            };

            let left = self.claim(first);
            let right = if first + 1 < count {
                self.claim(first + 1)
            } else {
                None
            };

            if let Some(parent) = self.arena.get_mut(self.order[parent_pos]) {
                parent.left = left;
                parent.right = right;
            }
        }
    }

    fn is_linked(&self, pos: usize) -> bool {
        self.arena
            .get(self.order[pos])
            .map_or(true, |staged| staged.linked)
    }

    fn claim(&mut self, pos: usize) -> Option<Index> {
        let idx = self.order[pos];
        let staged = self.arena.get_mut(idx)?;
        staged.linked = true;
        Some(idx)
    }

    /// Move a staged subtree out of the arena into owned nodes.
    fn assemble(&mut self, idx: Index) -> TreeResult<Box<Node>> {
        let staged = self.arena.remove(idx).ok_or_else(|| {
            DomainError::Construction(format!("staged node {idx:?} missing from arena"))
        })?;

        let mut node = Box::new(Node::new(staged.value, staged.level));
        if let Some(left) = staged.left {
            node.left = Some(self.assemble(left)?);
        }
        if let Some(right) = staged.right {
            node.right = Some(self.assemble(right)?);
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i32]) -> Tree {
        TreeBuilder::new().build(values).unwrap()
    }

    #[test]
    fn given_no_values_when_building_then_returns_empty_input() {
        let result = TreeBuilder::new().build(&[]);
        assert_eq!(result, Err(DomainError::EmptyInput));
    }

    #[test]
    fn given_single_value_when_building_then_root_has_no_children() {
        let tree = build(&[42]);
        let root = tree.root().unwrap();
        assert_eq!(root.value, 42);
        assert_eq!(root.level, 0);
        assert!(root.is_leaf());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn given_five_values_when_building_then_children_follow_heap_positions() {
        let tree = build(&[1, 2, 3, 4, 5]);
        let root = tree.root().unwrap();

        let left = root.left.as_deref().unwrap();
        let right = root.right.as_deref().unwrap();
        assert_eq!((left.value, left.level), (2, 1));
        assert_eq!((right.value, right.level), (3, 1));

        assert_eq!(left.left.as_ref().map(|n| (n.value, n.level)), Some((4, 2)));
        assert_eq!(left.right.as_ref().map(|n| (n.value, n.level)), Some((5, 2)));
        assert!(right.is_leaf());
    }

    #[test]
    fn given_even_count_when_building_then_last_parent_gets_left_child_only() {
        let tree = build(&[1, 2, 3, 4]);
        let left = tree.root().unwrap().left.as_deref().unwrap();
        assert_eq!(left.left.as_ref().map(|n| n.value), Some(4));
        assert!(left.right.is_none());
    }

    #[test]
    fn given_builder_when_reused_then_previous_build_does_not_leak_in() {
        let mut builder = TreeBuilder::new();
        builder.build(&[9, 8, 7]).unwrap();
        let tree = builder.build(&[1, 2]).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root().map(|n| n.value), Some(1));
    }

    #[test]
    fn given_duplicates_when_building_then_every_value_gets_a_node() {
        let tree = build(&[7, 7, 7, 7]);
        assert_eq!(tree.len(), 4);
    }
}
