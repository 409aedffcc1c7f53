//! Domain layer: the tree, its construction, traversals and removal
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod depth_first;
pub mod error;
pub mod input;
pub mod level_order;
pub mod node;
pub mod remover;
pub mod render;

pub use builder::TreeBuilder;
pub use error::{DomainError, TreeResult};
pub use input::{parse_integer, parse_values};
pub use level_order::LevelOrder;
pub use node::{Node, Tree};
pub use remover::{Removal, RemovalOutcome};
pub use render::TreeDisplay;
