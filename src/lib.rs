//! bfstree: builds a binary tree from a level-order list of integers and
//! offers breadth-first traversal, depth-first traversal and subtree removal.
//!
//! Layers, inside out: [`domain`] (tree, builder, traversals, removal),
//! [`application`] (file loading, interactive session), [`infrastructure`]
//! (I/O boundary), [`cli`] (argument parsing and dispatch).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
