//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::parse_integer;

/// Build a binary tree from a level-order list of integers, traverse it and prune subtrees
#[derive(Parser, Debug)]
#[command(name = "bfstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Do not print the operation menu before each prompt
    #[arg(long, global = true)]
    pub no_menu: bool,

    /// File with one integer per line (prompted for when omitted)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print values in breadth-first order
    Bfs {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Print on one line, comma separated
        #[arg(long)]
        inline: bool,
    },

    /// Print values in depth-first (pre-order) order
    Dfs {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Print on one line, comma separated
        #[arg(long)]
        inline: bool,
    },

    /// Print every value with its level, breadth-first
    Levels {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show the tree
    Tree {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Remove values and everything below them, then print what remains
    Remove {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Values to remove, in order
        #[arg(required = true, allow_negative_numbers = true, value_parser = parse_value)]
        values: Vec<i32>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Show config path
    Path,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_value(text: &str) -> Result<i32, String> {
    parse_integer(text).ok_or_else(|| format!("not an integer: {text:?}"))
}
