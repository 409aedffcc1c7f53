//! Tree loading service
//!
//! Reads the integer input file through the `FileSystem` boundary, validates it
//! and hands the values to the builder. Nothing is built unless the whole file
//! is valid.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{parse_values, Tree, TreeBuilder};
use crate::infrastructure::traits::FileSystem;

/// Service for turning an input file into a tree.
pub struct TreeService {
    fs: Arc<dyn FileSystem>,
}

impl TreeService {
    /// Create a new tree service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and validate the level-order values stored in `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn read_values(&self, path: &Path) -> ApplicationResult<Vec<i32>> {
        if self.fs.exists(path) && !self.fs.is_file(path) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"))
                .with_input_context(path);
        }
        let content = self.fs.read_to_string(path).with_input_context(path)?;
        debug!("read_values: {} bytes from {}", content.len(), path.display());
        Ok(parse_values(&content)?)
    }

    /// Build the tree described by the file at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Tree> {
        let values = self.read_values(path)?;
        let tree = TreeBuilder::new().build(&values)?;
        info!(
            "loaded {} nodes on {} levels from {}",
            tree.len(),
            tree.depth(),
            path.display()
        );
        Ok(tree)
    }
}
