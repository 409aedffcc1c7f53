//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bfstree/bfstree.toml`
//! 3. Environment variables: `BFSTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for bfstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Print the operation menu before every command prompt
    pub show_menu: bool,
    /// Print a header line before traversal output
    pub show_headers: bool,
    /// Render the remaining tree after each successful removal
    pub show_tree_after_removal: bool,
    /// Input file used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_input: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_menu: true,
            show_headers: true,
            show_tree_after_removal: false,
            default_input: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub show_menu: Option<bool>,
    pub show_headers: Option<bool>,
    pub show_tree_after_removal: Option<bool>,
    pub default_input: Option<PathBuf>,
}

/// Get the XDG config directory for bfstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bfstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bfstree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
///
/// Unknown variables leave the input untouched.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(
        shellexpand::full(path)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string()),
    )
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            show_menu: overlay.show_menu.unwrap_or(self.show_menu),
            show_headers: overlay.show_headers.unwrap_or(self.show_headers),
            show_tree_after_removal: overlay
                .show_tree_after_removal
                .unwrap_or(self.show_tree_after_removal),
            default_input: overlay
                .default_input
                .clone()
                .or_else(|| self.default_input.clone()),
        }
    }

    fn expand_paths(&mut self) {
        if let Some(input) = &self.default_input {
            self.default_input = Some(expand_path(&input.to_string_lossy()));
        }
    }

    /// Load settings from the global config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional TOML file; a missing file is not an error
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `config_file`
    /// 3. Environment variables: `BFSTREE_*` prefix
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                debug!("loading config from {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply BFSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BFSTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("show_menu") {
            settings.show_menu = val;
        }
        if let Ok(val) = config.get_bool("show_headers") {
            settings.show_headers = val;
        }
        if let Ok(val) = config.get_bool("show_tree_after_removal") {
            settings.show_tree_after_removal = val;
        }
        if let Ok(val) = config.get_string("default_input") {
            settings.default_input = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bfstree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bfstree/bfstree.toml
#   Env:    BFSTREE_* environment variables (e.g. BFSTREE_SHOW_MENU=false)

# Print the operation menu before every command prompt
# show_menu = true

# Print "Breadth-First Search:" / "Depth-First Search:" before traversal output
# show_headers = true

# Render the remaining tree after each successful removal
# show_tree_after_removal = false

# Input file used when none is given on the command line (~ and $VAR expand)
# default_input = "~/trees/numbers.txt"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
