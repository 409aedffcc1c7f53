//! Integration tests for Settings config loading.
//!
//! Precedence: compiled defaults < config file < BFSTREE_* env vars.
//! These tests only use temp config files, so env vars are left alone.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use bfstree::application::{ApplicationError, SessionOptions};
use bfstree::config::Settings;

#[test]
fn given_missing_config_file_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(&dir.path().join("bfstree.toml"))).expect("load");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_when_load_then_overrides_only_specified_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bfstree.toml");
    fs::write(
        &path,
        r#"
show_menu = false
show_tree_after_removal = true
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert
    assert!(!settings.show_menu);
    assert!(settings.show_headers, "unspecified field keeps default");
    assert!(settings.show_tree_after_removal);

    let options = SessionOptions::from(&settings);
    assert!(!options.show_menu);
    assert!(options.show_tree_after_removal);
}

#[test]
fn given_default_input_with_tilde_when_load_then_expands_home() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bfstree.toml");
    fs::write(&path, "default_input = \"~/numbers.txt\"\n").unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    let input = settings.default_input.expect("default_input set");
    assert!(!input.starts_with("~"), "tilde expanded: {}", input.display());
    assert!(input.ends_with("numbers.txt"));
}

#[test]
fn given_broken_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bfstree.toml");
    fs::write(&path, "show_menu = maybe\n").unwrap();

    let result = Settings::load_from(Some(&path));

    match result {
        Err(ApplicationError::Config { message }) => assert!(message.contains("parse")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn given_effective_settings_when_rendered_then_toml_lists_fields() {
    let settings = Settings {
        default_input: Some(PathBuf::from("/tmp/nums.txt")),
        ..Settings::default()
    };

    let text = settings.to_toml().unwrap();

    assert!(text.contains("show_menu = true"));
    assert!(text.contains("default_input = \"/tmp/nums.txt\""));
}
