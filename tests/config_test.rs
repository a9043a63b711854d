//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only),
//! so they test local config merging with defaults.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use filegen::application::ApplicationError;
use filegen::config::{local_config_path, Settings};
use filegen::infrastructure::di::ServiceContainer;

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    let project = TempDir::new().unwrap();

    let settings = Settings::load(Some(project.path())).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_local_config_when_load_then_overrides_specified_values() {
    let project = TempDir::new().unwrap();
    let local = r#"
prefix = "in_"

[periodic]
count = 5
"#;
    fs::write(local_config_path(project.path()), local).unwrap();

    let settings = Settings::load(Some(project.path())).expect("load settings");

    assert_eq!(settings.prefix, "in_");
    assert_eq!(settings.periodic.count, 5);
    // untouched values keep their defaults
    assert_eq!(settings.periodic.wait_seconds, 1);
    assert!(settings.standardize.lowercase);
}

#[test]
fn given_invalid_local_config_when_load_then_returns_config_error() {
    let project = TempDir::new().unwrap();
    fs::write(local_config_path(project.path()), "prefix = [unclosed").unwrap();

    let result = Settings::load(Some(project.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_root_dir_in_local_config_when_generating_then_writes_there() {
    let project = TempDir::new().unwrap();
    let root = project.path().join("generated");
    fs::write(
        local_config_path(project.path()),
        format!("root_dir = {:?}\n", root.to_string_lossy()),
    )
    .unwrap();

    let settings = Settings::load(Some(project.path())).expect("load settings");
    let written = ServiceContainer::new(settings)
        .generator()
        .create_files_for_range(2020, 2020)
        .unwrap();

    assert_eq!(written, vec![PathBuf::from(&root).join("p02_year_2020.txt")]);
    assert!(root.join("p02_year_2020.txt").exists());
}
