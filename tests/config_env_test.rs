//! FILEGEN_* environment overrides.
//!
//! Kept in its own test binary: environment variables are process-wide and
//! would leak into the other config tests. Tests in this file serialize on
//! `ENV_LOCK` for the same reason.

use std::env;
use std::sync::Mutex;

use tempfile::TempDir;

use filegen::application::ApplicationError;
use filegen::config::{local_config_path, Settings};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Load settings with `vars` set, removing them again before returning.
fn load_with_env(project: &TempDir, vars: &[(&str, &str)]) -> Result<Settings, ApplicationError> {
    for (key, value) in vars {
        env::set_var(key, value);
    }
    let result = Settings::load(Some(project.path()));
    for (key, _) in vars {
        env::remove_var(key);
    }
    result
}

#[test]
fn given_env_vars_when_load_then_override_local_config() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let project = TempDir::new().unwrap();
    std::fs::write(
        local_config_path(project.path()),
        "prefix = \"local_\"\n[periodic]\ncount = 5\n",
    )
    .unwrap();

    let settings = load_with_env(
        &project,
        &[
            ("FILEGEN_PREFIX", "env_"),
            ("FILEGEN_PERIODIC__COUNT", "9"),
            ("FILEGEN_STANDARDIZE__REMOVE_SPACES", "false"),
        ],
    )
    .expect("load settings");

    assert_eq!(settings.prefix, "env_");
    assert_eq!(settings.periodic.count, 9);
    assert!(!settings.standardize.remove_spaces);
    assert!(settings.standardize.lowercase);
}

#[test]
fn given_non_numeric_count_when_load_then_returns_config_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let project = TempDir::new().unwrap();

    let result = load_with_env(&project, &[("FILEGEN_PERIODIC__COUNT", "abc")]);

    assert!(
        matches!(result, Err(ApplicationError::Config { .. })),
        "invalid count must not fall back to the default: {:?}",
        result
    );
}

#[test]
fn given_non_bool_lowercase_when_load_then_returns_config_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let project = TempDir::new().unwrap();

    let result = load_with_env(&project, &[("FILEGEN_STANDARDIZE__LOWERCASE", "maybe")]);

    assert!(
        matches!(result, Err(ApplicationError::Config { .. })),
        "invalid bool must not fall back to the default: {:?}",
        result
    );
}
