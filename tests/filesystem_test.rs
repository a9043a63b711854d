//! Tests for the FileSystem and Sleeper real implementations

use filegen::infrastructure::traits::{FileSystem, NoopSleeper, RealFileSystem, Sleeper};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::TempDir;

// ============================================================
// write tests
// ============================================================

#[test]
fn given_new_path_when_write_then_file_has_content() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");
    let real = RealFileSystem;

    // Act
    real.write(&path, "line\n").unwrap();

    // Assert
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "line\n");
}

#[test]
fn given_existing_file_when_write_then_replaces_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");
    fs::write(&path, "a much longer previous content\n").unwrap();

    RealFileSystem.write(&path, "new\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
}

#[test]
fn given_missing_parent_when_write_then_returns_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing/out.txt");

    // Act
    let result = RealFileSystem.write(&path, "line\n");

    // Assert - plain write never creates directories
    assert!(result.is_err());
    assert!(!path.exists());
}

// ============================================================
// ensure_parent tests
// ============================================================

#[test]
fn given_nested_path_when_ensure_parent_then_creates_ancestors() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a/b/c/file.txt");

    let fs = RealFileSystem;

    // Act
    fs.ensure_parent(&nested).unwrap();

    // Assert
    let parent = nested.parent().unwrap();
    assert!(parent.is_dir());
    // The file itself should NOT be created
    assert!(!nested.exists());
}

#[test]
fn given_existing_parent_when_ensure_parent_then_succeeds() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("file.txt");

    let fs = RealFileSystem;

    assert!(fs.ensure_parent(&file).is_ok());
}

#[test]
fn given_bare_file_name_when_ensure_parent_then_is_noop() {
    let fs = RealFileSystem;

    assert!(fs.ensure_parent(std::path::Path::new("file.txt")).is_ok());
    assert!(fs.ensure_parent(std::path::Path::new("")).is_ok());
}

#[test]
fn given_file_in_the_way_when_ensure_parent_then_returns_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "file").unwrap();

    let fs = RealFileSystem;

    assert!(fs.ensure_parent(&blocker.join("x/file.txt")).is_err());
}

// ============================================================
// Sleeper tests
// ============================================================

#[test]
fn given_noop_sleeper_when_sleeping_long_then_returns_immediately() {
    let started = Instant::now();

    NoopSleeper.sleep(Duration::from_secs(3600));

    assert!(started.elapsed() < Duration::from_secs(1));
}
