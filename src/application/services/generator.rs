//! File generator service
//!
//! Writes generated text files below a root directory. The root, the
//! filesystem and the sleep implementation are all injected, so tests can
//! point the service at a temporary directory and skip real delays.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{self, GeneratedFile, Standardization};
use crate::infrastructure::traits::{FileSystem, Sleeper};

/// Service producing text files from simple inputs.
pub struct GeneratorService {
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
    sleeper: Arc<dyn Sleeper>,
}

impl GeneratorService {
    /// Create a new generator service writing below `root`.
    pub fn new(root: impl Into<PathBuf>, fs: Arc<dyn FileSystem>, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            root: root.into(),
            fs,
            sleeper,
        }
    }

    /// Root directory all generated files are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `text` to `path`, creating parent directories and overwriting
    /// any existing file.
    pub fn write_text_file(&self, path: &Path, text: &str) -> ApplicationResult<()> {
        self.fs
            .ensure_parent(path)
            .with_path_context("create parent directory", path)?;
        self.fs
            .write(path, text)
            .with_path_context("write file", path)?;
        debug!("write_text_file: {}", path.display());
        Ok(())
    }

    /// One file per year in the inclusive range `start..=end`.
    pub fn create_files_for_range(&self, start: i32, end: i32) -> ApplicationResult<Vec<PathBuf>> {
        if start > end {
            warn!("create_files_for_range: empty range {}..={}", start, end);
            return Ok(Vec::new());
        }
        let written = self.write_all((start..=end).map(domain::year_file))?;
        info!(
            "create_files_for_range: {} files for {}..={}",
            written.len(),
            start,
            end
        );
        Ok(written)
    }

    /// One file per name, in order.
    pub fn create_files_from_list(&self, names: &[String]) -> ApplicationResult<Vec<PathBuf>> {
        let written = self.write_all(names.iter().map(|name| domain::list_file(name)))?;
        info!("create_files_from_list: {} files", written.len());
        Ok(written)
    }

    /// Prefix every name, then write one file per prefixed item.
    pub fn create_prefixed_files(
        &self,
        names: &[String],
        prefix: &str,
    ) -> ApplicationResult<Vec<PathBuf>> {
        let prefixed = domain::prefixed_names(names, prefix);
        debug!("create_prefixed_files: prefixed={:?}", prefixed);
        let written = self.write_all(prefixed.iter().map(|item| domain::prefixed_file(item)))?;
        info!(
            "create_prefixed_files: {} files with prefix '{}'",
            written.len(),
            prefix
        );
        Ok(written)
    }

    /// Write `count` numbered files, sleeping `wait` between consecutive writes.
    ///
    /// No sleep follows the last file.
    pub fn create_files_periodically(
        &self,
        wait: Duration,
        count: u32,
    ) -> ApplicationResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        for number in 1..=count {
            written.push(self.write_generated(&domain::periodic_file(number))?);
            if number < count {
                debug!("create_files_periodically: waiting {:?}", wait);
                self.sleeper.sleep(wait);
            }
        }
        info!("create_files_periodically: {} files", written.len());
        Ok(written)
    }

    /// One file per name, named after its standardized form.
    pub fn create_standardized_files(
        &self,
        names: &[String],
        rules: &Standardization,
    ) -> ApplicationResult<Vec<PathBuf>> {
        let written = self.write_all(
            names
                .iter()
                .map(|name| domain::standardized_file(name, rules)),
        )?;
        info!(
            "create_standardized_files: {} files (lowercase={}, remove_spaces={})",
            written.len(),
            rules.lowercase,
            rules.remove_spaces
        );
        Ok(written)
    }

    fn write_generated(&self, file: &GeneratedFile) -> ApplicationResult<PathBuf> {
        let path = self.root.join(&file.file_name);
        self.write_text_file(&path, &file.content)?;
        Ok(path)
    }

    fn write_all(
        &self,
        files: impl IntoIterator<Item = GeneratedFile>,
    ) -> ApplicationResult<Vec<PathBuf>> {
        files
            .into_iter()
            .map(|file| self.write_generated(&file))
            .collect()
    }
}
