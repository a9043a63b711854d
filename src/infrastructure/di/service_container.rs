//! Service container for dependency injection
//!
//! Wires up services with their dependencies.

use std::sync::Arc;

use crate::application::services::GeneratorService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, Sleeper, ThreadSleeper};

/// Container holding settings and the I/O implementations services are built from.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Delay abstraction used by periodic generation
    pub sleeper: Arc<dyn Sleeper>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(ThreadSleeper))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            sleeper,
        }
    }

    /// Generator service rooted at the configured root directory.
    pub fn generator(&self) -> GeneratorService {
        GeneratorService::new(
            self.settings.root_dir.clone(),
            Arc::clone(&self.fs),
            Arc::clone(&self.sleeper),
        )
    }
}
