//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/filegen/filegen.toml`
//! 3. Local config: `<project_dir>/.filegen.toml`
//! 4. Environment variables: `FILEGEN_*` prefix
//!
//! CLI flags are applied on top by the command layer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, Standardization};

/// Periodic generator defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PeriodicConfig {
    /// Seconds to wait between two periodic files
    pub wait_seconds: u64,
    /// Number of periodic files to write
    pub count: u32,
}

impl Default for PeriodicConfig {
    fn default() -> Self {
        Self {
            wait_seconds: 1,
            count: 3,
        }
    }
}

impl PeriodicConfig {
    pub fn wait(&self) -> Duration {
        Duration::from_secs(self.wait_seconds)
    }
}

/// Standardization defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StandardizeConfig {
    pub lowercase: bool,
    pub remove_spaces: bool,
}

impl Default for StandardizeConfig {
    fn default() -> Self {
        let rules = Standardization::default();
        Self {
            lowercase: rules.lowercase,
            remove_spaces: rules.remove_spaces,
        }
    }
}

impl From<&StandardizeConfig> for Standardization {
    fn from(cfg: &StandardizeConfig) -> Self {
        Standardization {
            lowercase: cfg.lowercase,
            remove_spaces: cfg.remove_spaces,
        }
    }
}

/// Raw periodic config for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPeriodicConfig {
    pub wait_seconds: Option<u64>,
    pub count: Option<u32>,
}

/// Raw standardization config for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawStandardizeConfig {
    pub lowercase: Option<bool>,
    pub remove_spaces: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub root_dir: Option<PathBuf>,
    pub prefix: Option<String>,
    pub periodic: RawPeriodicConfig,
    pub standardize: RawStandardizeConfig,
}

/// Unified configuration for filegen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory generated files are written to (default: current directory)
    pub root_dir: PathBuf,
    /// Prefix for the prefixed generator (default: "out_")
    pub prefix: String,
    pub periodic: PeriodicConfig,
    pub standardize: StandardizeConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            prefix: "out_".into(),
            periodic: PeriodicConfig::default(),
            standardize: StandardizeConfig::default(),
        }
    }
}

/// Get the XDG config directory for filegen.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "filegen").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("filegen.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".filegen.toml")
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
    /// Expand shell variables and tilde in `root_dir`.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.root_dir.to_string_lossy().as_ref());
        self.root_dir = PathBuf::from(expanded);
    }

    /// Overlay `raw` onto self: every value the overlay specifies wins.
    fn merge_with(&self, raw: &RawSettings) -> Self {
        Self {
            root_dir: raw
                .root_dir
                .clone()
                .unwrap_or_else(|| self.root_dir.clone()),
            prefix: raw.prefix.clone().unwrap_or_else(|| self.prefix.clone()),
            periodic: PeriodicConfig {
                wait_seconds: raw
                    .periodic
                    .wait_seconds
                    .unwrap_or(self.periodic.wait_seconds),
                count: raw.periodic.count.unwrap_or(self.periodic.count),
            },
            standardize: StandardizeConfig {
                lowercase: raw
                    .standardize
                    .lowercase
                    .unwrap_or(self.standardize.lowercase),
                remove_spaces: raw
                    .standardize
                    .remove_spaces
                    .unwrap_or(self.standardize.remove_spaces),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.filegen.toml`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply FILEGEN_* environment variables as explicit overrides.
    ///
    /// Nested keys use `__`, e.g. `FILEGEN_PERIODIC__COUNT=5`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("FILEGEN")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Some(val) = env_value::<String>(&config, "root_dir")? {
            settings.root_dir = PathBuf::from(val);
        }
        if let Some(val) = env_value::<String>(&config, "prefix")? {
            settings.prefix = val;
        }
        if let Some(val) = env_value::<u64>(&config, "periodic.wait_seconds")? {
            settings.periodic.wait_seconds = val;
        }
        if let Some(val) = env_value::<u32>(&config, "periodic.count")? {
            settings.periodic.count = val;
        }
        if let Some(val) = env_value::<bool>(&config, "standardize.lowercase")? {
            settings.standardize.lowercase = val;
        }
        if let Some(val) = env_value::<bool>(&config, "standardize.remove_spaces")? {
            settings.standardize.remove_spaces = val;
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
        r#"# filegen configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/filegen/filegen.toml
#   Local:  <project_dir>/.filegen.toml
#   Env:    FILEGEN_* environment variables, nested keys with "__"
#           e.g. FILEGEN_PERIODIC__COUNT=5

# Directory generated files are written to
# root_dir = "."

# Prefix used by the prefixed generator
# prefix = "out_"

[periodic]
# Seconds to wait between two periodic files
# wait_seconds = 1

# Number of periodic files
# count = 3

[standardize]
# Lowercase names before using them in file names
# lowercase = true

# Remove spaces from names before using them in file names
# remove_spaces = true
"#
        .to_string()
    }
}

/// Read one env override: `None` when unset, an error when set but invalid.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("environment override {key}: {e}"),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
