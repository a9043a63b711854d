//! Domain entities: core data structures

/// A text file to be written below the root directory.
///
/// Carries only the file name and its full content; where it lands is
/// decided by the service that writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the root directory, e.g. `p02_year_2020.txt`
    pub file_name: String,
    /// Complete file content, including the trailing newline
    pub content: String,
}

impl GeneratedFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Normalization rules applied to a name before it is used in a file name.
///
/// Surrounding whitespace is always trimmed. Lowercasing runs before
/// space removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standardization {
    pub lowercase: bool,
    pub remove_spaces: bool,
}

impl Default for Standardization {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_spaces: true,
        }
    }
}

impl Standardization {
    /// Apply the rules to `name`.
    ///
    /// ```
    /// use filegen::domain::Standardization;
    ///
    /// let rules = Standardization::default();
    /// assert_eq!(rules.apply("  North America "), "northamerica");
    /// ```
    pub fn apply(&self, name: &str) -> String {
        let mut standardized = name.trim().to_string();
        if self.lowercase {
            standardized = standardized.to_lowercase();
        }
        if self.remove_spaces {
            standardized = standardized.replace(' ', "");
        }
        standardized
    }
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Falls back to the input unchanged if a variable is undefined.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
