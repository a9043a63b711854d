//! File naming and content templates for every generator
//!
//! All generated names share the `p02_` project prefix.

use crate::domain::entities::{GeneratedFile, Standardization};

const PROJECT_PREFIX: &str = "p02";

/// File for a single year: `p02_year_{year}.txt`.
pub fn year_file(year: i32) -> GeneratedFile {
    GeneratedFile::new(
        format!("{PROJECT_PREFIX}_year_{year}.txt"),
        format!("Project 02 generated file for year {year}\n"),
    )
}

/// File for a single list item: `p02_list_{name}.txt`.
pub fn list_file(name: &str) -> GeneratedFile {
    GeneratedFile::new(
        format!("{PROJECT_PREFIX}_list_{name}.txt"),
        format!("Project 02 generated file for item '{name}'\n"),
    )
}

/// Prepend `prefix` to every name, preserving order.
pub fn prefixed_names(names: &[String], prefix: &str) -> Vec<String> {
    names.iter().map(|name| format!("{prefix}{name}")).collect()
}

/// File for an already prefixed item: `p02_prefix_{prefixed}.txt`.
pub fn prefixed_file(prefixed: &str) -> GeneratedFile {
    GeneratedFile::new(
        format!("{PROJECT_PREFIX}_prefix_{prefixed}.txt"),
        format!("Project 02 generated file for prefixed item '{prefixed}'\n"),
    )
}

/// File for the `number`-th periodic write: `p02_periodic_{number:02}.txt`.
pub fn periodic_file(number: u32) -> GeneratedFile {
    GeneratedFile::new(
        format!("{PROJECT_PREFIX}_periodic_{number:02}.txt"),
        format!("Project 02 periodic file number {number}\n"),
    )
}

/// File named after the standardized form of `original`.
///
/// The content keeps the original name next to the standardized one.
pub fn standardized_file(original: &str, rules: &Standardization) -> GeneratedFile {
    let standardized = rules.apply(original);
    GeneratedFile::new(
        format!("{PROJECT_PREFIX}_region_{standardized}.txt"),
        format!("Project 02 standardized file for '{original}' -> '{standardized}'\n"),
    )
}
