//! filegen: text file generators with an injectable root directory and delay
//!
//! Layers:
//! - `domain`: naming and content templates, name standardization (no I/O)
//! - `application`: the generator service and its errors
//! - `infrastructure`: filesystem and sleep abstractions, service wiring
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
