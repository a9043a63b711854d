//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Generate text files by year range, name list, prefix, period and standardized name
#[derive(Parser, Debug)]
#[command(name = "filegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Root directory for generated files (overrides config)
    #[arg(short, long, global = true, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Project directory holding a local .filegen.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write text to a single file (relative paths resolve under root)
    Write {
        /// Target file
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
        /// Content to write
        text: String,
    },

    /// One file per year in START..=END
    Range {
        /// First year
        start: i32,
        /// Last year (inclusive)
        end: i32,
    },

    /// One file per name
    List {
        /// Names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// One file per prefixed name
    Prefixed {
        /// Names to prefix
        #[arg(required = true)]
        names: Vec<String>,
        /// Prefix (default: from config)
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Numbered files written with a delay in between
    Periodic {
        /// Seconds between files (default: from config)
        #[arg(short, long)]
        wait_seconds: Option<u64>,
        /// Number of files (default: from config)
        #[arg(short, long)]
        count: Option<u32>,
        /// Do not actually wait between files
        #[arg(long)]
        no_wait: bool,
    },

    /// One file per name, named after its standardized form
    Standardize {
        /// Names to standardize
        #[arg(required = true)]
        names: Vec<String>,
        /// Do not lowercase names
        #[arg(long)]
        keep_case: bool,
        /// Do not remove spaces from names
        #[arg(long)]
        keep_spaces: bool,
    },

    /// Run every generator with sample inputs
    All {
        /// Do not actually wait between periodic files
        #[arg(long)]
        no_wait: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
