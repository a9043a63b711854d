//! Command dispatch: loads settings, wires services and runs generators

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::GeneratorService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::Standardization;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{NoopSleeper, RealFileSystem};
use crate::infrastructure::InfraError;

const SAMPLE_YEARS: (i32, i32) = (2020, 2023);
const SAMPLE_NAMES: &[&str] = &["alpha", "beta", "gamma"];
const SAMPLE_FORMATS: &[&str] = &["csv", "json"];
const SAMPLE_REGIONS: &[&str] = &["North America", "South America", "Middle East"];

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".into()));
    };

    match command {
        Commands::Completion { shell } => {
            completion(*shell);
            Ok(())
        }
        Commands::Config { command } => config_command(cli, command),
        Commands::Write { path, text } => {
            let generator = build_container(cli, false)?.generator();
            write(&generator, path, text)
        }
        Commands::Range { start, end } => {
            let generator = build_container(cli, false)?.generator();
            report("range", generator.create_files_for_range(*start, *end)?);
            Ok(())
        }
        Commands::List { names } => {
            let generator = build_container(cli, false)?.generator();
            report("list", generator.create_files_from_list(names)?);
            Ok(())
        }
        Commands::Prefixed { names, prefix } => {
            let container = build_container(cli, false)?;
            let prefix = prefix
                .as_deref()
                .unwrap_or(container.settings.prefix.as_str());
            report(
                "prefixed",
                container.generator().create_prefixed_files(names, prefix)?,
            );
            Ok(())
        }
        Commands::Periodic {
            wait_seconds,
            count,
            no_wait,
        } => {
            let container = build_container(cli, *no_wait)?;
            let periodic = &container.settings.periodic;
            let wait = wait_seconds.map_or_else(|| periodic.wait(), Duration::from_secs);
            let count = count.unwrap_or(periodic.count);
            report(
                "periodic",
                container
                    .generator()
                    .create_files_periodically(wait, count)?,
            );
            Ok(())
        }
        Commands::Standardize {
            names,
            keep_case,
            keep_spaces,
        } => {
            let container = build_container(cli, false)?;
            let mut rules = Standardization::from(&container.settings.standardize);
            if *keep_case {
                rules.lowercase = false;
            }
            if *keep_spaces {
                rules.remove_spaces = false;
            }
            report(
                "standardize",
                container
                    .generator()
                    .create_standardized_files(names, &rules)?,
            );
            Ok(())
        }
        Commands::All { no_wait } => run_all(&build_container(cli, *no_wait)?),
    }
}

/// Resolve the project directory: `-C` flag or the current directory.
fn project_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.project_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("determine current directory", e).into()),
    }
}

/// Load layered settings and apply CLI overrides on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let project_dir = project_dir(cli)?;
    let mut settings = Settings::load(Some(project_dir.as_path()))?;
    if let Some(root) = &cli.root {
        settings.root_dir = root.clone();
    }
    debug!("load_settings: {:?}", settings);
    Ok(settings)
}

fn build_container(cli: &Cli, no_wait: bool) -> CliResult<ServiceContainer> {
    let settings = load_settings(cli)?;
    if no_wait {
        Ok(ServiceContainer::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(NoopSleeper),
        ))
    } else {
        Ok(ServiceContainer::new(settings))
    }
}

fn report(label: &str, written: Vec<PathBuf>) {
    if written.is_empty() {
        output::warning(&format!("{label}: no files written"));
        return;
    }
    output::action(label, &format!("{} files", written.len()));
    for path in &written {
        output::success_detail(&path.display());
    }
}

#[instrument(skip(generator))]
fn write(generator: &GeneratorService, path: &Path, text: &str) -> CliResult<()> {
    let target = generator.root().join(path);
    generator.write_text_file(&target, text)?;
    output::action("write", &target.display());
    Ok(())
}

#[instrument(skip(container))]
fn run_all(container: &ServiceContainer) -> CliResult<()> {
    let settings = &container.settings;
    let generator = container.generator();
    output::header(&format!("Generating into {}", generator.root().display()));

    let names = to_strings(SAMPLE_NAMES);
    let formats = to_strings(SAMPLE_FORMATS);
    let regions = to_strings(SAMPLE_REGIONS);

    report(
        "range",
        generator.create_files_for_range(SAMPLE_YEARS.0, SAMPLE_YEARS.1)?,
    );
    report("list", generator.create_files_from_list(&names)?);
    report(
        "prefixed",
        generator.create_prefixed_files(&formats, &settings.prefix)?,
    );
    report(
        "periodic",
        generator.create_files_periodically(settings.periodic.wait(), settings.periodic.count)?,
    );
    report(
        "standardize",
        generator.create_standardized_files(
            &regions,
            &Standardization::from(&settings.standardize),
        )?,
    );
    Ok(())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[instrument(skip(cli))]
fn config_command(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".into())
                })?
            } else {
                local_config_path(&project_dir(cli)?)
            };
            if path.exists() {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    InfraError::io(format!("create config directory {}", parent.display()), e)
                })?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write config {}", path.display()), e))?;
            output::action("Created", &path.display());
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&format!("global: {}", path.display())),
                None => output::warning("global: cannot determine config directory"),
            }
            let local = local_config_path(&project_dir(cli)?);
            output::info(&format!("local:  {}", local.display()));
            Ok(())
        }
    }
}

fn completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}
