//! Evidex command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, load settings and fixtures, dispatch one command.
//! - Keep all case rules inside `evidex_core`.

mod args;
mod commands;
mod settings;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use evidex_core::FixtureSet;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.global.config.as_deref())?;

    let log_dir = settings.resolved_log_dir()?;
    // Logging is best-effort for a CLI run; commands still work without it.
    if let Err(err) = evidex_core::init_logging(&settings.log_level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    if let Commands::Version = cli.command {
        println!("evidex_core version={}", evidex_core::core_version());
        return Ok(());
    }

    let fixture_dir = cli.global.fixtures.or(settings.fixture_dir.clone());
    let fixtures = match fixture_dir.as_deref() {
        Some(dir) => FixtureSet::load_dir(dir)
            .with_context(|| format!("Failed to load fixtures from {}", dir.display()))?,
        None => FixtureSet::embedded().context("Failed to load embedded fixtures")?,
    };

    match &cli.command {
        Commands::Search {
            query,
            app,
            limit,
            exclude_deleted,
        } => commands::handle_search(&fixtures, query, app.as_deref(), *limit, *exclude_deleted),
        Commands::Timeline { filter } => commands::handle_timeline(&fixtures, filter),
        Commands::Network { threshold, node } => {
            commands::handle_network(&fixtures, *threshold, node.as_deref())
        }
        Commands::Report { seed, add, export } => {
            commands::handle_report(&fixtures, &settings, *seed, add, export.as_deref())
        }
        Commands::Check { file } => commands::handle_check(&fixtures, file),
        Commands::Version => Ok(()),
    }
}
