//! EasyLoops site tooling: sitemap, page metadata, preview server and the
//! browser test harness.

mod cli;
mod config;
mod core;
mod generator;
mod harness;
mod logger;
mod seo;
mod source;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { force, dry } => cli::init::run_init(*force, *dry),
        Commands::Build { .. } => cli::build::run_build(&load_config(&cli)?),
        Commands::Query { args } => cli::query::run_query(args, &load_config(&cli)?),
        Commands::Meta { page, pretty } => cli::meta::run_meta(page, *pretty, &load_config(&cli)?),
        Commands::Serve { .. } => cli::serve::serve(&load_config(&cli)?),
        Commands::E2e { args } => cli::e2e::run_e2e(args, &load_config(&cli)?),
    }
}

/// Every command except `init` needs a config file.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;
    debug!("config"; "loaded {}", config.config_path.display());
    Ok(config)
}
