//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// EasyLoops site tooling: sitemap, page metadata, preview server, e2e harness
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true, disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[allow(dead_code)]
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file name, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "easyloops.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override `[site] url`, e.g. for preview deployments
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default easyloops.toml into the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Generate the sitemap
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print sitemap entries as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Print page metadata as JSON
    #[command(visible_alias = "m")]
    Meta {
        #[command(subcommand)]
        page: MetaPage,

        /// Pretty-print JSON output
        #[arg(short, long, global = true)]
        pretty: bool,
    },

    /// Serve sitemap and metadata over HTTP
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the browser test suite against the dev server
    E2e {
        #[command(flatten)]
        args: E2eArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Minify the sitemap XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Fail on duplicate or non URL-safe question identifiers
    #[arg(long)]
    pub strict: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Page whose metadata to print.
#[derive(Subcommand, Debug, Clone)]
pub enum MetaPage {
    /// Home page
    Root,
    /// `/questions` listing page
    Questions,
    /// A question page
    Question {
        /// Question identifier, e.g. `01-variable-declaration`
        id: String,
    },
    /// A wiki page
    Wiki {
        /// Wiki slug, e.g. `loops`
        slug: String,
    },
}

/// E2e command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct E2eArgs {
    /// Print the resolved plan without running anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Resolve as if `CI` were set
    #[arg(long)]
    pub ci: bool,

    /// Only run tests tagged `@<PRIORITY>` (overrides the environment)
    #[arg(short = 'P', long)]
    pub priority: Option<String>,

    /// Extra arguments passed to the runner after `--`
    #[arg(last = true)]
    pub extra: Vec<String>,
}
