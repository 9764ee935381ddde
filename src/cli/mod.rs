//! Command-line interface module.

mod args;
pub mod build;
pub mod e2e;
pub mod init;
pub mod meta;
pub mod query;
pub mod serve;

pub use args::{BuildArgs, Cli, Commands, E2eArgs, MetaPage, QueryArgs};

use std::fs;
use std::future::Future;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::log;

/// Run a future to completion on a fresh current-thread runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

/// Serialize `value` as JSON, to `output` when given, otherwise stdout.
pub fn emit_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => {
            fs::write(path, format!("{formatted}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log!("query"; "wrote output to {}", path.display());
        }
        None => println!("{formatted}"),
    }
    Ok(())
}
