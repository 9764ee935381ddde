//! End-to-end test harness.
//!
//! Turns `[e2e]` plus the environment into a runner command line, makes sure
//! the dev server is up, runs the browser tests and hands back their exit
//! code.
//!
//! # Module Structure
//!
//! ```text
//! harness/
//! ├── env.rs         # CI flag and priority filter from the environment
//! ├── plan.rs        # resolve() → HarnessPlan (runner argv, server plan)
//! ├── web_server.rs  # check / reuse / spawn / stop the dev server
//! └── runner.rs      # locate and run the test runner
//! ```

mod env;
mod plan;
mod runner;
mod web_server;

pub use env::HarnessEnv;
pub use plan::{HarnessPlan, ServerPlan, resolve};
pub use web_server::{WebServer, stop_spawned};

use thiserror::Error;

use crate::log;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid priority filter `{pattern}`")]
    InvalidGrep {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("web server at {url} did not become ready within {timeout}s")]
    StartupTimeout { url: String, timeout: u64 },

    #[error("{0} is already in use, stop it or set `e2e.web_server.reuse_existing = true`")]
    PortInUse(String),

    #[error("web server exited before becoming ready ({0})")]
    ServerExited(String),

    #[error("test runner `{program}` not found")]
    RunnerNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("invalid web server URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build the readiness HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Execute a resolved plan. Returns the runner's exit code.
///
/// A server spawned here is stopped before returning, whatever the outcome.
pub fn execute(plan: &HarnessPlan) -> Result<i32, HarnessError> {
    // fail before starting a server nobody will use
    runner::locate(plan.argv.first().map(String::as_str).unwrap_or_default())?;

    crate::core::register_interrupt_hook(stop_spawned);
    let server = web_server::ensure(&plan.server)?;

    log!("e2e"; "running {}", plan.argv.join(" "));
    let code = runner::run(plan);
    drop(server);

    let code = code?;
    if code == 0 {
        log!("e2e"; "passed");
    } else {
        log!("e2e"; "runner exited with {}", code);
    }
    Ok(code)
}
