//! `[e2e]` section: browser test harness.
//!
//! ```toml
//! [e2e]
//! test_dir = "e2e"
//! base_url = "http://localhost:3001"
//! timeout = 180                       # seconds per test
//! projects = ["chromium", "firefox", "webkit"]
//! runner = ["npx", "playwright", "test"]
//! priority_env = "TEST_PRIORITY"      # `TEST_PRIORITY=p0` runs tests tagged `@p0`
//!
//! [e2e.retries]
//! ci = 2
//! local = 0
//!
//! [e2e.workers]
//! ci = 1
//! # local = 4                         # unset: runner decides
//!
//! [e2e.web_server]
//! command = "NODE_ENV=test npm run dev -- --port 3001"
//! url = "http://localhost:3001"
//! timeout = 120                       # seconds to wait for startup
//! # reuse_existing = true             # unset: reuse unless running in CI
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::FieldPath;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "e2e")]
pub struct E2eConfig {
    #[config(inline_doc = "Directory with the browser tests")]
    pub test_dir: PathBuf,

    #[config(inline_doc = "URL the tests navigate to")]
    pub base_url: String,

    #[config(inline_doc = "Per-test timeout in seconds")]
    pub timeout: u64,

    #[config(inline_doc = "Run tests within a file in parallel")]
    pub fully_parallel: bool,

    pub reporter: String,

    #[config(inline_doc = "Trace recording mode")]
    pub trace: String,

    /// Browser projects, one runner `--project` flag each.
    pub projects: Vec<String>,

    /// Runner program and leading arguments.
    pub runner: Vec<String>,

    /// Environment variable holding the priority tag filter.
    pub priority_env: String,

    #[config(sub)]
    pub retries: RetriesConfig,

    #[config(sub)]
    pub workers: WorkersConfig,

    #[config(sub)]
    pub web_server: WebServerConfig,
}

impl Default for E2eConfig {
    fn default() -> Self {
        Self {
            test_dir: "e2e".into(),
            base_url: "http://localhost:3001".into(),
            timeout: 180,
            fully_parallel: true,
            reporter: "html".into(),
            trace: "on-first-retry".into(),
            projects: vec!["chromium".into(), "firefox".into(), "webkit".into()],
            runner: vec!["npx".into(), "playwright".into(), "test".into()],
            priority_env: "TEST_PRIORITY".into(),
            retries: RetriesConfig::default(),
            workers: WorkersConfig::default(),
            web_server: WebServerConfig::default(),
        }
    }
}

/// Retry counts per environment.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "e2e.retries")]
pub struct RetriesConfig {
    pub ci: u32,
    pub local: u32,
}

impl Default for RetriesConfig {
    fn default() -> Self {
        Self { ci: 2, local: 0 }
    }
}

/// Worker counts per environment. Unset means the runner picks.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "e2e.workers")]
pub struct WorkersConfig {
    #[config(default = "1")]
    pub ci: Option<u32>,
    #[config(inline_doc = "Unset: runner default")]
    pub local: Option<u32>,
}

impl Default for WorkersConfig {
    fn default() -> Self {
        Self {
            ci: Some(1),
            local: None,
        }
    }
}

/// Dev server the tests run against.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "e2e.web_server")]
pub struct WebServerConfig {
    /// Shell command that starts the server.
    pub command: String,

    #[config(inline_doc = "Polled until the server answers")]
    pub url: String,

    #[config(inline_doc = "Startup timeout in seconds")]
    pub timeout: u64,

    #[config(inline_doc = "Unset: reuse unless running in CI")]
    pub reuse_existing: Option<bool>,

    /// Working directory for `command`, relative to the project root.
    pub cwd: Option<PathBuf>,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            command: "NODE_ENV=test npm run dev -- --port 3001".into(),
            url: "http://localhost:3001".into(),
            timeout: 120,
            reuse_existing: None,
            cwd: None,
        }
    }
}

impl E2eConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::validate_url(Self::FIELDS.base_url, &self.base_url, diag);
        Self::validate_url(WebServerConfig::FIELDS.url, &self.web_server.url, diag);

        if self.timeout == 0 {
            diag.error(Self::FIELDS.timeout, "per-test timeout must be positive");
        }
        if self.web_server.timeout == 0 {
            diag.error(
                WebServerConfig::FIELDS.timeout,
                "web server startup timeout must be positive",
            );
        }
        if self.projects.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.projects,
                "at least one browser project is required",
                "e.g. projects = [\"chromium\"]",
            );
        }
        if self.runner.first().is_none_or(|p| p.trim().is_empty()) {
            diag.error_with_hint(
                Self::FIELDS.runner,
                "runner command is empty",
                "e.g. runner = [\"npx\", \"playwright\", \"test\"]",
            );
        }
        if self.priority_env.trim().is_empty() {
            diag.error(Self::FIELDS.priority_env, "environment variable name is empty");
        }
        if self.workers.ci == Some(0) {
            diag.error(WorkersConfig::FIELDS.ci, "worker count must be at least 1");
        }
        if self.workers.local == Some(0) {
            diag.error(WorkersConfig::FIELDS.local, "worker count must be at least 1");
        }
    }

    fn validate_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(value) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {}
            Ok(parsed) => diag.error_with_hint(
                field,
                format!("'{}' is not an http(s) URL with a host", parsed),
                "use format like http://localhost:3001",
            ),
            Err(e) => diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like http://localhost:3001",
            ),
        }
    }
}
