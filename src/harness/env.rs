//! Environment inputs of a test run.

use crate::config::E2eConfig;

/// What the harness reads from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessEnv {
    /// `CI` is set to a non-empty value.
    pub ci: bool,
    /// Tag filter from `[e2e] priority_env`, e.g. `p0`.
    pub priority: Option<String>,
}

impl HarnessEnv {
    pub fn from_env(config: &E2eConfig) -> Self {
        Self::from_lookup(config, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn from_lookup(config: &E2eConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let priority = lookup(&config.priority_env)
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty());
        Self {
            // any non-empty value, whitespace included, marks a CI run
            ci: lookup("CI").is_some_and(|value| !value.is_empty()),
            priority,
        }
    }

    /// Apply `--ci` and `--priority`.
    pub fn with_overrides(mut self, ci: bool, priority: Option<&str>) -> Self {
        self.ci |= ci;
        if let Some(priority) = priority.filter(|p| !p.trim().is_empty()) {
            self.priority = Some(priority.trim().to_owned());
        }
        self
    }
}
