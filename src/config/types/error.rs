//! Configuration error types.

use super::{ConfigPresence, FieldPath};
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config file `{0}` not found, run `easyloops init` to create one")]
    NotFound(PathBuf),

    // No #[from]: source() would print every diagnostic twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration problem
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Field path (e.g., "wiki.slugs")
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors, warnings and hints collected over one validation pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Experimental fields that were set.
    hints: Vec<FieldPath>,
    /// Deprecated fields that were set.
    warnings: Vec<(FieldPath, String)>,
    /// Keys written in the config file; status checks only fire for these.
    presence: ConfigPresence,
}

impl ConfigDiagnostics {
    pub fn with_presence(presence: ConfigPresence) -> Self {
        Self {
            presence,
            ..Self::default()
        }
    }

    /// Whether `path` (e.g. `sitemap.strict`) was written in the file.
    pub fn is_present(&self, path: &str) -> bool {
        self.presence.contains(path)
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    pub fn experimental_hint(&mut self, field: FieldPath) {
        self.hints.push(field);
    }

    /// Print collected warnings and hints, grouped.
    pub fn print_hints_and_warnings(&self) {
        if !self.warnings.is_empty() {
            crate::log!("warning"; "deprecated fields, will be removed in a future version:");
            for (field, message) in &self.warnings {
                eprintln!("- {}: {}", field.as_str(), message);
            }
        }

        if !self.hints.is_empty() {
            crate::log!("hint"; "experimental fields, may change or be removed:");
            for field in &self.hints {
                eprintln!("- {}", field.as_str());
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    pub fn hints(&self) -> &[FieldPath] {
        &self.hints
    }

    /// `Err(self)` if any error was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
