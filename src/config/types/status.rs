//! Field status checks for the `Config` derive.
//!
//! Fields may be tagged `#[config(status = ...)]`. When such a key is
//! written in `easyloops.toml`, the generated `validate_field_status`
//! calls into this module.

use super::FieldPath;
use crate::config::ConfigDiagnostics;
use rustc_hash::FxHashSet;

/// Dotted paths of every key and table written in the config file.
///
/// `[e2e.web_server]` with `timeout = 60` yields `e2e`, `e2e.web_server`
/// and `e2e.web_server.timeout`.
#[derive(Debug, Clone, Default)]
pub struct ConfigPresence {
    paths: FxHashSet<String>,
}

impl ConfigPresence {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(content)?;
        let mut presence = Self::default();
        for (key, value) in &table {
            presence.collect(key.clone(), value);
        }
        Ok(presence)
    }

    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    fn collect(&mut self, path: String, value: &toml::Value) {
        if let toml::Value::Table(table) = value {
            for (key, child) in table {
                self.collect(format!("{path}.{key}"), child);
            }
        }
        self.paths.insert(path);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
    NotImplemented,
    Deprecated,
}

impl FieldStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::NotImplemented => "not implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Diagnostic paths must be `'static`; config validation runs once per
/// process so the leak is bounded.
fn leak_path(path: String) -> FieldPath {
    FieldPath::new(Box::leak(path.into_boxed_str()))
}

/// Report a single field written in the config file.
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    let path = leak_path(field_path.to_string());
    report(path, status, diag);
}

fn report(path: FieldPath, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    match status {
        FieldStatus::NotImplemented => diag.error_with_hint(
            path,
            format!("this field is {}", status.label()),
            "remove this field or wait for a future release",
        ),
        FieldStatus::Deprecated => diag.warn(path, format!("this field is {}", status.label())),
        FieldStatus::Experimental => diag.experimental_hint(path),
    }
}
