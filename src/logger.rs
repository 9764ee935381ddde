//! Logging with colored module prefixes.
//!
//! ```ignore
//! log!("sitemap"; "wrote {} urls", count);
//! debug!("e2e"; "argv: {:?}", argv);   // only with --verbose
//! ```
//!
//! Everything goes to stderr so `query` and `meta` can pipe JSON on stdout.

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut out = stderr().lock();
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "serve" => prefix.bright_blue().bold().to_string(),
        "e2e" | "webserver" => prefix.bright_cyan().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "sitemap" | "build" => prefix.bright_green().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_module_name() {
        assert!(colorize_prefix("sitemap").contains("[sitemap]"));
        assert!(colorize_prefix("Serve").contains("[Serve]"));
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
