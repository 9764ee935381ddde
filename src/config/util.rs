//! Config file discovery.

use std::path::{Path, PathBuf};

/// Find the config file, searching upward from the current directory.
///
/// ```text
/// /home/user/easyloops/e2e/specs/   ← cwd
/// /home/user/easyloops/easyloops.toml  ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

/// Walk from `start` to the filesystem root looking for `name`.
fn find_upward(start: &Path, name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
