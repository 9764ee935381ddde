//! Browser test runner invocation.

use std::path::PathBuf;
use std::process::Command;

use super::{HarnessError, HarnessPlan};
use crate::debug;

/// Exit code used when the runner was killed by a signal.
const SIGNALED_EXIT_CODE: i32 = 1;

/// Locate the runner program on `PATH`, or as given when it is a path.
pub fn locate(program: &str) -> Result<PathBuf, HarnessError> {
    which::which(program).map_err(|source| HarnessError::RunnerNotFound {
        program: program.to_owned(),
        source,
    })
}

/// Run the tests and return the runner's exit code.
pub fn run(plan: &HarnessPlan) -> Result<i32, HarnessError> {
    let Some((program, args)) = plan.argv.split_first() else {
        return Err(HarnessError::RunnerNotFound {
            program: String::new(),
            source: which::Error::CannotFindBinaryPath,
        });
    };
    let path = locate(program)?;
    debug!("e2e"; "runner {} {:?}", path.display(), args);

    let status = Command::new(&path)
        .args(args)
        .current_dir(&plan.cwd)
        .env("BASE_URL", &plan.base_url)
        .status()
        .map_err(|source| HarnessError::Spawn {
            program: program.clone(),
            source,
        })?;

    Ok(status.code().unwrap_or(SIGNALED_EXIT_CODE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_missing_program() {
        let err = locate("easyloops-no-such-runner").unwrap_err();
        assert!(
            matches!(err, HarnessError::RunnerNotFound { ref program, .. } if program == "easyloops-no-such-runner")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_shell() {
        assert!(locate("sh").is_ok());
    }
}
