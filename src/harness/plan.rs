//! Resolve `[e2e]` against the environment into a concrete run plan.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use regex::Regex;

use super::{HarnessEnv, HarnessError};
use crate::config::SiteConfig;

/// Everything needed to start the server and the runner.
#[derive(Debug, Clone)]
pub struct HarnessPlan {
    pub ci: bool,
    pub retries: u32,
    pub workers: Option<u32>,
    pub forbid_only: bool,
    /// Runner `--grep` pattern, `@<priority>`.
    pub grep: Option<String>,
    pub base_url: String,
    /// Runner program followed by its arguments.
    pub argv: Vec<String>,
    /// Working directory of the runner.
    pub cwd: PathBuf,
    pub server: ServerPlan,
}

#[derive(Debug, Clone)]
pub struct ServerPlan {
    pub command: String,
    pub url: String,
    pub cwd: PathBuf,
    pub startup_timeout: Duration,
    pub reuse_existing: bool,
}

/// Build the plan. `extra` is appended to the runner argv unchanged.
pub fn resolve(
    config: &SiteConfig,
    env: &HarnessEnv,
    extra: &[String],
) -> Result<HarnessPlan, HarnessError> {
    let e2e = &config.e2e;
    let root = config.get_root();

    let retries = if env.ci { e2e.retries.ci } else { e2e.retries.local };
    let workers = if env.ci { e2e.workers.ci } else { e2e.workers.local };
    let forbid_only = env.ci;

    let grep = env
        .priority
        .as_deref()
        .map(priority_grep)
        .transpose()?;

    let mut argv = e2e.runner.clone();
    argv.push(relative_to(&e2e.test_dir, root).display().to_string());
    argv.push(format!("--retries={retries}"));
    if let Some(workers) = workers {
        argv.push(format!("--workers={workers}"));
    }
    if forbid_only {
        argv.push("--forbid-only".into());
    }
    if let Some(grep) = &grep {
        argv.push(format!("--grep={grep}"));
    }
    argv.push(format!("--reporter={}", e2e.reporter));
    argv.push(format!("--timeout={}", e2e.timeout.saturating_mul(1000)));
    if e2e.fully_parallel {
        argv.push("--fully-parallel".into());
    }
    argv.push(format!("--trace={}", e2e.trace));
    argv.extend(e2e.projects.iter().map(|p| format!("--project={p}")));
    argv.extend(extra.iter().cloned());

    let web_server = &e2e.web_server;
    let server = ServerPlan {
        command: web_server.command.clone(),
        url: web_server.url.clone(),
        cwd: web_server
            .cwd
            .clone()
            .unwrap_or_else(|| root.to_path_buf()),
        startup_timeout: Duration::from_secs(web_server.timeout),
        reuse_existing: web_server.reuse_existing.unwrap_or(!env.ci),
    };

    Ok(HarnessPlan {
        ci: env.ci,
        retries,
        workers,
        forbid_only,
        grep,
        base_url: e2e.base_url.clone(),
        argv,
        cwd: root.to_path_buf(),
        server,
    })
}

/// `p0` → `@p0`, rejected if the result is not a valid regex.
fn priority_grep(priority: &str) -> Result<String, HarnessError> {
    let pattern = format!("@{priority}");
    Regex::new(&pattern).map_err(|source| HarnessError::InvalidGrep {
        pattern: pattern.clone(),
        source,
    })?;
    Ok(pattern)
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel,
        _ => path,
    }
}

impl fmt::Display for HarnessPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "yes" } else { "no" };

        writeln!(f, "environment:  {}", if self.ci { "ci" } else { "local" })?;
        writeln!(f, "base url:     {}", self.base_url)?;
        writeln!(f, "retries:      {}", self.retries)?;
        match self.workers {
            Some(n) => writeln!(f, "workers:      {n}")?,
            None => writeln!(f, "workers:      runner default")?,
        }
        writeln!(f, "forbid only:  {}", yes_no(self.forbid_only))?;
        writeln!(f, "grep:         {}", self.grep.as_deref().unwrap_or("-"))?;
        writeln!(f, "web server:   {}", self.server.command)?;
        writeln!(f, "  url:        {}", self.server.url)?;
        writeln!(f, "  timeout:    {}s", self.server.startup_timeout.as_secs())?;
        writeln!(f, "  reuse:      {}", yes_no(self.server.reuse_existing))?;
        write!(f, "runner:       {}", self.argv.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;

    fn plan(env: HarnessEnv) -> HarnessPlan {
        let config = test_config_at(Path::new("/srv/easyloops"), "");
        resolve(&config, &env, &[]).unwrap()
    }

    #[test]
    fn test_local_plan() {
        let plan = plan(HarnessEnv::default());

        assert_eq!(plan.retries, 0);
        assert_eq!(plan.workers, None);
        assert!(!plan.forbid_only);
        assert!(plan.server.reuse_existing);
        assert_eq!(
            plan.argv,
            vec![
                "npx",
                "playwright",
                "test",
                "e2e",
                "--retries=0",
                "--reporter=html",
                "--timeout=180000",
                "--fully-parallel",
                "--trace=on-first-retry",
                "--project=chromium",
                "--project=firefox",
                "--project=webkit",
            ]
        );
        assert_eq!(plan.cwd, PathBuf::from("/srv/easyloops"));
    }

    #[test]
    fn test_ci_plan() {
        let plan = plan(HarnessEnv {
            ci: true,
            priority: Some("p0".into()),
        });

        assert_eq!(plan.retries, 2);
        assert_eq!(plan.workers, Some(1));
        assert!(plan.forbid_only);
        assert!(!plan.server.reuse_existing);
        assert_eq!(plan.grep.as_deref(), Some("@p0"));
        for arg in ["--retries=2", "--workers=1", "--forbid-only", "--grep=@p0"] {
            assert!(plan.argv.iter().any(|a| a == arg), "missing {arg}");
        }
    }

    #[test]
    fn test_explicit_reuse_wins_over_ci() {
        let config = test_config_at(
            Path::new("/srv"),
            "[e2e.web_server]\nreuse_existing = true",
        );
        let env = HarnessEnv {
            ci: true,
            priority: None,
        };
        assert!(resolve(&config, &env, &[]).unwrap().server.reuse_existing);
    }

    #[test]
    fn test_extra_args_appended() {
        let config = test_config_at(Path::new("/srv"), "");
        let extra = vec!["--headed".to_string()];
        let plan = resolve(&config, &HarnessEnv::default(), &extra).unwrap();
        assert_eq!(plan.argv.last().map(String::as_str), Some("--headed"));
    }

    #[test]
    fn test_invalid_priority_pattern() {
        let config = test_config_at(Path::new("/srv"), "");
        let env = HarnessEnv {
            ci: false,
            priority: Some("p0(".into()),
        };
        let err = resolve(&config, &env, &[]).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidGrep { ref pattern, .. } if pattern == "@p0("));
    }

    #[test]
    fn test_display_mentions_argv() {
        let text = plan(HarnessEnv::default()).to_string();
        assert!(text.contains("environment:  local"));
        assert!(text.contains("npx playwright test e2e"));
    }
}
