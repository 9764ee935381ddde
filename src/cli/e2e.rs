//! `e2e` command: run the browser tests against the dev server.

use anyhow::Result;

use crate::cli::args::E2eArgs;
use crate::config::SiteConfig;
use crate::harness::{self, HarnessEnv, HarnessPlan};
use crate::{debug, log};

/// Resolve and run. Exits the process with the runner's code on failure.
pub fn run_e2e(args: &E2eArgs, config: &SiteConfig) -> Result<()> {
    let plan = plan(args, config)?;

    if args.dry_run {
        print!("{plan}");
        return Ok(());
    }

    debug!("e2e"; "ci={} retries={} workers={:?}", plan.ci, plan.retries, plan.workers);
    let code = harness::execute(&plan)?;
    if code != 0 {
        log!("error"; "e2e run failed");
        std::process::exit(code);
    }
    Ok(())
}

fn plan(args: &E2eArgs, config: &SiteConfig) -> Result<HarnessPlan> {
    let env = HarnessEnv::from_env(&config.e2e).with_overrides(args.ci, args.priority.as_deref());
    Ok(harness::resolve(config, &env, &args.extra)?)
}
