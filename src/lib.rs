// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod render;
pub mod types;

use std::io::{self, Write};

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_from_path;
use crate::config::model::PlanFile;
use crate::dag::{TaskGraph, balance, balance_checked};
use crate::errors::Result;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading, CLI limit overrides and validation
/// - graph construction
/// - balancing (strict or permissive)
/// - rendering to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

/// Same as [`run`], but writes the schedule to `out`.
pub fn run_with_output(args: CliArgs, out: &mut impl Write) -> Result<()> {
    let plan = load_plan(&args)?;

    if args.dry_run {
        render::write_plan(out, &plan)?;
        debug!("dry-run complete (no balancing)");
        return Ok(());
    }

    let graph = TaskGraph::from_plan(&plan)?;
    info!(
        courses = graph.len(),
        target_credits = plan.limits.target_credits,
        max_credits = plan.limits.max_credits,
        max_hours = plan.limits.max_hours,
        "balancing plan"
    );

    let schedule = if args.strict {
        balance_checked(&graph, plan.limits)?
    } else {
        balance(&graph, plan.limits)
    };

    render::write_schedule(out, &graph, &schedule)?;
    out.flush()?;
    Ok(())
}

/// Read the plan file, apply CLI overrides to its limits, then validate.
fn load_plan(args: &CliArgs) -> Result<PlanFile> {
    let mut raw = load_from_path(&args.plan)?;

    raw.limits = raw
        .limits
        .with_overrides(args.target_credits, args.max_credits, args.max_hours);

    PlanFile::try_from(raw)
}
