// src/render.rs

//! Plain-text output of schedules and plans.
//!
//! Everything here writes to a caller-supplied [`Write`] so that `run` can
//! target stdout and tests can target a `Vec<u8>`.

use std::io::{self, Write};

use crate::config::model::PlanFile;
use crate::dag::{Schedule, StrandReason, TaskGraph};
use crate::types::Limits;

/// Print each semester with its courses and totals, followed by any courses
/// that could not be scheduled.
pub fn write_schedule(out: &mut impl Write, graph: &TaskGraph, schedule: &Schedule) -> io::Result<()> {
    for (i, batch) in schedule.batches.iter().enumerate() {
        writeln!(out, "Semester {}:", i + 1)?;
        for task in batch.tasks().iter().filter_map(|&id| graph.task(id)) {
            writeln!(
                out,
                "  {} ({} credits, {} hours/week)",
                task.name(),
                task.credits(),
                task.hours()
            )?;
        }
        writeln!(out, "  Total credits: {}", batch.total_credits(graph))?;
        writeln!(out, "  Total hours: {}", batch.total_hours(graph))?;
        writeln!(out)?;
    }

    if !schedule.stranded.is_empty() {
        writeln!(out, "Unscheduled:")?;
        for s in schedule.stranded.iter() {
            let name = graph.name_of(s.task);
            match &s.reason {
                StrandReason::Oversized { credits, hours } => writeln!(
                    out,
                    "  {name} ({credits} credits, {hours} hours/week exceeds semester limits)"
                )?,
                StrandReason::Blocked { waiting_on } => {
                    let waiting: Vec<&str> = waiting_on.iter().map(|&p| graph.name_of(p)).collect();
                    writeln!(out, "  {name} (waiting on: {})", waiting.join(", "))?
                }
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Dry-run output: limits, then every course with its prerequisites.
pub fn write_plan(out: &mut impl Write, plan: &PlanFile) -> io::Result<()> {
    writeln!(out, "termplan dry-run")?;
    write_limits(out, &plan.limits)?;
    writeln!(out)?;

    writeln!(
        out,
        "courses ({}, {} credits total):",
        plan.course.len(),
        plan.total_credits()
    )?;
    for course in plan.course.iter() {
        writeln!(out, "  - {}", course.name)?;
        writeln!(out, "      credits: {}", course.credits)?;
        writeln!(out, "      hours: {}", course.hours)?;
        if !course.after.is_empty() {
            writeln!(out, "      after: {:?}", course.after)?;
        }
    }

    Ok(())
}

fn write_limits(out: &mut impl Write, limits: &Limits) -> io::Result<()> {
    writeln!(out, "  limits.target_credits = {}", limits.target_credits)?;
    writeln!(out, "  limits.max_credits = {}", limits.max_credits)?;
    writeln!(out, "  limits.max_hours = {}", limits.max_hours)
}
