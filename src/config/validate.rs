// src/config/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{Result, TermplanError};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = TermplanError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw.limits, raw.course))
    }
}

fn validate_raw_plan(plan: &RawPlanFile) -> Result<()> {
    ensure_has_courses(plan)?;
    validate_limits(plan)?;
    validate_unique_names(plan)?;
    validate_prerequisites(plan)?;
    validate_dag(plan)?;
    Ok(())
}

fn ensure_has_courses(plan: &RawPlanFile) -> Result<()> {
    if plan.course.is_empty() {
        return Err(TermplanError::ConfigError(
            "plan must contain at least one [[course]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_limits(plan: &RawPlanFile) -> Result<()> {
    let limits = &plan.limits;

    if limits.max_credits == 0 {
        return Err(TermplanError::ConfigError(
            "[limits].max_credits must be >= 1 (got 0)".to_string(),
        ));
    }
    if limits.max_hours == 0 {
        return Err(TermplanError::ConfigError(
            "[limits].max_hours must be >= 1 (got 0)".to_string(),
        ));
    }

    if limits.target_credits > limits.max_credits {
        warn!(
            target_credits = limits.target_credits,
            max_credits = limits.max_credits,
            "target above max; every semester will fill to the credit ceiling"
        );
    }

    Ok(())
}

fn validate_unique_names(plan: &RawPlanFile) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for course in plan.course.iter() {
        if !seen.insert(course.name.as_str()) {
            return Err(TermplanError::ConfigError(format!(
                "course '{}' is defined more than once",
                course.name
            )));
        }
    }
    Ok(())
}

fn validate_prerequisites(plan: &RawPlanFile) -> Result<()> {
    let names: HashSet<&str> = plan.course.iter().map(|c| c.name.as_str()).collect();

    for course in plan.course.iter() {
        for dep in course.after.iter() {
            if dep == &course.name {
                return Err(TermplanError::ConfigError(format!(
                    "course '{}' cannot list itself in `after`",
                    course.name
                )));
            }
            if !names.contains(dep.as_str()) {
                return Err(TermplanError::ConfigError(format!(
                    "course '{}' has unknown prerequisite '{}' in `after`",
                    course.name, dep
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(plan: &RawPlanFile) -> Result<()> {
    // Edge direction: prerequisite -> course.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for course in plan.course.iter() {
        graph.add_node(course.name.as_str());
    }

    for course in plan.course.iter() {
        for dep in course.after.iter() {
            graph.add_edge(dep.as_str(), course.name.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(TermplanError::DagCycle(format!(
            "cycle detected in prerequisites involving course '{}'",
            cycle.node_id()
        ))),
    }
}
