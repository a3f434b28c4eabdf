// src/config/model.rs

use serde::Deserialize;

use crate::types::Limits;

/// Plan file exactly as deserialized from TOML, before validation.
///
/// ```toml
/// [limits]
/// target_credits = 15
/// max_credits = 18
/// max_hours = 40
///
/// [[course]]
/// name = "CS 46A (Intro to Programming)"
/// credits = 4
/// hours = 7
///
/// [[course]]
/// name = "CS 46B (Data Structures)"
/// credits = 4
/// hours = 8
/// after = ["CS 46A (Intro to Programming)"]
/// ```
///
/// Courses are an array of tables so that file order survives
/// deserialization; the balancer uses that order to break ties.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlanFile {
    /// Per-semester limits from `[limits]`.
    #[serde(default)]
    pub limits: Limits,

    /// All courses from `[[course]]`, in file order.
    #[serde(default)]
    pub course: Vec<CourseConfig>,
}

/// One `[[course]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    /// Display name; also the key other courses use in `after`.
    pub name: String,

    /// Credit weight.
    pub credits: u32,

    /// Weekly workload in hours.
    pub hours: u32,

    /// Prerequisites: this course waits until every course listed here has
    /// been placed in an earlier semester.
    #[serde(default)]
    pub after: Vec<String>,
}

/// A validated plan file.
///
/// Only obtainable through `PlanFile::try_from(RawPlanFile)` (or the loader),
/// so holders can rely on:
/// - at least one course
/// - unique course names
/// - every `after` entry naming another course in the plan
/// - no prerequisite cycles
/// - non-zero credit and hour ceilings
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub limits: Limits,
    pub course: Vec<CourseConfig>,
}

impl PlanFile {
    /// Build without running validation. Used by `TryFrom` once checks pass.
    pub(crate) fn new_unchecked(limits: Limits, course: Vec<CourseConfig>) -> Self {
        Self { limits, course }
    }

    /// Total credits across every course in the plan.
    pub fn total_credits(&self) -> u64 {
        self.course.iter().map(|c| u64::from(c.credits)).sum()
    }
}
