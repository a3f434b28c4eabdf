#![allow(dead_code)]

use termplan::config::{CourseConfig, PlanFile, RawPlanFile};
use termplan::types::Limits;

/// Builder for `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile {
                limits: Limits::default(),
                course: Vec::new(),
            },
        }
    }

    pub fn with_limits(mut self, target_credits: u32, max_credits: u32, max_hours: u32) -> Self {
        self.plan.limits = Limits::new(target_credits, max_credits, max_hours);
        self
    }

    pub fn with_course(mut self, course: CourseConfig) -> Self {
        self.plan.course.push(course);
        self
    }

    /// The unvalidated plan, for tests that exercise validation errors.
    pub fn build_raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CourseConfig`.
pub struct CourseBuilder {
    course: CourseConfig,
}

impl CourseBuilder {
    pub fn new(name: &str, credits: u32, hours: u32) -> Self {
        Self {
            course: CourseConfig {
                name: name.to_string(),
                credits,
                hours,
                after: vec![],
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.course.after.push(dep.to_string());
        self
    }

    pub fn build(self) -> CourseConfig {
        self.course
    }
}
