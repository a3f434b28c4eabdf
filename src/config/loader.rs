// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;

/// Load a plan file from a given path and return the raw `RawPlanFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (prerequisite correctness, etc.). Use [`load_and_validate`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let plan: RawPlanFile = toml::from_str(&contents)?;
    debug!(path = ?path, courses = plan.course.len(), "parsed plan file");

    Ok(plan)
}

/// Load a plan file from path and run validation.
///
/// - Reads TOML.
/// - Applies defaults for missing `[limits]` keys.
/// - Checks for unknown or duplicate course names, self references,
///   prerequisite cycles and zero ceilings.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw = load_from_path(&path)?;
    PlanFile::try_from(raw)
}

/// Plan file used when `--plan` is not given: `Termplan.toml` in the current
/// working directory.
pub fn default_plan_path() -> PathBuf {
    PathBuf::from("Termplan.toml")
}
