// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermplanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Course not found: {0}")]
    TaskNotFound(String),

    #[error("Cycle detected in prerequisites: {0}")]
    DagCycle(String),

    #[error("Unsatisfiable prerequisites; unscheduled courses: {}", .0.join(", "))]
    Unsatisfiable(Vec<String>),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TermplanError>;
