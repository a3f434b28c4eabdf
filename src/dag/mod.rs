// src/dag/mod.rs

//! Prerequisite graph and semester balancing.
//!
//! - [`graph`] holds the arena of courses and their prerequisite edges.
//! - [`balancer`] contains the greedy round-by-round semester builder.
//! - [`batch`] defines the balancer's output types.

pub mod balancer;
pub mod batch;
pub mod graph;

pub use balancer::{Balancer, PlacedSet, balance, balance_checked, balance_from};
pub use batch::{Batch, Schedule, StrandReason, StrandedTask};
pub use graph::{Task, TaskGraph, TaskId};
