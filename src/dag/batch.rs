// src/dag/batch.rs

//! Balancer output types.

use crate::dag::graph::{TaskGraph, TaskId};
use crate::errors::{Result, TermplanError};

/// Courses assigned together to one semester, in admission order.
///
/// Totals are derived from the graph on demand rather than stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    tasks: Vec<TaskId>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, task: TaskId) {
        self.tasks.push(task);
    }

    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, task: TaskId) -> bool {
        self.tasks.contains(&task)
    }

    pub fn total_credits(&self, graph: &TaskGraph) -> u32 {
        self.tasks
            .iter()
            .filter_map(|&id| graph.task(id))
            .map(|t| t.credits())
            .sum()
    }

    pub fn total_hours(&self, graph: &TaskGraph) -> u32 {
        self.tasks
            .iter()
            .filter_map(|&id| graph.task(id))
            .map(|t| t.hours())
            .sum()
    }

    /// Course names in admission order.
    pub fn names<'g>(&self, graph: &'g TaskGraph) -> Vec<&'g str> {
        self.tasks.iter().map(|&id| graph.name_of(id)).collect()
    }
}

/// Why a task was left out of every semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrandReason {
    /// The task alone exceeds `max_credits` or `max_hours`.
    Oversized { credits: u32, hours: u32 },
    /// Some direct prerequisites were never placed (a cycle, or an upstream
    /// course that was itself stranded).
    Blocked { waiting_on: Vec<TaskId> },
}

/// A task left unplaced at the end of a balancer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandedTask {
    pub task: TaskId,
    pub reason: StrandReason,
}

/// Result of a balancer run: semesters in generation order plus any tasks
/// that could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub batches: Vec<Batch>,
    pub stranded: Vec<StrandedTask>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Whether every task made it into some semester.
    pub fn is_complete(&self) -> bool {
        self.stranded.is_empty()
    }

    /// Index of the semester holding `task`, if it was placed.
    pub fn batch_of(&self, task: TaskId) -> Option<usize> {
        self.batches.iter().position(|b| b.contains(task))
    }

    /// Number of placed tasks across all semesters.
    pub fn placed_count(&self) -> usize {
        self.batches.iter().map(Batch::len).sum()
    }

    /// Turn stranded tasks into [`TermplanError::Unsatisfiable`], naming each.
    pub fn ensure_complete(&self, graph: &TaskGraph) -> Result<()> {
        if self.stranded.is_empty() {
            return Ok(());
        }
        let names = self
            .stranded
            .iter()
            .map(|s| graph.name_of(s.task).to_string())
            .collect();
        Err(TermplanError::Unsatisfiable(names))
    }
}
