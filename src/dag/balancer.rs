// src/dag/balancer.rs

use std::cmp::Reverse;
use std::collections::BTreeSet;

use tracing::{debug, info, trace, warn};

use crate::dag::batch::{Batch, Schedule, StrandReason, StrandedTask};
use crate::dag::graph::{TaskGraph, TaskId};
use crate::errors::Result;
use crate::types::Limits;

/// Set of tasks already assigned to a semester.
///
/// Kept outside the graph so the same [`TaskGraph`] can be balanced any
/// number of times, optionally starting from courses that are already done.
pub type PlacedSet = BTreeSet<TaskId>;

/// Greedy semester builder over an immutable [`TaskGraph`].
///
/// Each call to [`Balancer::next_batch`] runs one round:
/// - collect every unplaced task whose prerequisites are all placed
/// - order them by credits descending, insertion order ascending
/// - admit them one by one while both ceilings hold, skipping any that
///   would overflow
/// - stop as soon as the semester's credits reach the target
///
/// A round that admits nothing ends the run, so a run takes at most one
/// round per task.
#[derive(Debug)]
pub struct Balancer<'g> {
    graph: &'g TaskGraph,
    limits: Limits,
    placed: PlacedSet,
    /// Number of semesters produced so far.
    rounds: usize,
    /// Set once a round fails to admit anything.
    stalled: bool,
}

impl<'g> Balancer<'g> {
    pub fn new(graph: &'g TaskGraph, limits: Limits) -> Self {
        Self::with_placed(graph, limits, PlacedSet::new())
    }

    /// Start from tasks that are already placed, e.g. courses completed in a
    /// previous plan. Those tasks count as satisfied prerequisites and are
    /// never scheduled again.
    pub fn with_placed(graph: &'g TaskGraph, limits: Limits, placed: PlacedSet) -> Self {
        Self {
            graph,
            limits,
            placed,
            rounds: 0,
            stalled: false,
        }
    }

    pub fn placed(&self) -> &PlacedSet {
        &self.placed
    }

    pub fn is_placed(&self, task: TaskId) -> bool {
        self.placed.contains(&task)
    }

    /// `true` once every task is placed or a round made no progress.
    pub fn is_done(&self) -> bool {
        self.stalled || self.graph.ids().all(|id| self.is_placed(id))
    }

    /// Whether `task` is unplaced and every prerequisite is placed.
    pub fn is_eligible(&self, task: TaskId) -> bool {
        !self.is_placed(task)
            && self
                .graph
                .prerequisites_of(task)
                .iter()
                .all(|&p| self.is_placed(p))
    }

    /// Tasks eligible for the next round, in the order the round will try
    /// them: credits descending, then insertion order.
    pub fn available(&self) -> Vec<TaskId> {
        let mut ready: Vec<TaskId> = self
            .graph
            .ids()
            .filter(|&id| self.is_eligible(id))
            .collect();

        ready.sort_by_key(|&id| {
            let credits = self.graph.task(id).map(|t| t.credits()).unwrap_or(0);
            (Reverse(credits), id)
        });

        ready
    }

    /// Run one round and return the semester it produced.
    ///
    /// Returns `None` when the run is over: either everything is placed, or
    /// no eligible task fits into an empty semester. After `None` the
    /// balancer stays done.
    pub fn next_batch(&mut self) -> Option<Batch> {
        if self.is_done() {
            return None;
        }

        let candidates = self.available();
        let round = self.rounds + 1;
        debug!(round, candidates = candidates.len(), "balancer: starting round");

        let mut batch = Batch::new();
        let mut credits: u32 = 0;
        let mut hours: u32 = 0;

        for id in candidates {
            let Some(task) = self.graph.task(id) else {
                continue;
            };

            let fits = fits_within(credits, task.credits(), self.limits.max_credits)
                && fits_within(hours, task.hours(), self.limits.max_hours);

            if !fits {
                trace!(
                    round,
                    task = %task.name(),
                    credits = task.credits(),
                    hours = task.hours(),
                    "does not fit this semester; skipping"
                );
                continue;
            }

            credits += task.credits();
            hours += task.hours();
            self.placed.insert(id);
            batch.push(id);
            trace!(round, task = %task.name(), credits, hours, "admitted");

            if credits >= self.limits.target_credits {
                trace!(round, credits, "target reached; closing semester");
                break;
            }
        }

        if batch.is_empty() {
            debug!(round, "no eligible course fits; stopping");
            self.stalled = true;
            return None;
        }

        self.rounds = round;
        debug!(round, courses = batch.len(), credits, hours, "balancer: semester complete");
        Some(batch)
    }

    /// Drive the balancer to completion.
    ///
    /// Returns the schedule together with the final placed set, so callers
    /// can continue from it later.
    pub fn run(mut self) -> (Schedule, PlacedSet) {
        let mut batches = Vec::new();
        while let Some(batch) = self.next_batch() {
            batches.push(batch);
        }

        let stranded = self.stranded();
        for s in stranded.iter() {
            match &s.reason {
                StrandReason::Oversized { credits, hours } => warn!(
                    task = %self.graph.name_of(s.task),
                    credits,
                    hours,
                    "course exceeds a semester limit on its own; not scheduled"
                ),
                StrandReason::Blocked { waiting_on } => {
                    let waiting: Vec<&str> =
                        waiting_on.iter().map(|&p| self.graph.name_of(p)).collect();
                    warn!(
                        task = %self.graph.name_of(s.task),
                        ?waiting,
                        "prerequisites never scheduled; not scheduled"
                    )
                }
            }
        }

        info!(
            semesters = batches.len(),
            placed = self.placed.len(),
            stranded = stranded.len(),
            "balancing finished"
        );

        (Schedule { batches, stranded }, self.placed)
    }

    /// Classify every unplaced task. Only meaningful once the run is done: a
    /// stalled round means each eligible leftover could not fit on its own.
    fn stranded(&self) -> Vec<StrandedTask> {
        self.graph
            .ids()
            .filter(|&id| !self.is_placed(id))
            .filter_map(|id| {
                let task = self.graph.task(id)?;
                let reason = if !self.limits.admits_alone(task.credits(), task.hours()) {
                    StrandReason::Oversized {
                        credits: task.credits(),
                        hours: task.hours(),
                    }
                } else {
                    let mut waiting_on: Vec<TaskId> = task
                        .prerequisites()
                        .iter()
                        .copied()
                        .filter(|&p| !self.is_placed(p))
                        .collect();
                    waiting_on.sort();
                    waiting_on.dedup();
                    StrandReason::Blocked { waiting_on }
                };
                Some(StrandedTask { task: id, reason })
            })
            .collect()
    }
}

fn fits_within(running: u32, weight: u32, max: u32) -> bool {
    running.checked_add(weight).is_some_and(|total| total <= max)
}

/// Balance every task of `graph` into semesters.
///
/// Never fails: tasks that cannot be placed are listed in
/// [`Schedule::stranded`].
pub fn balance(graph: &TaskGraph, limits: Limits) -> Schedule {
    Balancer::new(graph, limits).run().0
}

/// Balance starting from an already-placed set; returns the schedule for the
/// remaining tasks and the updated set.
pub fn balance_from(graph: &TaskGraph, limits: Limits, placed: PlacedSet) -> (Schedule, PlacedSet) {
    Balancer::with_placed(graph, limits, placed).run()
}

/// Strict variant of [`balance`].
///
/// Fails with `DagCycle` before scheduling if prerequisites form a cycle, and
/// with `Unsatisfiable` if any task is left unplaced afterwards.
pub fn balance_checked(graph: &TaskGraph, limits: Limits) -> Result<Schedule> {
    graph.ensure_acyclic()?;
    let schedule = balance(graph, limits);
    schedule.ensure_complete(graph)?;
    Ok(schedule)
}
