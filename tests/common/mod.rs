#![allow(dead_code)]

use std::collections::HashSet;

use termplan::dag::{Schedule, TaskGraph, TaskId};
use termplan::types::Limits;

pub use termplan_test_utils::init_tracing;

/// Names of every semester, in order.
pub fn semester_names(graph: &TaskGraph, schedule: &Schedule) -> Vec<Vec<String>> {
    schedule
        .batches
        .iter()
        .map(|b| b.names(graph).into_iter().map(str::to_string).collect())
        .collect()
}

/// Assert the structural guarantees every schedule must satisfy, whatever the
/// input: no task twice, prerequisites strictly earlier, ceilings respected,
/// and the target checked after every admission.
pub fn assert_schedule_invariants(graph: &TaskGraph, limits: Limits, schedule: &Schedule) {
    let mut seen: HashSet<TaskId> = HashSet::new();

    for (i, batch) in schedule.batches.iter().enumerate() {
        assert!(!batch.is_empty(), "semester {} is empty", i + 1);
        assert!(batch.total_credits(graph) <= limits.max_credits);
        assert!(batch.total_hours(graph) <= limits.max_hours);

        for &id in batch.tasks() {
            assert!(seen.insert(id), "task {} placed twice", graph.name_of(id));
            for &p in graph.prerequisites_of(id) {
                let at = schedule
                    .batch_of(p)
                    .unwrap_or_else(|| panic!("prerequisite {} never placed", graph.name_of(p)));
                assert!(at < i, "prerequisite {} not before semester {}", graph.name_of(p), i + 1);
            }
        }

        // Every admission except the last happened below the target.
        let tasks = batch.tasks();
        let before_last: u32 = tasks[..tasks.len() - 1]
            .iter()
            .filter_map(|&id| graph.task(id))
            .map(|t| t.credits())
            .sum();
        assert!(
            tasks.len() == 1 || before_last < limits.target_credits,
            "semester {} kept filling after reaching the target",
            i + 1
        );
    }

    for s in schedule.stranded.iter() {
        assert!(!seen.contains(&s.task), "stranded task was also placed");
    }
    assert_eq!(seen.len() + schedule.stranded.len(), graph.len());
}
