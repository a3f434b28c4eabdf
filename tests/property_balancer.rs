mod common;
use crate::common::assert_schedule_invariants;

use std::collections::HashSet;

use proptest::prelude::*;
use termplan::dag::{Balancer, StrandReason, TaskGraph, TaskId, balance};
use termplan::types::Limits;

/// One generated course: credits, hours, and raw prerequisite picks.
type CourseSpec = (u32, u32, Vec<usize>);

// Acyclic by construction: task N may only depend on tasks 0..N-1.
fn build_dag(specs: &[CourseSpec]) -> TaskGraph {
    let mut graph = TaskGraph::new();
    let mut ids: Vec<TaskId> = Vec::new();

    for (i, (credits, hours, potential_deps)) in specs.iter().enumerate() {
        let id = graph.insert_task(format!("course_{i}"), *credits, *hours);

        if i > 0 {
            let deps: HashSet<usize> = potential_deps.iter().map(|d| d % i).collect();
            let mut deps: Vec<usize> = deps.into_iter().collect();
            deps.sort();
            for dep in deps {
                graph.add_prerequisite(id, ids[dep]);
            }
        }
        ids.push(id);
    }

    graph
}

fn course_strategy(max_credits: u32, max_hours: u32) -> impl Strategy<Value = CourseSpec> {
    (
        0..=max_credits,
        0..=max_hours,
        proptest::collection::vec(any::<usize>(), 0..3),
    )
}

fn limits_strategy() -> impl Strategy<Value = Limits> {
    (0u32..25, 1u32..20, 1u32..45).prop_map(|(t, c, h)| Limits::new(t, c, h))
}

proptest! {
    #[test]
    fn fitting_dag_is_fully_scheduled(
        limits in limits_strategy(),
        seed in proptest::collection::vec(course_strategy(u32::MAX, u32::MAX), 0..25),
    ) {
        // Clamp every course into the ceilings so each one fits on its own.
        let specs: Vec<CourseSpec> = seed
            .into_iter()
            .map(|(c, h, deps)| (c % (limits.max_credits + 1), h % (limits.max_hours + 1), deps))
            .collect();
        let graph = build_dag(&specs);

        let schedule = balance(&graph, limits);

        prop_assert!(schedule.is_complete(), "stranded: {:?}", schedule.stranded);
        prop_assert_eq!(schedule.placed_count(), graph.len());
        prop_assert!(schedule.batches.len() <= graph.len());
        assert_schedule_invariants(&graph, limits, &schedule);
    }

    #[test]
    fn any_input_terminates_within_bounds(
        limits in limits_strategy(),
        specs in proptest::collection::vec(course_strategy(30, 60), 0..25),
        back_edges in proptest::collection::vec((any::<usize>(), any::<usize>()), 0..4),
    ) {
        let mut graph = build_dag(&specs);

        // Extra edges in arbitrary direction may introduce cycles.
        if !graph.is_empty() {
            let ids: Vec<TaskId> = graph.ids().collect();
            for (a, b) in back_edges {
                graph.add_prerequisite(ids[a % ids.len()], ids[b % ids.len()]);
            }
        }

        let mut balancer = Balancer::new(&graph, limits);
        let mut rounds = 0;
        while balancer.next_batch().is_some() {
            rounds += 1;
            prop_assert!(rounds <= graph.len(), "more rounds than tasks");
        }

        let schedule = balance(&graph, limits);
        assert_schedule_invariants(&graph, limits, &schedule);

        for s in schedule.stranded.iter() {
            let task = graph.task(s.task).expect("stranded task exists");
            match &s.reason {
                StrandReason::Oversized { .. } => {
                    prop_assert!(!limits.admits_alone(task.credits(), task.hours()));
                }
                StrandReason::Blocked { waiting_on } => {
                    prop_assert!(!waiting_on.is_empty());
                    for p in waiting_on {
                        prop_assert!(schedule.batch_of(*p).is_none());
                    }
                }
            }
        }
    }
}
