mod common;
use crate::common::init_tracing;

use termplan::dag::TaskGraph;
use termplan::errors::TermplanError;

#[test]
fn insert_and_wire_prerequisites() {
    init_tracing();

    let mut graph = TaskGraph::new();
    let intro = graph.insert_task("CS 46A", 4, 7);
    let ds = graph.insert_task("CS 46B", 4, 8);
    let discrete = graph.insert_task("CS 47", 3, 5);
    graph.add_prerequisite(ds, intro);
    graph.add_prerequisite(discrete, intro);

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.prerequisites_of(ds), &[intro]);
    assert_eq!(graph.dependents_of(intro), &[ds, discrete]);
    assert!(graph.dependents_of(ds).is_empty());
    assert_eq!(graph.roots().collect::<Vec<_>>(), vec![intro]);

    let names: Vec<&str> = graph.all_tasks().map(|t| t.name()).collect();
    assert_eq!(names, vec!["CS 46A", "CS 46B", "CS 47"]);

    let task = graph.task(discrete).expect("task exists");
    assert_eq!(task.credits(), 3);
    assert_eq!(task.hours(), 5);
}

#[test]
fn duplicate_names_are_separate_tasks() {
    init_tracing();

    let mut graph = TaskGraph::new();
    let first = graph.insert_task("PE", 1, 1);
    let second = graph.insert_task("PE", 1, 1);

    assert_ne!(first, second);
    assert_eq!(graph.find("PE"), Some(first));
    assert_eq!(graph.find("missing"), None);
}

#[test]
fn acyclic_graph_has_no_cycle() {
    init_tracing();

    let mut graph = TaskGraph::new();
    let a = graph.insert_task("a", 1, 1);
    let b = graph.insert_task("b", 1, 1);
    let c = graph.insert_task("c", 1, 1);
    graph.add_prerequisite(b, a);
    graph.add_prerequisite(c, b);
    graph.add_prerequisite(c, a);

    assert_eq!(graph.find_cycle(), None);
    assert!(graph.ensure_acyclic().is_ok());
}

#[test]
fn find_cycle_reports_cycle_members() {
    init_tracing();

    let mut graph = TaskGraph::new();
    let root = graph.insert_task("root", 1, 1);
    let a = graph.insert_task("a", 1, 1);
    let b = graph.insert_task("b", 1, 1);
    let c = graph.insert_task("c", 1, 1);
    graph.add_prerequisite(a, root);
    graph.add_prerequisite(b, a);
    graph.add_prerequisite(c, b);
    graph.add_prerequisite(a, c);

    assert_eq!(graph.find_cycle(), Some(vec![a, b, c]));

    match graph.ensure_acyclic() {
        Err(TermplanError::DagCycle(msg)) => {
            assert!(msg.contains("a, b, c"), "unexpected message: {msg}");
        }
        other => panic!("Expected DagCycle, got: {:?}", other),
    }
}

#[test]
fn self_prerequisite_is_a_cycle() {
    init_tracing();

    let mut graph = TaskGraph::new();
    let solo = graph.insert_task("solo", 1, 1);
    graph.add_prerequisite(solo, solo);

    assert_eq!(graph.find_cycle(), Some(vec![solo]));
}
