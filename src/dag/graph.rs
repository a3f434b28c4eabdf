// src/dag/graph.rs

use std::collections::HashMap;
use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::config::model::PlanFile;
use crate::errors::{Result, TermplanError};

/// Stable handle to a task inside a [`TaskGraph`].
///
/// The wrapped value is the task's insertion index, which doubles as the
/// tie-break key when the balancer orders courses of equal credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(usize);

impl TaskId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One schedulable course.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    credits: u32,
    hours: u32,
    /// Direct prerequisites, in the order they were declared.
    prerequisites: Vec<TaskId>,
    /// Direct dependents: tasks that list this one as a prerequisite.
    dependents: Vec<TaskId>,
}

impl Task {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn prerequisites(&self) -> &[TaskId] {
        &self.prerequisites
    }

    pub fn dependents(&self) -> &[TaskId] {
        &self.dependents
    }
}

/// Arena of tasks plus index-based prerequisite edges.
///
/// Tasks are never removed, so a [`TaskId`] handed out by
/// [`TaskGraph::insert_task`] stays valid for the life of the graph. No cycle
/// check happens on insertion; see [`TaskGraph::find_cycle`].
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: Vec<Task>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a validated [`PlanFile`].
    ///
    /// Courses are inserted in file order and `after` entries are resolved by
    /// name. Fails with [`TermplanError::TaskNotFound`] if a reference does not
    /// resolve, which validation already rules out.
    pub fn from_plan(plan: &PlanFile) -> Result<Self> {
        let mut graph = TaskGraph::new();
        let mut by_name: HashMap<&str, TaskId> = HashMap::new();

        for course in plan.course.iter() {
            let id = graph.insert_task(course.name.clone(), course.credits, course.hours);
            by_name.insert(course.name.as_str(), id);
        }

        for course in plan.course.iter() {
            let task = by_name[course.name.as_str()];
            for dep in course.after.iter() {
                let prerequisite = by_name
                    .get(dep.as_str())
                    .copied()
                    .ok_or_else(|| TermplanError::TaskNotFound(dep.clone()))?;
                graph.add_prerequisite(task, prerequisite);
            }
        }

        debug!(
            tasks = graph.len(),
            edges = graph.edge_count(),
            "built task graph from plan"
        );

        Ok(graph)
    }

    /// Append a new task with no edges and return its handle.
    ///
    /// Duplicate names are accepted here; uniqueness is a plan-file concern.
    pub fn insert_task(&mut self, name: impl Into<String>, credits: u32, hours: u32) -> TaskId {
        let id = TaskId(self.tasks.len());
        self.tasks.push(Task {
            name: name.into(),
            credits,
            hours,
            prerequisites: Vec::new(),
            dependents: Vec::new(),
        });
        id
    }

    /// Declare that `task` requires `prerequisite`.
    ///
    /// Records the edge on both ends. Nothing stops this from creating a
    /// cycle.
    ///
    /// # Panics
    ///
    /// Panics if either handle did not come from this graph.
    pub fn add_prerequisite(&mut self, task: TaskId, prerequisite: TaskId) {
        self.tasks[task.0].prerequisites.push(prerequisite);
        self.tasks[prerequisite.0].dependents.push(task);
    }

    /// All tasks in insertion order.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// All task handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = TaskId> + use<> {
        (0..self.tasks.len()).map(TaskId)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.tasks.iter().map(|t| t.prerequisites.len()).sum()
    }

    /// First task with the given name, in insertion order.
    pub fn find(&self, name: &str) -> Option<TaskId> {
        self.tasks.iter().position(|t| t.name == name).map(TaskId)
    }

    /// Name of a task, or an empty string for a foreign handle.
    pub fn name_of(&self, id: TaskId) -> &str {
        self.task(id).map(Task::name).unwrap_or("")
    }

    /// Immediate prerequisites of a task.
    pub fn prerequisites_of(&self, id: TaskId) -> &[TaskId] {
        self.task(id).map(Task::prerequisites).unwrap_or(&[])
    }

    /// Immediate dependents of a task.
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.task(id).map(Task::dependents).unwrap_or(&[])
    }

    /// Tasks without prerequisites, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.ids()
            .filter(|&id| self.prerequisites_of(id).is_empty())
    }

    /// Return the members of one prerequisite cycle, if any exists.
    ///
    /// Picks the strongly connected component containing the lowest task id
    /// among all cyclic components, and returns its members sorted by id. A
    /// task listed as its own prerequisite is a cycle of one.
    pub fn find_cycle(&self) -> Option<Vec<TaskId>> {
        let graph = self.to_petgraph();

        tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1 || scc.iter().any(|&n| graph.contains_edge(n, n))
            })
            .map(|scc| {
                let mut members: Vec<TaskId> = scc.into_iter().map(|n| graph[n]).collect();
                members.sort();
                members
            })
            .min_by_key(|members| members[0])
    }

    /// Fail with [`TermplanError::DagCycle`] if any prerequisite cycle exists.
    pub fn ensure_acyclic(&self) -> Result<()> {
        match self.find_cycle() {
            None => Ok(()),
            Some(cycle) => {
                let names: Vec<&str> = cycle.iter().map(|&id| self.name_of(id)).collect();
                Err(TermplanError::DagCycle(format!(
                    "cycle detected in prerequisites involving courses: {}",
                    names.join(", ")
                )))
            }
        }
    }

    /// Edge direction: prerequisite -> dependent. Node weights are task ids.
    fn to_petgraph(&self) -> DiGraph<TaskId, ()> {
        let mut graph: DiGraph<TaskId, ()> =
            DiGraph::with_capacity(self.tasks.len(), self.edge_count());

        for id in self.ids() {
            graph.add_node(id);
        }

        for (idx, task) in self.tasks.iter().enumerate() {
            for prereq in task.prerequisites.iter() {
                graph.add_edge(NodeIndex::new(prereq.0), NodeIndex::new(idx), ());
            }
        }

        graph
    }
}
