//! The `requires` relation and its transitive closure.
//!
//! # Algorithm
//!
//! 1. Seed a worklist with the direct prerequisites of the start course
//! 2. Pop a course; if unvisited, mark it and push its direct prerequisites
//! 3. Stop when the worklist is empty
//!
//! The start course is never marked up front, so it appears in its own
//! closure exactly when some cycle leads back to it. Each course is expanded
//! at most once, bounding the work by the number of edges.

use std::collections::{BTreeMap, BTreeSet};

/// Directed prerequisite graph: course → direct prerequisites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl PrerequisiteGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `course → prerequisite`. Returns `false` if the edge existed.
    pub fn insert(&mut self, course: &str, prerequisite: &str) -> bool {
        self.edges
            .entry(course.to_owned())
            .or_default()
            .insert(prerequisite.to_owned())
    }

    /// Whether the edge `course → prerequisite` is recorded.
    pub fn contains(&self, course: &str, prerequisite: &str) -> bool {
        self.edges
            .get(course)
            .is_some_and(|prereqs| prereqs.contains(prerequisite))
    }

    /// Direct prerequisites of `course`, if it has any outgoing edges.
    pub fn direct(&self, course: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(course)
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Iterates over all edges in `(course, prerequisite)` order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges.iter().flat_map(|(course, prereqs)| {
            prereqs
                .iter()
                .map(move |prereq| (course.as_str(), prereq.as_str()))
        })
    }

    /// Transitive closure of `requires` starting from `course`.
    ///
    /// Unknown courses yield an empty set. `course` itself is included only
    /// if it lies on a cycle.
    pub fn closure(&self, course: &str) -> BTreeSet<String> {
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut worklist: Vec<&str> = match self.edges.get(course) {
            Some(prereqs) => prereqs.iter().map(String::as_str).collect(),
            None => return BTreeSet::new(),
        };

        while let Some(current) = worklist.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(next) = self.edges.get(current) {
                worklist.extend(
                    next.iter()
                        .map(String::as_str)
                        .filter(|c| !visited.contains(c)),
                );
            }
        }

        visited.into_iter().map(str::to_owned).collect()
    }

    /// Whether every transitive prerequisite of `course` is in `completed`.
    ///
    /// Short-circuits on the first missing prerequisite instead of building
    /// the full closure.
    pub fn satisfied_by(&self, course: &str, completed: &BTreeSet<String>) -> bool {
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut worklist: Vec<&str> = match self.edges.get(course) {
            Some(prereqs) => prereqs.iter().map(String::as_str).collect(),
            None => return true,
        };

        while let Some(current) = worklist.pop() {
            if !visited.insert(current) {
                continue;
            }
            if !completed.contains(current) {
                return false;
            }
            if let Some(next) = self.edges.get(current) {
                worklist.extend(next.iter().map(String::as_str));
            }
        }
        true
    }
}
