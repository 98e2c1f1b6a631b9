//! Prerequisite dependency graph
//!
//! Two adjacency views are derived from one edge set:
//! - forward: course → its prerequisites
//! - reverse: course → courses that list it as a prerequisite
//!
//! Both are keyed by lowercased identifier. Identifiers that only ever appear
//! as prerequisites (dangling references) can be reverse keys and forward
//! values without owning a forward entry.

use super::course::{course_key, Course};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    forward: FxHashMap<String, Vec<String>>,
    reverse: FxHashMap<String, Vec<String>>,
}

impl PrerequisiteGraph {
    pub fn new() -> Self {
        PrerequisiteGraph {
            forward: FxHashMap::default(),
            reverse: FxHashMap::default(),
        }
    }

    /// Register a course and its prerequisite edges.
    ///
    /// The forward list is replaced on a second call for the same course, but
    /// reverse entries are appended again. Use a fresh graph when reloading.
    pub fn add_course(&mut self, course: &Course) {
        let key = course_key(course.id());
        let mut prerequisites = Vec::with_capacity(course.prerequisites().len());

        for prereq in course.prerequisites() {
            let prereq_key = course_key(prereq);
            self.reverse
                .entry(prereq_key.clone())
                .or_default()
                .push(key.clone());
            prerequisites.push(prereq_key);
        }

        self.forward.insert(key, prerequisites);
    }

    /// Prerequisites registered for `id`, empty if the course was never added
    pub fn prerequisites_of(&self, id: &str) -> &[String] {
        self.forward
            .get(&course_key(id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Courses that name `id` as a prerequisite
    pub fn dependents_of(&self, id: &str) -> &[String] {
        self.reverse
            .get(&course_key(id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Courses unlocked by completing `completed`, in breadth-first order.
    ///
    /// A dependent is unlocked only when every entry of its prerequisite list
    /// is the completed course itself. Courses with several distinct
    /// prerequisites are never reported, even if the others were completed in
    /// an earlier call: no completion history is kept. Unlocked courses
    /// cascade, so their own dependents are examined against the same rule.
    pub fn available_after(&self, completed: &str) -> Vec<String> {
        let completed_key = course_key(completed);
        let mut available = Vec::new();

        let Some(direct) = self.reverse.get(&completed_key) else {
            return available;
        };

        let mut queue: VecDeque<&str> = direct.iter().map(String::as_str).collect();
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }

            let unlocked = self
                .forward
                .get(current)
                .is_none_or(|prereqs| prereqs.iter().all(|p| course_key(p) == completed_key));

            if !unlocked {
                continue;
            }

            available.push(current.to_string());

            if let Some(next) = self.reverse.get(current) {
                queue.extend(
                    next.iter()
                        .map(String::as_str)
                        .filter(|dependent| !seen.contains(dependent)),
                );
            }
        }

        log::debug!("{} course(s) unlocked by {}", available.len(), completed);

        available
    }
}
