//! In-memory course catalog engine
//!
//! This module provides the core catalog components:
//! - [`course`]: The immutable [`Course`] record
//! - [`store`]: Case-insensitive [`CourseStore`] keyed by course identifier
//! - [`graph`]: [`PrerequisiteGraph`] with forward/reverse adjacency and the
//!   "available after" traversal
//! - [`sort`]: Stable merge sort used to build the course listing
//!
//! # Load Sequence
//!
//! A load drives the [`Catalog`] in a fixed order:
//!
//! ```text
//! reset() → ingest(course) per record, in input order → finalize(all records)
//! ```
//!
//! Between loads the catalog is read-only. Queries made before any
//! `finalize` return empty results instead of failing.

pub mod course;
pub mod graph;
pub mod sort;
pub mod store;

pub use course::Course;
pub use graph::PrerequisiteGraph;
pub use store::CourseStore;

/// Store, graph and sorted listing for one loaded catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    store: CourseStore,
    graph: PrerequisiteGraph,
    sorted: Vec<Course>,
    loaded: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all indexed and graph state
    pub fn reset(&mut self) {
        self.store = CourseStore::new();
        self.graph = PrerequisiteGraph::new();
        self.sorted.clear();
        self.loaded = false;
    }

    /// Index one parsed record. Call once per record, in input order.
    pub fn ingest(&mut self, course: Course) {
        self.graph.add_course(&course);
        self.store.insert(course);
    }

    /// Sort the full record set and keep it as the course listing
    pub fn finalize(&mut self, courses: Vec<Course>) -> &[Course] {
        self.sorted = sort::sort_courses(courses);
        self.loaded = true;
        &self.sorted
    }

    /// Case-insensitive lookup
    pub fn lookup(&self, id: &str) -> Option<&Course> {
        self.store.find(id)
    }

    /// Lowercased identifiers of the courses unlocked by completing `id`
    pub fn available_after(&self, id: &str) -> Vec<String> {
        self.graph.available_after(id)
    }

    pub fn prerequisites_of(&self, id: &str) -> &[String] {
        self.graph.prerequisites_of(id)
    }

    pub fn dependents_of(&self, id: &str) -> &[String] {
        self.graph.dependents_of(id)
    }

    /// The last finalized listing; empty before the first load
    pub fn sorted_all(&self) -> &[Course] {
        &self.sorted
    }

    /// Number of distinct courses in the store
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether a load has been finalized since the last reset
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_queries() {
        let catalog = Catalog::new();
        assert!(!catalog.is_loaded());
        assert!(catalog.is_empty());
        assert!(catalog.sorted_all().is_empty());
        assert!(catalog.lookup("CSCI100").is_none());
        assert!(catalog.available_after("CSCI100").is_empty());
        assert!(catalog.prerequisites_of("CSCI100").is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut catalog = Catalog::new();
        let course = Course::new("CSCI101", "Programming", ["CSCI100"]);
        catalog.ingest(course.clone());
        catalog.finalize(vec![course]);
        assert!(catalog.is_loaded());

        catalog.reset();
        assert!(!catalog.is_loaded());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.sorted_all().is_empty());
        assert!(catalog.dependents_of("CSCI100").is_empty());
    }

    #[test]
    fn test_dangling_prerequisite_is_tolerated() {
        let mut catalog = Catalog::new();
        let course = Course::new("CSCI300", "Algorithms", ["MATH201"]);
        catalog.ingest(course.clone());
        catalog.finalize(vec![course]);

        assert!(catalog.lookup("MATH201").is_none());
        assert_eq!(catalog.dependents_of("math201"), ["csci300"]);
        assert_eq!(catalog.available_after("MATH201"), ["csci300"]);
    }
}
