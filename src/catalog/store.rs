//! Case-insensitive course index

use super::course::{course_key, Course};
use rustc_hash::FxHashMap;

/// Keyed course storage.
///
/// Keys are folded to lowercase; the stored [`Course`] keeps its original
/// casing for the id, name and prerequisite list.
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    courses: FxHashMap<String, Course>,
}

impl CourseStore {
    pub fn new() -> Self {
        CourseStore {
            courses: FxHashMap::default(),
        }
    }

    /// Store a course, replacing any previous record with the same key
    pub fn insert(&mut self, course: Course) {
        self.courses.insert(course_key(course.id()), course);
    }

    /// Case-insensitive lookup
    pub fn find(&self, id: &str) -> Option<&Course> {
        self.courses.get(&course_key(id))
    }

    /// Every stored record, in no particular order
    pub fn all_courses(&self) -> Vec<&Course> {
        self.courses.values().collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
