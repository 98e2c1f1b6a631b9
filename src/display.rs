//! Plain-text course formatting for the console menu

use crate::catalog::{Catalog, Course};
use std::fmt::Write;

/// Format one course as a block ending in a blank line:
///
/// ```text
/// CSCI300, Introduction to Algorithms
/// Prerequisites: CSCI200, MATH201
/// ```
pub fn format_course(course: &Course) -> String {
    let mut out = format!("{}, {}\n", course.id(), course.name());

    if course.has_prerequisites() {
        let _ = writeln!(out, "Prerequisites: {}", course.prerequisites().join(", "));
    } else {
        out.push_str("No prerequisites\n");
    }

    out.push('\n');
    out
}

/// Format every course in order
pub fn format_course_list<'a>(courses: impl IntoIterator<Item = &'a Course>) -> String {
    courses.into_iter().map(format_course).collect()
}

/// Label for a graph key: the stored id and name, or the raw key when the
/// identifier is not in the catalog
pub fn course_label(catalog: &Catalog, key: &str) -> String {
    match catalog.lookup(key) {
        Some(course) => format!("{}, {}", course.id(), course.name()),
        None => format!("{} (not in catalog)", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_prerequisites() {
        let course = Course::new("CSCI300", "Introduction to Algorithms", ["CSCI200", "MATH201"]);
        assert_eq!(
            format_course(&course),
            "CSCI300, Introduction to Algorithms\nPrerequisites: CSCI200, MATH201\n\n"
        );
    }

    #[test]
    fn test_format_without_prerequisites() {
        let course =
            Course::new("CSCI100", "Introduction to Computer Science", Vec::<String>::new());
        assert_eq!(
            format_course(&course),
            "CSCI100, Introduction to Computer Science\nNo prerequisites\n\n"
        );
    }

    #[test]
    fn test_format_list_concatenates_blocks() {
        let courses = [
            Course::new("A1", "First", Vec::<String>::new()),
            Course::new("B1", "Second", ["A1"]),
        ];
        assert_eq!(
            format_course_list(&courses),
            "A1, First\nNo prerequisites\n\nB1, Second\nPrerequisites: A1\n\n"
        );
    }

    #[test]
    fn test_course_label() {
        let mut catalog = Catalog::new();
        catalog.ingest(Course::new("CSCI200", "Data Structures", ["CSCI101"]));

        assert_eq!(course_label(&catalog, "csci200"), "CSCI200, Data Structures");
        assert_eq!(course_label(&catalog, "math201"), "math201 (not in catalog)");
    }
}
