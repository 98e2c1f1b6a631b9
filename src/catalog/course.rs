//! The course record shared by every catalog component

/// A single catalog entry.
///
/// Records are immutable once built. The store replaces a whole record when
/// the same identifier is ingested again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: String,
    name: String,
    prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        prerequisites: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Course {
            id: id.into(),
            name: name.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    /// Course identifier as written in the source data (e.g. `CSCI101`)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prerequisite identifiers, original casing and order
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

/// Normalize an identifier into the key used by the store and the graph.
pub fn course_key(id: &str) -> String {
    id.to_lowercase()
}
