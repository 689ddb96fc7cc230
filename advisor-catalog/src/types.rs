//! Data model types for the course catalog.

use std::fmt;

/// A single course record.
///
/// The id is intended to be unique but nothing enforces it; the catalog
/// accepts duplicates silently. Prerequisite fields are opaque strings with
/// no referential check against other records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Course {
    /// Course identifier (e.g., `"CSCI300"`)
    pub course_id: String,
    /// Human-readable course title
    pub title: String,
    /// First prerequisite id, empty when none
    pub prereq_1: String,
    /// Second prerequisite id, empty when none
    pub prereq_2: String,
}

impl Course {
    /// Create a course with no prerequisites.
    pub fn new(course_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Create a course with both prerequisite fields set.
    pub fn with_prereqs(
        course_id: impl Into<String>,
        title: impl Into<String>,
        prereq_1: impl Into<String>,
        prereq_2: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.into(),
            prereq_1: prereq_1.into(),
            prereq_2: prereq_2.into(),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | Prerequisites | 1: {} 2: {}",
            self.course_id, self.title, self.prereq_1, self.prereq_2,
        )
    }
}
