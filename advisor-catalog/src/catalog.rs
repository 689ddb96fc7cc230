//! The append-only course catalog container.

use crate::types::Course;

/// An ordered, append-only collection of [`Course`] records.
///
/// Insertion order is preserved and is also the enumeration and search-scan
/// order. There is no delete, no update-in-place, and no deduplication: when
/// two records share an id, [`find`](Self::find) returns the one appended
/// earliest. None of the operations here can fail.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course as the new last record.
    ///
    /// No validation is performed; duplicate ids, empty ids, and malformed
    /// prerequisite fields are all accepted silently.
    pub fn append(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Find the first record whose id exactly equals `course_id`.
    ///
    /// The match is case-sensitive with no partial matching. Scans in
    /// insertion order, so the earliest of any duplicates wins. Returns
    /// `None` when no record matches.
    pub fn find(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }

    /// Iterate over all records in insertion order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// True when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
