//! Course catalog data model and in-memory container.
//!
//! This crate defines the course record type and the append-only catalog
//! sequence that backs listing and lookup. It performs no I/O; consumers
//! populate it directly or via `advisor-import`.

pub mod catalog;
pub mod types;

pub use catalog::CourseCatalog;
pub use types::Course;
