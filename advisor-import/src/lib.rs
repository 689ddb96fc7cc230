//! Bulk import of course records from CSV files into the catalog.
//!
//! Import is at-least-effort, not atomic: rows appended before a failure
//! remain in the catalog and nothing is rolled back.

pub mod csv_import;

pub use csv_import::{ImportError, ImportStats, load_courses, parse_courses_csv};
