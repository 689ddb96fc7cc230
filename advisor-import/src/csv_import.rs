//! Course CSV parser.
//!
//! Reads headerless CSV files where each row describes one course:
//! `id,title,prereq1,prereq2`. Rows map to courses 1:1 in file order;
//! columns past the fourth are ignored.

use std::io::Read;
use std::path::Path;

use advisor_catalog::{Course, CourseCatalog};
use thiserror::Error;

/// Errors that can occur while importing a course CSV file.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row at line {line} has {found} fields, expected at least 4")]
    ShortRow { line: u64, found: usize },
}

/// Statistics from a single CSV import.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub courses_loaded: u64,
}

/// Load a CSV file of courses into the catalog.
///
/// Appends one course per row in file order. On failure, rows already
/// appended stay in the catalog; the caller decides whether the partial
/// load is usable.
pub fn load_courses(path: &Path, catalog: &mut CourseCatalog) -> Result<ImportStats, ImportError> {
    let mut file = std::fs::File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let stats = parse_courses_csv(&contents, catalog)?;
    log::debug!(
        "loaded {} courses from {}",
        stats.courses_loaded,
        path.display()
    );
    Ok(stats)
}

/// Parse course CSV content from a string, appending each row's course.
pub fn parse_courses_csv(
    content: &str,
    catalog: &mut CourseCatalog,
) -> Result<ImportStats, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut stats = ImportStats::default();

    for result in reader.records() {
        let record = result?;

        // CSV columns:
        // 0: course id
        // 1: title
        // 2: first prerequisite (may be empty)
        // 3: second prerequisite (may be empty)
        if record.len() < 4 {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(ImportError::ShortRow {
                line,
                found: record.len(),
            });
        }

        let get = |i: usize| record.get(i).unwrap_or("").to_string();

        catalog.append(Course {
            course_id: get(0),
            title: get(1),
            prereq_1: get(2),
            prereq_2: get(3),
        });
        stats.courses_loaded += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let csv = "\
CSCI100,Introduction to Computer Science,,
CSCI200,Data Structures,CSCI100,
CSCI300,Introduction to Algorithms,CSCI200,MATH201";

        let mut catalog = CourseCatalog::new();
        let stats = parse_courses_csv(csv, &mut catalog).unwrap();
        assert_eq!(stats.courses_loaded, 3);
        assert_eq!(catalog.len(), 3);

        let ids: Vec<&str> = catalog.courses().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["CSCI100", "CSCI200", "CSCI300"]);

        let third = catalog.find("CSCI300").unwrap();
        assert_eq!(third.title, "Introduction to Algorithms");
        assert_eq!(third.prereq_1, "CSCI200");
        assert_eq!(third.prereq_2, "MATH201");

        let first = catalog.find("CSCI100").unwrap();
        assert_eq!(first.prereq_1, "");
        assert_eq!(first.prereq_2, "");
    }

    #[test]
    fn test_parse_csv_ignores_extra_fields() {
        let csv = "CSCI100,Intro,,,3.0,extra";

        let mut catalog = CourseCatalog::new();
        parse_courses_csv(csv, &mut catalog).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("CSCI100").unwrap().title, "Intro");
    }

    #[test]
    fn test_parse_csv_quoted_fields() {
        let csv = "\"CSCI250\",\"Systems, Networks, and Security\",CSCI100,";

        let mut catalog = CourseCatalog::new();
        parse_courses_csv(csv, &mut catalog).unwrap();
        let course = catalog.find("CSCI250").unwrap();
        assert_eq!(course.title, "Systems, Networks, and Security");
    }

    #[test]
    fn test_parse_csv_short_row_reports_line() {
        let csv = "\
CSCI100,Intro,,
CSCI200,Data Structures
CSCI300,Algorithms,CSCI200,";

        let mut catalog = CourseCatalog::new();
        let err = parse_courses_csv(csv, &mut catalog).unwrap_err();
        match err {
            ImportError::ShortRow { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
            other => panic!("expected ShortRow, got {other:?}"),
        }

        // Row 1 was appended before the failure and stays.
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("CSCI100").is_some());
        assert!(catalog.find("CSCI300").is_none());
    }

    #[test]
    fn test_parse_csv_empty_content() {
        let mut catalog = CourseCatalog::new();
        let stats = parse_courses_csv("", &mut catalog).unwrap();
        assert_eq!(stats.courses_loaded, 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_csv_accepts_duplicate_ids() {
        let csv = "\
CSCI100,First,,
CSCI100,Second,,";

        let mut catalog = CourseCatalog::new();
        let stats = parse_courses_csv(csv, &mut catalog).unwrap();
        assert_eq!(stats.courses_loaded, 2);
        assert_eq!(catalog.find("CSCI100").unwrap().title, "First");
    }
}
