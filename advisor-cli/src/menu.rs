//! The interactive advising menu loop.
//!
//! All state is local to [`run`]: the catalog and the invocation arguments
//! are threaded through explicitly, one operation per menu choice.

use std::io::{BufRead, Write};
use std::time::Instant;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use advisor_catalog::{Course, CourseCatalog};
use advisor_import::load_courses;

use crate::cli_types::Cli;
use crate::error::CliError;

/// Run the menu loop until the user exits or stdin closes.
pub(crate) fn run(cli: &Cli) -> Result<(), CliError> {
    let mut catalog = CourseCatalog::new();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let choice = match prompt(&mut input, "Enter choice", None)? {
            Some(choice) => choice,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                if add_course(&mut input, &mut catalog)?.is_none() {
                    break;
                }
            }
            "2" => load_from_file(cli, &mut catalog),
            "3" => list_courses(&catalog),
            "4" => {
                if search_course(&mut input, cli, &catalog)?.is_none() {
                    break;
                }
            }
            "9" => break,
            other => {
                println!(
                    "{}",
                    format!("Unknown choice: {other}").if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
        println!();
    }

    println!("Good bye.");
    Ok(())
}

fn print_menu() {
    println!(
        "{}",
        "Course Advising Menu:".if_supports_color(Stdout, |t| t.bold()),
    );
    println!("  1. Add a new course");
    println!("  2. Load courses from CSV file");
    println!("  3. List all courses");
    println!("  4. Search for a course");
    println!("  9. Exit");
}

/// Prompt on stdout and read one trimmed line.
///
/// An empty reply yields `default` when one is given. Returns `Ok(None)`
/// when stdin has closed.
fn prompt(
    input: &mut impl BufRead,
    prompt: &str,
    default: Option<&str>,
) -> Result<Option<String>, CliError> {
    if let Some(def) = default {
        print!("{prompt} [{def}]: ");
    } else {
        print!("{prompt}: ");
    }
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        if let Some(def) = default {
            return Ok(Some(def.to_string()));
        }
    }
    Ok(Some(trimmed.to_string()))
}

/// Prompt for the four course fields and append the result.
///
/// No validation: empty ids and dangling prerequisites are accepted as-is.
/// Returns `Ok(None)` when stdin closes mid-entry.
fn add_course(
    input: &mut impl BufRead,
    catalog: &mut CourseCatalog,
) -> Result<Option<()>, CliError> {
    let Some(course_id) = prompt(input, "Course id", None)? else {
        return Ok(None);
    };
    let Some(title) = prompt(input, "Course title", None)? else {
        return Ok(None);
    };
    let Some(prereq_1) = prompt(input, "Prerequisite 1", None)? else {
        return Ok(None);
    };
    let Some(prereq_2) = prompt(input, "Prerequisite 2", None)? else {
        return Ok(None);
    };

    let course = Course::with_prereqs(course_id, title, prereq_1, prereq_2);
    display_course(&course);
    catalog.append(course);
    Ok(Some(()))
}

/// Bulk-import the configured CSV file into the catalog.
///
/// Import failures are non-fatal: the error is reported along with how many
/// courses survived, and the menu loop continues.
fn load_from_file(cli: &Cli, catalog: &mut CourseCatalog) {
    println!("Loading CSV file {}", cli.csv_path.display());
    let started = Instant::now();

    match load_courses(&cli.csv_path, catalog) {
        Ok(stats) => {
            println!(
                "{} {} courses read.",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                stats.courses_loaded,
            );
            println!(
                "{}",
                format!("That took: {:.3} seconds.", started.elapsed().as_secs_f64())
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        Err(e) => {
            println!(
                "{} Import failed: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            println!("  {} courses loaded so far.", catalog.len());
        }
    }
}

/// Print every course in insertion order.
fn list_courses(catalog: &CourseCatalog) {
    if catalog.is_empty() {
        println!(
            "{}",
            "No courses loaded.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        println!("Choose option 2 to load the CSV file, or option 1 to add one by hand.");
        return;
    }

    for course in catalog.courses() {
        display_course(course);
    }
    println!("{} courses.", catalog.len());
}

/// Prompt for a course id (defaulting to the invocation key) and look it up.
///
/// Returns `Ok(None)` when stdin closes at the prompt.
fn search_course(
    input: &mut impl BufRead,
    cli: &Cli,
    catalog: &CourseCatalog,
) -> Result<Option<()>, CliError> {
    let Some(key) = prompt(input, "Course id", Some(cli.course_key.as_str()))? else {
        return Ok(None);
    };

    match catalog.find(&key) {
        Some(course) => display_course(course),
        None => {
            println!(
                "Course id {} not found.",
                key.if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }
    Ok(Some(()))
}

/// Print a single course record.
fn display_course(course: &Course) {
    println!(
        "  {}: {} | Prerequisites | 1: {} 2: {}",
        course.course_id.if_supports_color(Stdout, |t| t.bold()),
        course.title,
        course.prereq_1,
        course.prereq_2,
    );
}
