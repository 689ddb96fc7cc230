//! CLI type definitions: invocation arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "advisor")]
#[command(about = "Interactive course catalog and advising menu", long_about = None)]
pub(crate) struct Cli {
    /// CSV file to load courses from (menu option 2)
    #[arg(default_value = "courses.csv")]
    pub csv_path: PathBuf,

    /// Default course id offered when searching (menu option 4)
    #[arg(default_value = "CSCI300")]
    pub course_key: String,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
