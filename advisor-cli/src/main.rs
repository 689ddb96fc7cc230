//! advisor CLI
//!
//! Interactive course-advising menu backed by the in-memory course catalog.

mod cli_types;
mod error;
mod menu;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    log::debug!(
        "csv path: {}, default search key: {}",
        cli.csv_path.display(),
        cli.course_key,
    );

    if let Err(e) = menu::run(&cli) {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}
