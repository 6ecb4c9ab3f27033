//! GeoMerge - Terminal-based GeoJSON merge tool
//!
//! This application lets a user collect GeoJSON files into an ordered list,
//! rearrange them, and merge their features into a single FeatureCollection,
//! either interactively or through headless CLI commands.

use anyhow::Result;
use clap::{Parser, Subcommand};

use geomerge::cli::{CliResult, InspectArgs, MergeArgs};
use geomerge::config::Config;
use geomerge::constants::APP_NAME;
use geomerge::tui;

/// GeoMerge - Terminal-based GeoJSON merge tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge GeoJSON files into a single FeatureCollection
    Merge(MergeArgs),
    /// Show the inferred category and feature count of GeoJSON files
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Merge(args)) => run_command(|| args.execute()),
        Some(Commands::Inspect(args)) => run_command(|| args.execute()),
        None => run_interactive(),
    }
}

/// Runs a headless command, mapping its error to a message and exit code.
fn run_command(command: impl FnOnce() -> CliResult<()>) -> Result<()> {
    if let Err(err) = command() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
    Ok(())
}

/// Launches the interactive TUI session.
fn run_interactive() -> Result<()> {
    // Config errors fall back to defaults; the session must still start
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: failed to load config: {e}");
        Config::new()
    });

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
