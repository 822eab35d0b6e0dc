//! CLI entry point for hill-climb.
//!
//! Usage:
//!   hill-climb solve <map.txt> [options]
//!   hill-climb solve --stdin [options]
//!   hill-climb report <map.txt>
//!
//! Options (solve):
//!   --start <label>   Label of the start cell (default: S)
//!   --goal <label>    Label of the goal cell (default: E)
//!   --rule <rule>     dropping | climbing (default: dropping)
//!   --path            Include the node list in the output
//!
//! Logging goes to stderr; `RUST_LOG` or `-v` raises the level.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hill_climb::{
    Grid, Node, Rule, SearchConfig, SearchError, SearchStats, END_MARKER, START_MARKER,
};

#[derive(Parser)]
#[command(name = "hill-climb")]
#[command(about = "Breadth-first shortest paths over labeled height-map grids")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Path to the height map (use --stdin to read from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read the height map from stdin instead of a file
    #[arg(long)]
    stdin: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find one shortest path
    Solve {
        #[command(flatten)]
        input: Input,

        /// Label of the start cell
        #[arg(long, default_value_t = START_MARKER)]
        start: char,

        /// Label of the goal cell
        #[arg(long, default_value_t = END_MARKER)]
        goal: char,

        /// Movement rule
        #[arg(long, value_enum, default_value_t = Rule::Dropping)]
        rule: Rule,

        /// Include the path nodes in the output
        #[arg(long)]
        path: bool,
    },

    /// Run the ascent and trailhead queries
    Report {
        #[command(flatten)]
        input: Input,
    },
}

/// Output format for a single query
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput {
    query: SearchConfig,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<Node>>,
    #[serde(flatten)]
    stats: Option<SearchStats>,
    time_elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
struct ReportOutput {
    ascent: SearchOutput,
    trailhead: SearchOutput,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Execute a command, returning whether every query found a path.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Solve {
            input,
            start,
            goal,
            rule,
            path,
        } => {
            let grid = load_grid(&input)?;
            let config = SearchConfig { start, goal, rule };
            let output = search(&grid, &config, path);
            let found = output.found;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(found)
        }
        Commands::Report { input } => {
            let grid = load_grid(&input)?;
            let output = ReportOutput {
                ascent: search(&grid, &SearchConfig::ascent(), false),
                trailhead: search(&grid, &SearchConfig::trailhead(), false),
            };
            let found = output.ascent.found && output.trailhead.found;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(found)
        }
    }
}

fn load_grid(input: &Input) -> Result<Grid> {
    let text = if input.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else if let Some(path) = &input.file {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        bail!("Must provide either a file path or --stdin");
    };

    let grid: Grid = text.parse().context("Invalid height map")?;
    info!(width = grid.width(), height = grid.height(), "loaded grid");
    Ok(grid)
}

fn search(grid: &Grid, config: &SearchConfig, include_path: bool) -> SearchOutput {
    let start_time = Instant::now();
    let result = config.run(grid);
    let time_elapsed_ms = start_time.elapsed().as_millis() as u64;

    match result {
        Ok(outcome) => SearchOutput {
            query: *config,
            found: true,
            reason: None,
            steps: Some(outcome.steps()),
            path: include_path.then_some(outcome.path),
            stats: Some(outcome.stats),
            time_elapsed_ms,
        },
        Err(e) => {
            // A missing start never touches the frontier, so there is nothing to report
            let stats = match &e {
                SearchError::PathNotFound { stats, .. } => Some(*stats),
                SearchError::StartNotFound { .. } => None,
            };
            SearchOutput {
                query: *config,
                found: false,
                reason: Some(e.to_string()),
                steps: None,
                path: None,
                stats,
                time_elapsed_ms,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENCLOSED: &str = "Saaaa\nazzza\nazEza\nazzza\naaaaa\n";

    #[test]
    fn test_search_not_found_keeps_counters() {
        let grid: Grid = ENCLOSED.parse().unwrap();

        let output = search(&grid, &SearchConfig::ascent(), true);

        assert!(!output.found);
        assert_eq!(output.reason.as_deref(), Some("No path from 'S' to 'E'"));
        assert_eq!(output.steps, None);
        assert_eq!(output.path, None);
        let stats = output.stats.unwrap();
        assert_eq!(stats.expanded, 16);
        assert!(stats.enqueued > stats.expanded);
    }

    #[test]
    fn test_search_not_found_json() {
        let grid: Grid = ENCLOSED.parse().unwrap();

        let output = search(&grid, &SearchConfig::ascent(), false);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["found"], false);
        assert_eq!(json["expanded"], 16);
        assert_eq!(json["query"]["rule"], "dropping");
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn test_search_missing_start_has_no_counters() {
        let grid: Grid = "abc\n".parse().unwrap();

        let output = search(&grid, &SearchConfig::ascent(), false);

        assert!(!output.found);
        assert_eq!(output.reason.as_deref(), Some("No cell labeled 'S' to start from"));
        assert!(output.stats.is_none());
        let json = serde_json::to_value(&output).unwrap();
        assert!(json.get("expanded").is_none());
    }

    #[test]
    fn test_search_found() {
        let grid: Grid = "Sab\nabE\n".parse().unwrap();

        let output = search(&grid, &SearchConfig::ascent(), true);

        assert!(output.found);
        assert_eq!(output.steps, Some(3));
        assert_eq!(output.path.map(|p| p.len()), Some(4));
        assert!(output.stats.is_some_and(|s| s.expanded > 0));
    }
}
