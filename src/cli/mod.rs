//! CLI argument parsing for areasync.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// areasync: keep generated files in sync with their templates.
///
/// Templates mark regions with `BEGIN ... WORKFLOW AREA <name> FOR <ids>` and
/// `END WORKFLOW AREA` comments. Content outside those regions belongs to
/// the generated file and is never touched.
#[derive(Parser, Debug)]
#[command(name = "areasync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase diagnostic output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for areasync.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render or update every generated file listed in the manifest.
    ///
    /// Missing targets are rendered from their template; existing targets are
    /// checked for consistency and then merged area by area.
    Sync(SyncArgs),

    /// Check that generated files still match their templates' areas.
    ///
    /// Writes nothing. Exits with code 2 when any target has drifted.
    Check(CheckArgs),

    /// List the workflow areas found in a file.
    Areas(AreasArgs),
}

/// Arguments for the `sync` command.
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Path to the manifest.
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Show what would change without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Only sync the entry with this target path.
    #[arg(long)]
    pub only: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the manifest.
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Arguments for the `areas` command.
#[derive(Parser, Debug)]
pub struct AreasArgs {
    /// File to scan.
    pub file: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_sync_defaults() {
        let cli = Cli::try_parse_from(["areasync", "sync"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Sync(args) => {
                assert_eq!(args.config, PathBuf::from("areasync.yaml"));
                assert!(!args.dry_run);
                assert!(args.only.is_none());
            }
            other => panic!("expected sync, got {:?}", other),
        }
    }

    #[test]
    fn parse_sync_with_options() {
        let cli = Cli::try_parse_from([
            "areasync",
            "-vv",
            "sync",
            "--config",
            "gen/manifest.yaml",
            "--dry-run",
            "--only",
            "apps/web/server.ts",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Sync(args) => {
                assert_eq!(args.config, PathBuf::from("gen/manifest.yaml"));
                assert!(args.dry_run);
                assert_eq!(args.only.as_deref(), Some("apps/web/server.ts"));
            }
            other => panic!("expected sync, got {:?}", other),
        }
    }

    #[test]
    fn parse_areas_json() {
        let cli = Cli::try_parse_from(["areasync", "areas", "src/main.rs", "--json", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Areas(args) => {
                assert_eq!(args.file, PathBuf::from("src/main.rs"));
                assert!(args.json);
            }
            other => panic!("expected areas, got {:?}", other),
        }
    }

    #[test]
    fn areas_requires_file() {
        assert!(Cli::try_parse_from(["areasync", "areas"]).is_err());
    }
}
