//! Command-line argument definitions for the TimeTrack CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global options select the data file, the configuration
//! file and the logging verbosity; a [`Command`] picks the action.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command-line arguments for the TimeTrack timeline tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON data file, overriding the configuration
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Actions on the record collection.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a person
    Add {
        #[arg(long)]
        name: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        born: NaiveDate,

        /// Death date (YYYY-MM-DD), omitted for the living
        #[arg(long)]
        died: Option<NaiveDate>,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Print every person
    List,

    /// Import people from a CSV file, skipping known ones
    Import { file: PathBuf },

    /// Export every person to a CSV file
    Export { file: PathBuf },

    /// Render the timeline to SVG
    Render {
        /// Output SVG file; defaults to `render.output` or `timeline.svg`
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the person to center the output on
        #[arg(long)]
        focus: Option<String>,

        /// Width in pixels of the focused window
        #[arg(long, default_value_t = 800.0)]
        viewport: f32,
    },

    /// Remove every person
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let args = Args::try_parse_from([
            "timetrack",
            "add",
            "--name",
            "Ada",
            "--born",
            "1815-12-10",
            "--died",
            "1852-11-27",
        ])
        .unwrap();

        match args.command {
            Command::Add {
                name,
                born,
                died,
                description,
            } => {
                assert_eq!(name, "Ada");
                assert_eq!(born, NaiveDate::from_ymd_opt(1815, 12, 10).unwrap());
                assert_eq!(died, NaiveDate::from_ymd_opt(1852, 11, 27));
                assert_eq!(description, "");
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_date_rejected() {
        let args = ["timetrack", "add", "--name", "A", "--born", "1815/12/10"];
        assert!(Args::try_parse_from(args).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "timetrack",
            "list",
            "--data",
            "people.json",
            "--log-level",
            "off",
        ])
        .unwrap();

        assert!(matches!(args.command, Command::List));
        assert_eq!(args.data, Some(PathBuf::from("people.json")));
        assert_eq!(args.log_level, "off");
    }

    #[test]
    fn test_render_defaults() {
        let args = Args::try_parse_from(["timetrack", "render"]).unwrap();
        match args.command {
            Command::Render { output, focus, viewport } => {
                assert!(output.is_none());
                assert!(focus.is_none());
                assert_eq!(viewport, 800.0);
            }
            other => panic!("Expected Render, got {other:?}"),
        }
    }
}
