//! Command line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Equipment Dashboard - browse chemical equipment CSV uploads
#[derive(Parser, Debug)]
#[command(name = "equipment-dashboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides config file and environment)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Load settings from this TOML file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand, `overview` when none was given
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Overview { page: None })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show summary, charts and table of the latest upload
    Overview {
        /// Table page to show (clamped into range)
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,
    },

    /// Validate and upload a CSV file
    Upload {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// List the most recent uploads
    History,

    /// Show a past upload by id
    Dataset {
        #[arg(value_name = "ID")]
        id: u64,

        /// Table page to show (clamped into range)
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,
    },

    /// Download the PDF report of an upload
    Report {
        #[arg(value_name = "ID")]
        id: u64,

        /// Directory to save into (defaults to the configured report dir)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}
