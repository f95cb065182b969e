//! # Life Baseline CLI Module
//!
//! ## Available Commands
//!
//! - `wizard` - Interactive milestone entry and report (default)
//! - `report` - Build a report from a profile file
//! - `options` - List the status options of a dimension

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use life_baseline::domain::reference::Dimension;
use life_baseline::ports::ExportFormat;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// 人生参照系 - Life Baseline Tracker
///
/// Log emotion and career milestones by age range and see how their timing
/// compares with a reference distribution.
#[derive(Parser, Debug)]
#[command(name = "life-baseline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive wizard
    Wizard {
        /// Start from a saved profile (YAML or JSON)
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Build a report from a profile file and print it
    Report {
        /// Profile file (YAML or JSON)
        #[arg(short, long)]
        profile: PathBuf,

        /// Also save the report
        #[arg(short, long)]
        save: bool,

        /// Export format (md, json); defaults to the configured one
        #[arg(short = 't', long)]
        format: Option<ExportFormat>,

        /// Directory to save into; defaults to the configured one
        #[arg(short = 'o', long)]
        export_dir: Option<PathBuf>,

        /// Print the full distribution chart of every milestone
        #[arg(short, long)]
        charts: bool,
    },

    /// List status options
    Options {
        /// emotion or career; both when omitted
        #[arg(short, long)]
        dimension: Option<Dimension>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Commands::Wizard { profile }) => cmd_wizard(profile).await,
        Some(Commands::Report {
            profile,
            save,
            format,
            export_dir,
            charts,
        }) => {
            let export = ReportExport {
                save: save || format.is_some() || export_dir.is_some(),
                format,
                export_dir,
            };
            cmd_report(&profile, export, charts).await
        }
        Some(Commands::Options { dimension }) => cmd_options(dimension),
        None => cmd_wizard(None).await,
    }
}
