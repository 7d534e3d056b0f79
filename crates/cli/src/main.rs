use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use stbuild_descriptor::Revision;

mod cmd;
mod output;

use output::OutputFormat;

/// stbuild - Library build descriptor toolkit
#[derive(Parser)]
#[command(name = "stbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a library build descriptor
    Show {
        /// Recorded revision to show (default: latest)
        #[arg(short, long)]
        revision: Option<u32>,

        /// Load the descriptor from a JSON file instead
        #[arg(long, conflicts_with = "revision")]
        file: Option<PathBuf>,
    },

    /// Print the ordered effects a descriptor applies to a build environment
    Plan {
        /// Recorded revision to plan (default: latest)
        #[arg(short, long)]
        revision: Option<u32>,

        /// Load the descriptor from a JSON file instead
        #[arg(long, conflicts_with = "revision")]
        file: Option<PathBuf>,

        /// Contribute only the dependency list, skip self-registration
        #[arg(long)]
        deps_only: bool,
    },

    /// Compare two recorded descriptor revisions
    Diff {
        /// Older revision
        #[arg(long, default_value_t = 1)]
        from: u32,

        /// Newer revision
        #[arg(long, default_value_t = Revision::latest().number())]
        to: u32,
    },

    /// Probe descriptor availability
    Check,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { revision, file } => cmd::cmd_show(revision, file.as_deref(), cli.format),
        Commands::Plan {
            revision,
            file,
            deps_only,
        } => cmd::cmd_plan(revision, file.as_deref(), deps_only, cli.format),
        Commands::Diff { from, to } => cmd::cmd_diff(from, to, cli.format),
        Commands::Check => cmd::cmd_check(cli.format),
    }
}
