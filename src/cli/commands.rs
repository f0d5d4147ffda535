//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - rename: normalize tool descriptions in a tool library export
//! - scan: find NC programs containing a feed-rate word

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// camtools - tool library and NC program utilities
#[derive(Parser, Debug)]
#[command(name = "camtools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize tool descriptions in a tool library export
    Rename {
        /// Tool library to read (default from config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the renamed library (default from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run the full pass but do not write the output file
        #[arg(long)]
        dry_run: bool,
    },

    /// Report NC programs containing a feed-rate word
    Scan {
        /// Directory to scan recursively (default from config)
        root: Option<PathBuf>,

        /// Regex to look for in each line
        #[arg(short, long)]
        pattern: Option<String>,
    },
}
