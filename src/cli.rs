use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relinfo")]
#[command(author, version, about = "Release name parser for media files")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse release names given as arguments, or one per line on stdin
    Parse {
        /// Release names to parse
        titles: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Year used to judge plausible release years (defaults to the clock)
        #[arg(long)]
        current_year: Option<i32>,
    },

    /// Print the effective vocabulary as TOML
    Rules,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
