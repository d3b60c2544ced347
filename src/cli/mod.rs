use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "mathlab",
    about = "Interactive labs for descriptive statistics and linear recurrence relations",
    version,
    author,
    long_about = None
)]
pub struct LabCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute mean, median, standard deviation and a summary table
    Stats {
        /// Comma-separated numbers, e.g. "175, 172, 165" (prompted for when omitted)
        data: Option<String>,
    },

    /// Solve a second-order linear recurrence step by step
    Recurrence {
        /// Seed for reproducible problems
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print a generated recurrence problem
    Problem {
        /// Seed for reproducible problems
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also print the roots, constants and a_2
        #[arg(short, long)]
        reveal: bool,
    },
}
