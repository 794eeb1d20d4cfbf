//! Command-line interface for the solitaire front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Solitaire - Klondike driven from the terminal
#[derive(Parser, Debug)]
#[command(name = "solitaire")]
#[command(about = "Klondike solitaire with a pointer console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deal a table and print it
    Deal {
        /// Seed for the shuffle
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play interactively, one console command per line
    Play {
        /// Seed for the shuffle
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run console commands from a script file
    Replay {
        /// Script with one console command per line
        script: PathBuf,

        /// Seed for the shuffle
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
