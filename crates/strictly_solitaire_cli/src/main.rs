//! Strictly Solitaire - terminal binary

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Duration;
use strictly_solitaire::{Table, TableView};
use strictly_solitaire_cli::{Cli, Command, Console, HELP, Layout, SolitaireConfig, render};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the table output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Deal { seed, json, config } => run_deal(load_config(config, seed)?, json),
        Command::Play { seed, config } => run_play(load_config(config, seed)?),
        Command::Replay { script, seed, config } => run_replay(script, load_config(config, seed)?),
    }
}

/// Reads the config file if given, then applies the command-line seed.
fn load_config(path: Option<PathBuf>, seed: Option<u64>) -> Result<SolitaireConfig> {
    let config = match path {
        Some(path) => SolitaireConfig::from_file(&path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => SolitaireConfig::default(),
    };
    Ok(config.with_seed_override(seed))
}

/// Deals the configured table, picking a random seed if none is set.
fn deal(config: &SolitaireConfig) -> (u64, Table) {
    let seed = config.seed().unwrap_or_else(|| {
        let seed = rand::random();
        info!(seed, "No seed configured, picked one");
        seed
    });
    (seed, Table::from_seed(seed))
}

/// Print a fresh deal
#[instrument(skip(config))]
fn run_deal(config: SolitaireConfig, json: bool) -> Result<()> {
    let (seed, table) = deal(&config);
    let view = TableView::of_table(&table);
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
    } else {
        writeln!(out, "Seed: {}", seed)?;
        write!(out, "{}", render(&view, Duration::ZERO))?;
    }
    Ok(())
}

/// Play from stdin
#[instrument(skip(config))]
fn run_play(config: SolitaireConfig) -> Result<()> {
    let (seed, table) = deal(&config);
    let mut console = Console::new(table, Layout::new(*config.layout())).with_auto_show(true);

    let mut out = io::stdout().lock();
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "{}", HELP)?;
    write!(out, "{}", console.show())?;

    console.run(io::stdin().lock(), &mut out)?;
    info!(elapsed = ?console.elapsed(), "Game over");
    Ok(())
}

/// Run a script of console commands
#[instrument(skip(config))]
fn run_replay(script: PathBuf, config: SolitaireConfig) -> Result<()> {
    let file = File::open(&script).with_context(|| format!("Opening script {}", script.display()))?;
    let (seed, table) = deal(&config);
    info!(seed, script = %script.display(), "Replaying");

    let mut console = Console::new(table, Layout::new(*config.layout()));
    let mut out = io::stdout().lock();
    writeln!(out, "Seed: {}", seed)?;
    console.run(BufReader::new(file), &mut out)
}
