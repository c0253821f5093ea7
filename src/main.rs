mod ai;
mod config;
mod debug;
mod game;
mod protocol;
mod record;
mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::{info, warn};

use ai::SledPilot;
use config::{BotChoice, SledChoice};
use record::TurnRecorder;
use runner::{run_match, Player};

/// Capture player: bumpers patrol and knock pucks toward the center line
/// while the sled loops across the field.
///
/// Reads turn snapshots on stdin and answers each one on stdout.
#[derive(Debug, Parser)]
#[command(name = "capture-bumpers", version)]
struct Cli {
    /// Config file (defaults to the per-user config if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(long)]
    debug: bool,

    /// Append every turn's snapshot and commands to this JSON-lines file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Bumper bot, overriding the config
    #[arg(long, value_enum)]
    bot: Option<BotChoice>,

    /// Sled path, overriding the config
    #[arg(long, value_enum)]
    sled: Option<SledChoice>,

    /// Write a default config file (to --config or the per-user path) and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.write_default_config {
        let path = cli.config.clone().unwrap_or_else(config::get_config_path);
        config::create_default_config(&path)?;
        eprintln!("Created default config file at: {}", path.display());
        return Ok(());
    }

    let (mut config, fallback) = config::load_config(cli.config.as_deref())?;
    debug::init(&config.logging, cli.debug)?;
    if let Some(e) = fallback {
        warn!("failed to parse config file, using defaults: {e:#}");
    }

    if let Some(bot) = cli.bot {
        config.ai.bumper_bot = bot;
    }
    if let Some(sled) = cli.sled {
        config.ai.sled_path = sled;
    }
    info!(bot = ?config.ai.bumper_bot, sled = ?config.ai.sled_path, "configured");

    let mut player = Player::new(
        ai::create_bot(config.ai.bumper_bot, &config),
        SledPilot::new(config.ai.sled_path, config.sled.clone()),
    );

    let mut recorder = cli
        .record
        .as_deref()
        .map(TurnRecorder::create)
        .transpose()?;

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let summary = run_match(stdin, stdout, &mut player, recorder.as_mut())?;
    info!(turns = summary.turns_played, "match over");

    if let Some(recorder) = recorder {
        recorder.finish().context("closing record file")?;
    }
    Ok(())
}
