use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vantage_core::engine::config::EvalConfig;
use vantage_core::{ControlEvaluator, GameState};

use self::{best::BestArg, eval::EvalArg, selfplay::SelfplayArg};

mod best;
mod eval;
mod selfplay;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the static evaluation of a position
    Eval(#[clap(flatten)] EvalArg),
    /// Print the greedy move for the side to move
    Best(#[clap(flatten)] BestArg),
    /// Let the greedy selector play both sides
    Selfplay(#[clap(flatten)] SelfplayArg),
}

/// Where to start and how to score.
#[derive(Debug, Clone, Default, Args)]
pub struct PositionArg {
    /// Position in FEN; the standard start position when omitted
    #[arg(long)]
    fen: Option<String>,
    /// JSON file with evaluation parameters; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

impl PositionArg {
    pub fn game(&self) -> anyhow::Result<GameState> {
        match &self.fen {
            Some(fen) => Ok(GameState::from_fen(fen)?),
            None => Ok(GameState::new()),
        }
    }

    pub fn evaluator(&self) -> anyhow::Result<ControlEvaluator> {
        let config = match &self.config {
            Some(path) => {
                let config = EvalConfig::load_from_path(path)
                    .with_context(|| format!("failed to load config from {}", path.display()))?;
                tracing::info!("loaded evaluation config from {}", path.display());
                config
            }
            None => EvalConfig::default(),
        };
        Ok(ControlEvaluator::new(Arc::new(config))?)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Eval(arg) => eval::run(&arg)?,
        Mode::Best(arg) => best::run(&arg)?,
        Mode::Selfplay(arg) => selfplay::run(&arg)?,
    }
    Ok(())
}
