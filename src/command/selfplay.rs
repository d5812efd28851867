use clap::Args;
use serde::Serialize;
use vantage_core::logic::game::GameStatus;
use vantage_core::logic::position::Playable;
use vantage_core::GreedySelector;

use super::PositionArg;

#[derive(Debug, Clone, Args)]
pub struct SelfplayArg {
    #[clap(flatten)]
    position: PositionArg,
    /// Stop after this many half-moves
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    /// Print one JSON object per ply
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct PlyRecord {
    ply: usize,
    #[serde(rename = "move")]
    mv: String,
    score: f64,
}

pub fn run(arg: &SelfplayArg) -> anyhow::Result<()> {
    let mut game = arg.position.game()?;
    let selector = GreedySelector::new(arg.position.evaluator()?);

    let mut ply = 0;
    while ply < arg.max_plies && game.status() == GameStatus::Playing {
        let choice = selector.select(&mut game)?;
        game.apply_move(choice.mv);
        ply += 1;

        if arg.json {
            let record = PlyRecord {
                ply,
                mv: choice.mv.to_string(),
                score: choice.score,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{ply:>4}. {} {:+.3}", choice.mv, choice.score);
        }
    }

    tracing::info!("stopped after {ply} plies");
    println!("{:?}", game.status());
    Ok(())
}
