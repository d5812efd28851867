use clap::Args;
use vantage_core::GreedySelector;

use super::PositionArg;

#[derive(Debug, Clone, Default, Args)]
pub struct BestArg {
    #[clap(flatten)]
    position: PositionArg,
}

pub fn run(arg: &BestArg) -> anyhow::Result<()> {
    let mut game = arg.position.game()?;
    let selector = GreedySelector::new(arg.position.evaluator()?);
    let choice = selector.select(&mut game)?;
    println!("{} {:+.3}", choice.mv, choice.score);
    Ok(())
}
