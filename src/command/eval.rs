use clap::Args;
use vantage_core::engine::eval::Evaluation;

use super::PositionArg;

#[derive(Debug, Clone, Default, Args)]
pub struct EvalArg {
    #[clap(flatten)]
    position: PositionArg,
    /// Also print material, control and every non-zero square term
    #[arg(long)]
    explain: bool,
    /// Print the full breakdown as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &EvalArg) -> anyhow::Result<()> {
    let game = arg.position.game()?;
    let evaluator = arg.position.evaluator()?;
    let evaluation = evaluator.breakdown(&game);

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    println!("score: {:+.3}", evaluation.score);
    if arg.explain {
        print_explanation(&evaluation);
    }
    Ok(())
}

fn print_explanation(evaluation: &Evaluation) {
    if let Some(terminal) = evaluation.terminal {
        println!("terminal: {terminal:?}");
        return;
    }
    println!("material: {:+.3}", evaluation.material);
    println!("control:  {:+.3}", evaluation.control);

    // Rank 8 first, as the board is usually drawn
    let mut squares = evaluation.squares.clone();
    squares.sort_by_key(|c| (std::cmp::Reverse(c.square.rank()), c.square.file()));
    for contribution in squares.iter().filter(|c| c.value.abs() > 0.0) {
        println!(
            "  {:<3}{:<14}{:+.4}",
            contribution.square.to_string(),
            format!("{:?}", contribution.regime),
            contribution.value
        );
    }
}
