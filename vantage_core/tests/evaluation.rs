use std::sync::Arc;
use vantage_core::engine::config::EvalConfig;
use vantage_core::engine::eval::Regime;
use vantage_core::{ControlEvaluator, Evaluator, GameState};

const MIDDLEGAME: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP3PPP/R2QKB1R w KQ - 0 8";

#[test]
fn test_evaluation_is_deterministic() {
    let game = GameState::from_fen(MIDDLEGAME).unwrap();
    let evaluator = ControlEvaluator::default();
    let first = evaluator.evaluate(&game);
    let second = evaluator.evaluate(&game);
    assert_eq!(first.to_bits(), second.to_bits());
    assert!(first.is_finite());
}

#[test]
fn test_lone_queen_scores_close_to_material() {
    // Kings in opposite corners, queen far from both
    let game = GameState::from_fen("7k/8/8/8/8/8/8/KQ6 b - - 0 1").unwrap();
    let evaluator = ControlEvaluator::default();
    let evaluation = evaluator.breakdown(&game);

    let expected = evaluator.config().material.queen;
    assert!((evaluation.material - expected).abs() < 1e-12);
    assert!(evaluation
        .squares
        .iter()
        .all(|c| matches!(c.regime, Regime::Cover | Regime::Unthreatened)));
    // Whatever is left over is the queen's long-range cover
    assert!((evaluation.score - expected - evaluation.control).abs() < 1e-9);
    assert!(evaluation.control > 0.0 && evaluation.control < 2.0);
}

#[test]
fn test_material_counts_kings_for_both_sides() {
    let game = GameState::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let evaluator = ControlEvaluator::default();
    assert!(evaluator.material(&game).abs() < 1e-12);
}

#[test]
fn test_extra_piece_favours_its_owner() {
    let evaluator = ControlEvaluator::default();
    let white_up = GameState::from_fen("4k3/pppppppp/8/8/8/8/PPPPPPPP/RN2K3 w - - 0 1").unwrap();
    let black_up = GameState::from_fen("rn2k3/pppppppp/8/8/8/8/PPPPPPPP/4K3 b - - 0 1").unwrap();
    assert!(evaluator.evaluate(&white_up) > 0.0);
    assert!(evaluator.evaluate(&black_up) < 0.0);
}

#[test]
fn test_config_changes_the_score() {
    let game = GameState::from_fen(MIDDLEGAME).unwrap();
    let base = ControlEvaluator::default().evaluate(&game);

    let config = EvalConfig::load_from_json(r#"{ "material": { "pawn": 1.0, "knight": 3.0, "bishop": 3.0, "rook": 5.0, "queen": 9.0, "king": 0.0 }, "cover_weight": 0.0 }"#).unwrap();
    let tuned = ControlEvaluator::new(Arc::new(config)).unwrap().evaluate(&game);
    assert!(tuned.is_finite());
    assert_ne!(base.to_bits(), tuned.to_bits());
}

#[test]
fn test_evaluation_leaves_position_untouched() {
    let game = GameState::from_fen(MIDDLEGAME).unwrap();
    let hash = game.board().get_hash();
    let _ = ControlEvaluator::default().breakdown(&game);
    assert_eq!(game.board().get_hash(), hash);
    assert!(game.history().is_empty());
}
