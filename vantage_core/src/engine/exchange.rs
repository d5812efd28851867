use crate::engine::config::EvalConfig;
use crate::engine::ray::ControlSample;
use crate::logic::board::{Piece, PieceType};

/// Pieces whose control on the square is strong enough to stand for a real capture,
/// cheapest first. Equal values keep their sample order.
pub fn materialized(samples: &[ControlSample], config: &EvalConfig) -> Vec<PieceType> {
    let mut pieces: Vec<PieceType> = samples
        .iter()
        .filter(|s| s.magnitude > config.materialization_threshold)
        .map(|s| s.source.piece_type)
        .collect();
    pieces.sort_by(|a, b| config.material.get(*a).total_cmp(&config.material.get(*b)));
    pieces
}

/// Static exchange on the occupant's square, seen from the defending side.
///
/// Returns `None` when no attacker materializes. Otherwise returns the
/// defender's balance after both sides capture cheapest first and either side
/// stops as soon as continuing would lose material. The value is never
/// positive: `0` means the occupant is safe, a negative value is the material
/// the defender can be forced to give up.
pub fn capture_chain_best_attack(
    occupant: Piece,
    defenders: &[ControlSample],
    attackers: &[ControlSample],
    config: &EvalConfig,
) -> Option<f64> {
    let attackers = materialized(attackers, config);
    if attackers.is_empty() {
        return None;
    }
    let defenders = materialized(defenders, config);

    let gains = swap_list(occupant.piece_type, &attackers, &defenders, config);
    let attacker_gain = fold_back(gains);
    Some(-attacker_gain.max(0.0))
}

/// `gains[i]` is the material balance for the side making capture `i`,
/// assuming the sequence stops right after it.
fn swap_list(
    occupant: PieceType,
    attackers: &[PieceType],
    defenders: &[PieceType],
    config: &EvalConfig,
) -> Vec<f64> {
    let value = |pt: PieceType| config.material.get(pt);
    let mut attackers = attackers.iter().copied().peekable();
    let mut defenders = defenders.iter().copied().peekable();

    let mut gains = vec![value(occupant)];
    let Some(mut on_square) = attackers.next() else {
        return gains;
    };
    let mut defenders_turn = true;

    loop {
        let (movers, others) = if defenders_turn {
            (&mut defenders, &mut attackers)
        } else {
            (&mut attackers, &mut defenders)
        };
        let Some(&capturer) = movers.peek() else {
            break;
        };
        // A king cannot take onto a square the other side still covers
        if capturer == PieceType::King && others.peek().is_some() {
            break;
        }
        movers.next();
        let previous = gains.last().copied().unwrap_or(0.0);
        gains.push(value(on_square) - previous);
        on_square = capturer;
        defenders_turn = !defenders_turn;
    }
    gains
}

/// Negamax over the swap list: each side may decline the next capture.
fn fold_back(mut gains: Vec<f64>) -> f64 {
    while gains.len() > 1 {
        let last = gains.pop().unwrap_or(0.0);
        if let Some(prev) = gains.last_mut() {
            *prev = -(-*prev).max(last);
        }
    }
    gains.first().copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::{Color, Square};

    fn sq(file: i32, rank: i32) -> Square {
        Square::new(file, rank).unwrap()
    }

    fn sample(pt: PieceType, color: Color, magnitude: f64) -> ControlSample {
        ControlSample {
            square: sq(3, 3),
            source: Piece::new(pt, color, sq(0, 0)),
            magnitude,
        }
    }

    fn target(pt: PieceType) -> Piece {
        Piece::new(pt, Color::White, sq(3, 3))
    }

    #[test]
    fn test_pawn_defended_by_bishop_is_safe_from_rook() {
        let config = EvalConfig::default();
        let defenders = [sample(PieceType::Bishop, Color::White, 0.74)];
        let attackers = [sample(PieceType::Rook, Color::Black, 0.66)];
        let chain =
            capture_chain_best_attack(target(PieceType::Pawn), &defenders, &attackers, &config)
                .unwrap();
        assert!(chain >= 0.0);
        assert!(chain.abs() < 1e-12);
    }

    #[test]
    fn test_undefended_queen_is_lost_to_pawn() {
        let config = EvalConfig::default();
        let attackers = [sample(PieceType::Pawn, Color::Black, 0.96)];
        let chain =
            capture_chain_best_attack(target(PieceType::Queen), &[], &attackers, &config).unwrap();
        assert!(chain < 0.0);
        assert!((chain + config.material.queen).abs() < 1e-12);
    }

    #[test]
    fn test_defended_queen_still_loses_the_difference() {
        let config = EvalConfig::default();
        let defenders = [sample(PieceType::Knight, Color::White, 0.83)];
        let attackers = [sample(PieceType::Pawn, Color::Black, 0.96)];
        let chain =
            capture_chain_best_attack(target(PieceType::Queen), &defenders, &attackers, &config)
                .unwrap();
        let expected = -(config.material.queen - config.material.pawn);
        assert!((chain - expected).abs() < 1e-12);
    }

    #[test]
    fn test_weak_attackers_do_not_materialize() {
        let config = EvalConfig::default();
        let attackers = [sample(PieceType::Rook, Color::Black, 0.3)];
        assert_eq!(
            capture_chain_best_attack(target(PieceType::Knight), &[], &attackers, &config),
            None
        );
    }

    #[test]
    fn test_materialized_sorts_cheapest_first() {
        let config = EvalConfig::default();
        let samples = [
            sample(PieceType::Queen, Color::Black, 0.6),
            sample(PieceType::Knight, Color::Black, 0.8),
            sample(PieceType::Bishop, Color::Black, 0.1),
            sample(PieceType::Pawn, Color::Black, 0.9),
        ];
        assert_eq!(
            materialized(&samples, &config),
            vec![PieceType::Pawn, PieceType::Knight, PieceType::Queen]
        );
    }

    #[test]
    fn test_king_does_not_recapture_into_cover() {
        let config = EvalConfig::default();
        // Knight defended only by its king, attacked twice
        let defenders = [sample(PieceType::King, Color::White, 0.9)];
        let attackers = [
            sample(PieceType::Bishop, Color::Black, 0.7),
            sample(PieceType::Rook, Color::Black, 0.6),
        ];
        let chain =
            capture_chain_best_attack(target(PieceType::Knight), &defenders, &attackers, &config)
                .unwrap();
        assert!((chain + config.material.knight).abs() < 1e-12);
    }

    #[test]
    fn test_fold_back_lets_attacker_stand_pat() {
        // Capturing a pawn with a queen into a pawn recapture loses 7.6
        assert!((fold_back(vec![1.0, 7.6]) + 7.6).abs() < 1e-12);
        assert!((fold_back(vec![3.0]) - 3.0).abs() < 1e-12);
    }
}
