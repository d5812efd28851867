use crate::engine::Evaluator;
use crate::error::EngineError;
use crate::logic::board::Color;
use crate::logic::position::Playable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<M> {
    pub mv: M,
    /// Evaluation of the position after `mv`.
    pub score: f64,
}

/// One-ply greedy choice: evaluate every legal move, keep the best for the side to move.
#[derive(Debug, Clone, Default)]
pub struct GreedySelector<E> {
    evaluator: E,
}

impl<E: Evaluator> GreedySelector<E> {
    pub const fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Ties go to the move listed first by the host. Every candidate is
    /// reverted before the next one is tried.
    pub fn select<P: Playable>(&self, position: &mut P) -> Result<Selection<P::Move>, EngineError> {
        let mover = position.side_to_move();
        let mut best: Option<Selection<P::Move>> = None;

        for mv in position.legal_moves() {
            let score = position.with_move(mv, |next| self.evaluator.evaluate(next));
            log::debug!("{mv}: {score:.3}");

            let improves = best.as_ref().is_none_or(|b| match mover {
                Color::White => score > b.score,
                Color::Black => score < b.score,
            });
            if improves {
                best = Some(Selection { mv, score });
            }
        }

        let Some(choice) = best else {
            log::warn!("move requested for {mover:?} but no legal move exists");
            return Err(EngineError::NoLegalMove);
        };
        log::info!(
            "{mover:?} plays {}, evaluation guess {:.3}",
            choice.mv,
            choice.score
        );
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::{Piece, Square};
    use crate::logic::position::Position;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// A root with `moves` numbered candidates and nothing on the board.
    struct Root {
        to_move: Color,
        moves: usize,
        played: Vec<usize>,
    }

    impl Position for Root {
        fn occupant_at(&self, _square: Square) -> Option<Piece> {
            None
        }

        fn side_to_move(&self) -> Color {
            if self.played.len() % 2 == 0 {
                self.to_move
            } else {
                self.to_move.opposite()
            }
        }

        fn is_checkmate(&self) -> bool {
            false
        }

        fn is_drawn(&self) -> bool {
            false
        }
    }

    impl Playable for Root {
        type Move = usize;

        fn legal_moves(&self) -> Vec<usize> {
            (0..self.moves).collect()
        }

        fn apply_move(&mut self, mv: usize) {
            self.played.push(mv);
        }

        fn revert_last_move(&mut self) {
            self.played.pop();
        }
    }

    /// Hands out scores in the order positions are evaluated.
    struct Scripted(RefCell<VecDeque<f64>>);

    impl Scripted {
        fn new(scores: &[f64]) -> Self {
            Self(RefCell::new(scores.iter().copied().collect()))
        }
    }

    impl Evaluator for Scripted {
        fn evaluate(&self, _position: &dyn Position) -> f64 {
            self.0.borrow_mut().pop_front().unwrap()
        }
    }

    fn root(to_move: Color, moves: usize) -> Root {
        Root {
            to_move,
            moves,
            played: Vec::new(),
        }
    }

    #[test]
    fn test_white_keeps_first_maximum() {
        let selector = GreedySelector::new(Scripted::new(&[0.5, 1.0, 1.0, 0.2]));
        let mut position = root(Color::White, 4);
        let choice = selector.select(&mut position).unwrap();
        assert_eq!(choice.mv, 1);
        assert!((choice.score - 1.0).abs() < f64::EPSILON);
        assert!(position.played.is_empty());
    }

    #[test]
    fn test_black_keeps_first_minimum() {
        let selector = GreedySelector::new(Scripted::new(&[0.5, -1.0, 3.0, -1.0]));
        let mut position = root(Color::Black, 4);
        assert_eq!(selector.select(&mut position).unwrap().mv, 1);
    }

    #[test]
    fn test_tie_break_is_stable_across_runs() {
        for _ in 0..3 {
            let selector = GreedySelector::new(Scripted::new(&[2.0, 2.0, 2.0]));
            let mut position = root(Color::White, 3);
            assert_eq!(selector.select(&mut position).unwrap().mv, 0);
        }
    }

    #[test]
    fn test_infinite_scores_are_compared() {
        let selector = GreedySelector::new(Scripted::new(&[3.0, f64::INFINITY, 9.0]));
        let mut position = root(Color::White, 3);
        assert_eq!(selector.select(&mut position).unwrap().mv, 1);
    }

    #[test]
    fn test_no_legal_move() {
        let selector = GreedySelector::new(Scripted::new(&[]));
        let mut position = root(Color::White, 0);
        assert!(matches!(
            selector.select(&mut position),
            Err(EngineError::NoLegalMove)
        ));
    }
}
