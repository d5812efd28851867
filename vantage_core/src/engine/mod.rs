use crate::logic::position::Position;

pub mod aggregate;
pub mod config;
pub mod control;
pub mod eval;
pub mod exchange;
pub mod geometry;
pub mod ray;
pub mod select;

/// Static evaluation, White-positive. `+inf`/`-inf` are reserved for checkmate
/// and exactly `0.0` for drawn positions.
pub trait Evaluator {
    fn evaluate(&self, position: &dyn Position) -> f64;
}

