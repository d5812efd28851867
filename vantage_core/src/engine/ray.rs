use crate::engine::config::EvalConfig;
use crate::engine::geometry::{AxisKind, MovementAxis};
use crate::logic::board::{Piece, Square};
use crate::logic::position::Position;

/// One piece's unsigned influence on one square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSample {
    pub square: Square,
    pub source: Piece,
    pub magnitude: f64,
}

/// `(1 + B*k1)^-p1 * (1 + i)^-p2`, in `(0, 1]` for `block >= 0` and `step >= 1`.
pub fn decay(block: f64, step: usize, config: &EvalConfig) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let distance = 1.0 + step as f64;
    (block.mul_add(config.block_scale, 1.0)).powf(-config.block_exponent)
        * distance.powf(-config.distance_exponent)
}

/// How much `occupant` obstructs `mover`'s projection further along an axis of `kind`.
pub fn immobility(mover: Piece, occupant: Piece, kind: AxisKind, config: &EvalConfig) -> f64 {
    if occupant.color != mover.color {
        config.immobility_enemy.get(occupant.piece_type)
    } else if kind.carries(mover.piece_type) && kind.carries(occupant.piece_type) {
        config.battery_weight
    } else {
        config.immobility_own.get(occupant.piece_type)
    }
}

/// Walks `axis` outward from `mover`, one sample per square, nearest first.
///
/// The block accumulator only grows after the occupied square itself has been
/// sampled, and never drops below zero.
pub fn walk_axis(
    position: &dyn Position,
    mover: Piece,
    axis: &MovementAxis,
    config: &EvalConfig,
) -> Vec<ControlSample> {
    let mut block = 0.0_f64;
    axis.squares
        .iter()
        .enumerate()
        .map(|(i, &square)| {
            let sample = ControlSample {
                square,
                source: mover,
                magnitude: decay(block, i + 1, config),
            };
            if let Some(occupant) = position.occupant_at(square) {
                block = (block + immobility(mover, occupant, axis.kind, config)).max(0.0);
            }
            sample
        })
        .collect()
}
