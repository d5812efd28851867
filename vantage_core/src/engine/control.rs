use crate::engine::config::EvalConfig;
use crate::engine::geometry::GeometryTables;
use crate::engine::ray::{walk_axis, ControlSample};
use crate::logic::board::Piece;
use crate::logic::position::Position;

/// Every square one piece influences, scaled by that piece's stability.
#[derive(Debug, Clone)]
pub struct PieceControl {
    pub piece: Piece,
    pub samples: Vec<ControlSample>,
}

impl PieceControl {
    /// Sum of the piece's outward control over all squares.
    pub fn total(&self) -> f64 {
        self.samples.iter().map(|s| s.magnitude).sum()
    }
}

pub fn piece_control(position: &dyn Position, piece: Piece, config: &EvalConfig) -> PieceControl {
    let stability = config.stability.get(piece.piece_type);
    let samples = GeometryTables::get()
        .axes(piece.piece_type, piece.color, piece.location)
        .iter()
        .flat_map(|axis| walk_axis(position, piece, axis, config))
        .map(|sample| ControlSample {
            magnitude: sample.magnitude * stability,
            ..sample
        })
        .collect();
    PieceControl { piece, samples }
}

/// Control maps of every piece on the board, in square index order of the pieces.
pub fn board_control(position: &dyn Position, config: &EvalConfig) -> Vec<PieceControl> {
    position
        .pieces()
        .into_iter()
        .map(|piece| piece_control(position, piece, config))
        .collect()
}
