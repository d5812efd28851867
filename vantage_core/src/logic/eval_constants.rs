// Reference configuration. Every value here is a tunable default for `EvalConfig`.

// Piece Values (Pawn, Knight, Bishop, Rook, Queen, King)
pub const VAL_PAWN: f64 = 1.0;
pub const VAL_KNIGHT: f64 = 2.9;
pub const VAL_BISHOP: f64 = 3.2;
pub const VAL_ROOK: f64 = 4.5;
pub const VAL_QUEEN: f64 = 8.6;
pub const VAL_KING: f64 = 4.0;

// Stability: how long a piece's control is expected to hold up.
pub const STABILITY_PAWN: f64 = 1.31;
pub const STABILITY_KNIGHT: f64 = 1.13; // cannot be intercepted
pub const STABILITY_BISHOP: f64 = 1.01;
pub const STABILITY_ROOK: f64 = 0.9;
pub const STABILITY_QUEEN: f64 = 0.79; // easily chased away
pub const STABILITY_KING: f64 = 0.72; // committing the king is risky

// Immobility: how much an occupant blocks a ray walking through it.
#[rustfmt::skip]
pub const IMMOBILITY_OWN: [f64; 6] = [
    1.0, // Pawn
    1.0, // Knight
    0.8, // Bishop
    0.8, // Rook
    0.7, // Queen
    1.0, // King
];

#[rustfmt::skip]
pub const IMMOBILITY_ENEMY: [f64; 6] = [
    1.0,  // Pawn
    1.0,  // Knight
    1.0,  // Bishop
    1.0,  // Rook
    1.0,  // Queen
    -0.2, // King: must step off the line, so it barely blocks
];

/// Own slider standing on a ray it also moves along (rook behind rook, queen behind bishop).
pub const IMMOBILITY_BATTERY: f64 = 0.05;

// Ray decay: (1 + B*k1)^-p1 * (1 + i)^-p2
pub const BLOCK_SCALE: f64 = 2.0;
pub const BLOCK_EXPONENT: f64 = 1.2;
pub const DISTANCE_EXPONENT: f64 = 0.45;

/// Below this a control sample is too diffuse to be a real capture.
pub const MATERIALIZATION_THRESHOLD: f64 = 0.55;

// Square regime weights
pub const WEIGHT_COVER: f64 = 0.13;
pub const WEIGHT_UNDEFENDED: f64 = 0.16;
pub const WEIGHT_SAFE: f64 = 0.34;

use crate::logic::board::PieceType;

pub const fn get_piece_value(pt: PieceType) -> f64 {
    match pt {
        PieceType::Pawn => VAL_PAWN,
        PieceType::Knight => VAL_KNIGHT,
        PieceType::Bishop => VAL_BISHOP,
        PieceType::Rook => VAL_ROOK,
        PieceType::Queen => VAL_QUEEN,
        PieceType::King => VAL_KING,
    }
}

pub const fn get_stability(pt: PieceType) -> f64 {
    match pt {
        PieceType::Pawn => STABILITY_PAWN,
        PieceType::Knight => STABILITY_KNIGHT,
        PieceType::Bishop => STABILITY_BISHOP,
        PieceType::Rook => STABILITY_ROOK,
        PieceType::Queen => STABILITY_QUEEN,
        PieceType::King => STABILITY_KING,
    }
}
