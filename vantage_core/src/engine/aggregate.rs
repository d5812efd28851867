use crate::engine::control::PieceControl;
use crate::engine::ray::ControlSample;
use crate::logic::board::{Color, Piece, Square, NUM_SQUARES};
use crate::logic::position::Position;

/// All control converging on one square, split into defense and attack.
///
/// For an occupied square the split follows the occupant's colour. For an empty
/// square the side with the larger summed magnitude is the reference colour
/// (White on a tie) and its samples count as defense.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareAssessment {
    pub square: Square,
    pub occupant: Option<Piece>,
    pub reference: Color,
    pub defenders: Vec<ControlSample>,
    pub attackers: Vec<ControlSample>,
}

impl SquareAssessment {
    pub fn new(square: Square, occupant: Option<Piece>, samples: Vec<ControlSample>) -> Self {
        let reference = occupant.map_or_else(|| stronger_side(&samples), |piece| piece.color);
        let (defenders, attackers) = samples
            .into_iter()
            .partition(|sample| sample.source.color == reference);
        Self {
            square,
            occupant,
            reference,
            defenders,
            attackers,
        }
    }

    pub fn defense(&self) -> f64 {
        self.defenders.iter().map(|s| s.magnitude).sum()
    }

    pub fn attack(&self) -> f64 {
        self.attackers.iter().map(|s| s.magnitude).sum()
    }

    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

fn stronger_side(samples: &[ControlSample]) -> Color {
    let sum_of = |color: Color| -> f64 {
        samples
            .iter()
            .filter(|s| s.source.color == color)
            .map(|s| s.magnitude)
            .sum()
    };
    if sum_of(Color::White) >= sum_of(Color::Black) {
        Color::White
    } else {
        Color::Black
    }
}

/// Groups every sample by target square. Returns one assessment per square in index order.
pub fn aggregate(position: &dyn Position, controls: &[PieceControl]) -> Vec<SquareAssessment> {
    let mut buckets: Vec<Vec<ControlSample>> = vec![Vec::new(); NUM_SQUARES];
    for sample in controls.iter().flat_map(|c| c.samples.iter()) {
        if let Some(bucket) = buckets.get_mut(sample.square.index()) {
            bucket.push(*sample);
        }
    }

    Square::all()
        .zip(buckets)
        .map(|(square, samples)| SquareAssessment::new(square, position.occupant_at(square), samples))
        .collect()
}
