use crate::engine::aggregate::{aggregate, SquareAssessment};
use crate::engine::config::EvalConfig;
use crate::engine::control::{board_control, PieceControl};
use crate::engine::exchange::capture_chain_best_attack;
use crate::engine::Evaluator;
use crate::error::EngineError;
use crate::logic::board::{Color, Square};
use crate::logic::position::Position;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Terminal {
    Checkmate,
    Draw,
}

/// Which scoring rule a square fell under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// Empty square.
    Cover,
    /// Occupied, no attacker strong enough to capture.
    Unthreatened,
    /// Occupied, the exchange does not lose material.
    Safe,
    /// Occupant of the side to move can be won.
    HangingToMove,
    /// Occupant of the waiting side can be won.
    Winnable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquareContribution {
    pub square: Square,
    pub regime: Regime,
    /// White-positive.
    pub value: f64,
}

/// A score together with the terms it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub score: f64,
    pub material: f64,
    pub control: f64,
    pub terminal: Option<Terminal>,
    pub squares: Vec<SquareContribution>,
}

impl Evaluation {
    fn terminal(kind: Terminal, score: f64) -> Self {
        Self {
            score,
            material: 0.0,
            control: 0.0,
            terminal: Some(kind),
            squares: Vec::new(),
        }
    }
}

/// Material plus per-square control and exchange terms. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct ControlEvaluator {
    config: Arc<EvalConfig>,
}

impl Default for ControlEvaluator {
    fn default() -> Self {
        Self {
            config: Arc::new(EvalConfig::default()),
        }
    }
}

impl ControlEvaluator {
    pub fn new(config: Arc<EvalConfig>) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn update_config(&mut self, config: Arc<EvalConfig>) -> Result<(), EngineError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Signed sum of piece values, kings included.
    pub fn material(&self, position: &dyn Position) -> f64 {
        position
            .pieces()
            .iter()
            .map(|p| p.color.as_white_relative(self.config.material.get(p.piece_type)))
            .sum()
    }

    pub fn breakdown(&self, position: &dyn Position) -> Evaluation {
        if position.is_checkmate() {
            let score = match position.side_to_move() {
                Color::White => f64::NEG_INFINITY,
                Color::Black => f64::INFINITY,
            };
            return Evaluation::terminal(Terminal::Checkmate, score);
        }
        if position.is_drawn() {
            return Evaluation::terminal(Terminal::Draw, 0.0);
        }

        let controls = board_control(position, &self.config);
        let to_move = position.side_to_move();
        let squares: Vec<SquareContribution> = aggregate(position, &controls)
            .iter()
            .map(|assessment| self.contribution(assessment, &controls, to_move))
            .collect();

        let material = self.material(position);
        let control: f64 = squares.iter().map(|c| c.value).sum();
        let score = material + control;
        assert!(
            score.is_finite(),
            "non-finite evaluation {score} (material {material}, control {control}); check the configuration"
        );

        Evaluation {
            score,
            material,
            control,
            terminal: None,
            squares,
        }
    }

    fn contribution(
        &self,
        assessment: &SquareAssessment,
        controls: &[PieceControl],
        to_move: Color,
    ) -> SquareContribution {
        let config = &self.config;
        let balance = assessment.defense() - assessment.attack();

        let (regime, advantage) = match assessment.occupant {
            None => (Regime::Cover, balance * config.cover_weight),
            Some(occupant) => match capture_chain_best_attack(
                occupant,
                &assessment.defenders,
                &assessment.attackers,
                config,
            ) {
                None => (Regime::Unthreatened, balance * config.undefended_weight),
                Some(chain) if chain >= 0.0 => (Regime::Safe, balance * config.safe_weight),
                Some(chain) if occupant.color == to_move => {
                    let own_control = controls
                        .iter()
                        .find(|c| c.piece == occupant)
                        .map_or(0.0, PieceControl::total);
                    (Regime::HangingToMove, chain - own_control)
                }
                Some(_) => (Regime::Winnable, balance),
            },
        };

        let value = assessment.reference.as_white_relative(advantage);
        log::trace!("{} {regime:?} {value:+.3}", assessment.square);
        SquareContribution {
            square: assessment.square,
            regime,
            value,
        }
    }
}

impl Evaluator for ControlEvaluator {
    fn evaluate(&self, position: &dyn Position) -> f64 {
        self.breakdown(position).score
    }
}
