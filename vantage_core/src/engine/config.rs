use crate::error::EngineError;
use crate::logic::board::PieceType;
use crate::logic::eval_constants::{
    get_piece_value, get_stability, BLOCK_EXPONENT, BLOCK_SCALE, DISTANCE_EXPONENT,
    IMMOBILITY_BATTERY, IMMOBILITY_ENEMY, IMMOBILITY_OWN, MATERIALIZATION_THRESHOLD,
    WEIGHT_COVER, WEIGHT_SAFE, WEIGHT_UNDEFENDED,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One value per piece type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceWeights {
    pub pawn: f64,
    pub knight: f64,
    pub bishop: f64,
    pub rook: f64,
    pub queen: f64,
    pub king: f64,
}

impl PieceWeights {
    pub fn from_fn(f: impl Fn(PieceType) -> f64) -> Self {
        Self {
            pawn: f(PieceType::Pawn),
            knight: f(PieceType::Knight),
            bishop: f(PieceType::Bishop),
            rook: f(PieceType::Rook),
            queen: f(PieceType::Queen),
            king: f(PieceType::King),
        }
    }

    pub const fn get(&self, pt: PieceType) -> f64 {
        match pt {
            PieceType::Pawn => self.pawn,
            PieceType::Knight => self.knight,
            PieceType::Bishop => self.bishop,
            PieceType::Rook => self.rook,
            PieceType::Queen => self.queen,
            PieceType::King => self.king,
        }
    }

    fn values(&self) -> [f64; 6] {
        [
            self.pawn,
            self.knight,
            self.bishop,
            self.rook,
            self.queen,
            self.king,
        ]
    }
}

fn table_weights(table: &[f64; 6]) -> PieceWeights {
    PieceWeights::from_fn(|pt| table.get(pt.index()).copied().unwrap_or(0.0))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    // Material
    pub material: PieceWeights,

    // Control projection
    pub stability: PieceWeights,
    pub immobility_own: PieceWeights,
    pub immobility_enemy: PieceWeights,
    pub battery_weight: f64,
    pub block_scale: f64,
    pub block_exponent: f64,
    pub distance_exponent: f64,

    // Exchange
    pub materialization_threshold: f64,

    // Square regimes
    pub cover_weight: f64,
    pub undefended_weight: f64,
    pub safe_weight: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            material: PieceWeights::from_fn(get_piece_value),
            stability: PieceWeights::from_fn(get_stability),
            immobility_own: table_weights(&IMMOBILITY_OWN),
            immobility_enemy: table_weights(&IMMOBILITY_ENEMY),
            battery_weight: IMMOBILITY_BATTERY,
            block_scale: BLOCK_SCALE,
            block_exponent: BLOCK_EXPONENT,
            distance_exponent: DISTANCE_EXPONENT,
            materialization_threshold: MATERIALIZATION_THRESHOLD,
            cover_weight: WEIGHT_COVER,
            undefended_weight: WEIGHT_UNDEFENDED,
            safe_weight: WEIGHT_SAFE,
        }
    }
}

impl EvalConfig {
    /// Parses a (possibly partial) JSON config. Missing keys keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::load_from_json(&json)
    }

    /// Rejects values that would make the scoring scale degenerate.
    pub fn validate(&self) -> Result<(), EngineError> {
        let tables = [
            ("material", &self.material),
            ("stability", &self.stability),
            ("immobility_own", &self.immobility_own),
            ("immobility_enemy", &self.immobility_enemy),
        ];
        for (name, table) in tables {
            if table.values().iter().any(|v| !v.is_finite()) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} contains a non-finite value"
                )));
            }
        }
        for (name, table) in [("material", &self.material), ("stability", &self.stability)] {
            if table.values().iter().any(|v| *v < 0.0) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} values must be non-negative"
                )));
            }
        }

        let scalars = [
            ("battery_weight", self.battery_weight),
            ("block_scale", self.block_scale),
            ("block_exponent", self.block_exponent),
            ("distance_exponent", self.distance_exponent),
            ("materialization_threshold", self.materialization_threshold),
            ("cover_weight", self.cover_weight),
            ("undefended_weight", self.undefended_weight),
            ("safe_weight", self.safe_weight),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::InvalidConfig(format!(
                "{name} must be finite"
            )));
        }
        for (name, value) in [
            ("block_scale", self.block_scale),
            ("block_exponent", self.block_exponent),
            ("distance_exponent", self.distance_exponent),
        ] {
            if value <= 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
