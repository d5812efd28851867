use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("square ({file}, {rank}) is outside the 8x8 board")]
    OutOfRange { file: i32, rank: i32 },

    #[error("no legal move available in this position")]
    NoLegalMove,

    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move `{0}`")]
    IllegalMove(String),

    #[error("invalid evaluation config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
