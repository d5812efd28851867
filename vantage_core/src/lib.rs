pub mod engine;
pub mod error;
pub mod logic;

pub use engine::eval::{ControlEvaluator, Evaluation};
pub use engine::select::{GreedySelector, Selection};
pub use engine::Evaluator;
pub use error::EngineError;
pub use logic::game::GameState;
