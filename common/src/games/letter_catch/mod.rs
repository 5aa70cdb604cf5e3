mod colors;
mod evaluator;
mod generator;
mod reward;
mod types;
mod words;

pub use colors::{BrightColorSource, ColorSource, FALLBACK_PALETTE};
pub use evaluator::{POINTS_PER_CATCH, evaluate_move};
pub use generator::{ConfigGenerator, DEFAULT_ROUND_COUNT, GeneratedConfig, GenerationError};
pub use reward::Reward;
pub use types::{DEFAULT_MAX_ATTEMPTS, GameConfig, Letter, Move, MoveResult, Round, Session};
pub use words::{DictionaryWordSource, FALLBACK_WORDS, MAX_WORD_LEN, MIN_WORD_LEN, WordSource};
