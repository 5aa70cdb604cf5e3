pub mod config;
pub mod error;
pub mod games;
pub mod id_generator;
pub mod identifiers;
pub mod logger;

pub use error::GameError;
pub use identifiers::*;
