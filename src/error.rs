//! Error types for world simulation

use crate::world::WorldId;
use thiserror::Error;

/// Recoverable conditions reported by the simulation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("world {0} has no generation 0; call initialize first")]
    Uninitialized(WorldId),

    #[error("world {0} does not exist")]
    UnknownWorld(WorldId),

    #[error("generation {index} of world {world} not found")]
    GenerationNotFound { world: WorldId, index: usize },

    #[error("generation {index} of world {world} cannot be written: history is append-only")]
    GenerationConflict { world: WorldId, index: usize },

    #[error("range incorrect: {from} .. {to}")]
    RangeIncorrect { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;
