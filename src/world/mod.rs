//! Worlds, their generation history and the operations exposed on them

pub mod seeding;
pub mod simulator;
pub mod store;

pub use seeding::{Seeder, SeedConfig};
pub use simulator::{FrameSink, Simulator};
pub use store::{GenerationStore, MemoryStore};

use crate::game_of_life::RuleSpec;
use log::warn;
use serde::{Deserialize, Serialize};

/// Identifier of one simulated world
pub type WorldId = u64;

/// Smallest accepted board dimension
pub const MIN_DIMENSION: usize = 15;

/// Metadata record of one world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub id: WorldId,
    pub rows: usize,
    pub columns: usize,
    /// Index of the newest stored generation
    pub generation: usize,
    pub rule: String,
}

impl World {
    /// Create a world record; dimensions below [`MIN_DIMENSION`] are raised to it
    pub fn new(id: WorldId, rows: usize, columns: usize, rule: impl Into<String>) -> Self {
        if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
            warn!(
                "World {} requested {}x{}, raising to the {}x{} minimum",
                id, rows, columns, MIN_DIMENSION, MIN_DIMENSION
            );
        }
        Self {
            id,
            rows: rows.max(MIN_DIMENSION),
            columns: columns.max(MIN_DIMENSION),
            generation: 0,
            rule: rule.into(),
        }
    }

    pub fn rule_spec(&self) -> RuleSpec {
        RuleSpec::parse(&self.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_are_clamped() {
        let world = World::new(1, 3, 40, "2.3/3");
        assert_eq!(world.rows, MIN_DIMENSION);
        assert_eq!(world.columns, 40);
        assert_eq!(world.generation, 0);
    }

    #[test]
    fn test_rule_spec_from_record() {
        let world = World::new(1, 20, 20, "nonsense");
        assert_eq!(world.rule_spec(), RuleSpec::default());
    }
}
