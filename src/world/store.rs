//! Append-only generation history keyed by world and generation index

use super::{World, WorldId};
use crate::error::{LifeError, Result};
use crate::game_of_life::Board;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Persistence seam for world records and their generations.
///
/// Generations are immutable once written. Generation `k + 1` can only be
/// appended after generation `k`; the only way to rewrite history is
/// [`GenerationStore::wipe`] followed by a new generation 0.
pub trait GenerationStore {
    fn world(&self, id: WorldId) -> Option<&World>;

    fn put_world(&mut self, world: World);

    /// Drop every stored generation of a world, keeping its record
    fn wipe(&mut self, id: WorldId);

    fn create_generation0(&mut self, id: WorldId, board: Board) -> Result<()>;

    fn append_generation(&mut self, id: WorldId, index: usize, board: Board) -> Result<()>;

    fn get_generation(&self, id: WorldId, index: usize) -> Result<&Board>;

    /// Index of the newest stored generation, `None` before initialization
    fn last_index(&self, id: WorldId) -> Option<usize>;
}

/// In-memory store, serializable as a JSON snapshot
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemoryStore {
    worlds: HashMap<WorldId, World>,
    generations: HashMap<WorldId, Vec<Board>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of all known worlds, ascending
    pub fn world_ids(&self) -> Vec<WorldId> {
        let mut ids: Vec<WorldId> = self.worlds.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize store")
    }

    /// Load from JSON string
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse store snapshot")
    }

    /// Save a snapshot to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write snapshot: {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load a snapshot from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot: {}", path.as_ref().display()))?;
        Self::from_json(&content)
    }
}

impl GenerationStore for MemoryStore {
    fn world(&self, id: WorldId) -> Option<&World> {
        self.worlds.get(&id)
    }

    fn put_world(&mut self, world: World) {
        self.worlds.insert(world.id, world);
    }

    fn wipe(&mut self, id: WorldId) {
        self.generations.remove(&id);
    }

    fn create_generation0(&mut self, id: WorldId, board: Board) -> Result<()> {
        let history = self.generations.entry(id).or_default();
        if !history.is_empty() {
            return Err(LifeError::GenerationConflict { world: id, index: 0 });
        }
        history.push(board);
        Ok(())
    }

    fn append_generation(&mut self, id: WorldId, index: usize, board: Board) -> Result<()> {
        let history = self.generations.get_mut(&id).ok_or(LifeError::Uninitialized(id))?;
        if index != history.len() || index == 0 {
            return Err(LifeError::GenerationConflict { world: id, index });
        }
        history.push(board);
        Ok(())
    }

    fn get_generation(&self, id: WorldId, index: usize) -> Result<&Board> {
        self.generations
            .get(&id)
            .and_then(|history| history.get(index))
            .ok_or(LifeError::GenerationNotFound { world: id, index })
    }

    fn last_index(&self, id: WorldId) -> Option<usize> {
        self.generations
            .get(&id)
            .and_then(|history| history.len().checked_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn board_with(cell: (usize, usize)) -> Board {
        let mut board = Board::empty(15, 15);
        board.set_cell(cell.0, cell.1);
        board
    }

    #[test]
    fn test_append_only_history() {
        let mut store = MemoryStore::new();
        assert_eq!(store.last_index(1), None);
        assert_eq!(
            store.append_generation(1, 1, board_with((1, 1))),
            Err(LifeError::Uninitialized(1))
        );

        store.create_generation0(1, board_with((1, 1))).unwrap();
        store.append_generation(1, 1, board_with((2, 2))).unwrap();
        assert_eq!(store.last_index(1), Some(1));

        assert_eq!(
            store.append_generation(1, 1, board_with((3, 3))),
            Err(LifeError::GenerationConflict { world: 1, index: 1 })
        );
        assert_eq!(
            store.append_generation(1, 5, board_with((3, 3))),
            Err(LifeError::GenerationConflict { world: 1, index: 5 })
        );
        assert!(store.create_generation0(1, board_with((3, 3))).is_err());

        assert!(store.get_generation(1, 1).unwrap().get_cell(2, 2));
        assert_eq!(
            store.get_generation(1, 2),
            Err(LifeError::GenerationNotFound { world: 1, index: 2 })
        );
    }

    #[test]
    fn test_wipe_only_touches_one_world() {
        let mut store = MemoryStore::new();
        store.create_generation0(1, board_with((1, 1))).unwrap();
        store.create_generation0(2, board_with((1, 1))).unwrap();

        store.wipe(1);
        assert_eq!(store.last_index(1), None);
        assert_eq!(store.last_index(2), Some(0));
        store.create_generation0(1, board_with((4, 4))).unwrap();
        assert!(store.get_generation(1, 0).unwrap().get_cell(4, 4));
    }

    #[test]
    fn test_snapshot_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = MemoryStore::new();
        store.put_world(World::new(7, 15, 15, "2.3/3"));
        store.create_generation0(7, board_with((5, 6))).unwrap();
        store.save_to_file(&path).unwrap();

        let loaded = MemoryStore::load_from_file(&path).unwrap();
        assert_eq!(loaded.world_ids(), vec![7]);
        assert_eq!(loaded.world(7), store.world(7));
        assert_eq!(loaded.get_generation(7, 0), store.get_generation(7, 0));
    }
}
