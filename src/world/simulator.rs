//! Initialize / Iterate / Display operations over a generation store

use super::seeding::{SeedConfig, Seeder};
use super::store::{GenerationStore, MemoryStore};
use super::{World, WorldId};
use crate::error::{LifeError, Result};
use crate::game_of_life::{Board, RuleSpec, TransitionEngine};
use crate::utils::display::{Frame, Renderer, Vector};
use log::{debug, info};
use std::time::Duration;

/// Receives rendered frames from [`Simulator::display_range`] and owns pacing
pub trait FrameSink {
    fn present(&mut self, frame: &Frame, refresh: Duration) -> anyhow::Result<()>;
}

impl FrameSink for Vec<Frame> {
    fn present(&mut self, frame: &Frame, _refresh: Duration) -> anyhow::Result<()> {
        self.push(frame.clone());
        Ok(())
    }
}

/// Drives worlds held in a [`GenerationStore`].
///
/// Methods take `&mut self`, so one simulator serializes all access to the
/// worlds it holds.
pub struct Simulator<S: GenerationStore = MemoryStore> {
    store: S,
    seeder: Seeder,
    renderer: Renderer,
    defaults: World,
}

impl Simulator<MemoryStore> {
    /// Simulator over a fresh in-memory store
    pub fn in_memory(seed: Option<u64>) -> Self {
        Self::new(MemoryStore::new(), seed)
    }
}

impl<S: GenerationStore> Simulator<S> {
    pub fn new(store: S, seed: Option<u64>) -> Self {
        Self {
            store,
            seeder: Seeder::new(seed),
            renderer: Renderer::default(),
            defaults: World::new(0, 25, 50, RuleSpec::default().to_string()),
        }
    }

    /// Dimensions and rule used for worlds initialized without a record
    pub fn with_defaults(mut self, rows: usize, columns: usize, rule: &str) -> Self {
        self.defaults = World::new(0, rows, columns, rule);
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn world(&self, id: WorldId) -> Option<&World> {
        self.store.world(id)
    }

    /// Create or resize a world record. Existing history is left alone until
    /// the next [`Simulator::initialize`].
    pub fn open_world(&mut self, id: WorldId, rows: usize, columns: usize, rule: &str) {
        let mut world = World::new(id, rows, columns, rule);
        if let Some(existing) = self.store.world(id) {
            world.generation = existing.generation;
        }
        self.store.put_world(world);
    }

    /// Seed generation 0, discarding any earlier history of the world
    pub fn initialize(
        &mut self,
        id: WorldId,
        config: SeedConfig,
        origin_row: usize,
        origin_col: usize,
    ) -> Result<()> {
        let mut world = match self.store.world(id) {
            Some(world) => world.clone(),
            None => World {
                id,
                ..self.defaults.clone()
            },
        };

        self.store.wipe(id);
        let board = self
            .seeder
            .seed(config, world.rows, world.columns, (origin_row, origin_col));
        info!(
            "Initialized world {} ({}x{}, rule {}) with {:?}: {} live cells",
            id,
            world.rows,
            world.columns,
            world.rule_spec(),
            config,
            board.living_count()
        );

        self.store.create_generation0(id, board)?;
        world.generation = 0;
        self.store.put_world(world);
        Ok(())
    }

    /// Use a prepared board as generation 0, discarding any earlier history.
    /// The world grows to fit the board; a smaller board sits in the top-left
    /// corner of an otherwise dead world.
    pub fn initialize_with_board(&mut self, id: WorldId, board: &Board) -> Result<()> {
        let base = match self.store.world(id) {
            Some(world) => world.clone(),
            None => World {
                id,
                ..self.defaults.clone()
            },
        };
        let world = World::new(
            id,
            base.rows.max(board.rows()),
            base.columns.max(board.columns()),
            base.rule,
        );

        self.store.wipe(id);
        let mut generation0 = Board::empty(world.rows, world.columns);
        for r in 1..=board.rows() {
            if let Some(row) = board.row(r) {
                generation0.merge_row(r, row);
            }
        }
        info!(
            "Initialized world {} ({}x{}, rule {}) from a {}x{} board: {} live cells",
            id,
            world.rows,
            world.columns,
            world.rule_spec(),
            board.rows(),
            board.columns(),
            generation0.living_count()
        );

        self.store.create_generation0(id, generation0)?;
        self.store.put_world(world);
        Ok(())
    }

    /// Advance the world `count` generations, storing every one of them.
    /// Returns the index of the newest generation.
    pub fn iterate(&mut self, id: WorldId, count: usize) -> Result<usize> {
        let mut world = self.store.world(id).cloned().ok_or(LifeError::Uninitialized(id))?;
        let mut last = self.store.last_index(id).ok_or(LifeError::Uninitialized(id))?;
        let rule = world.rule_spec();

        for _ in 0..count {
            let next = TransitionEngine::step(self.store.get_generation(id, last)?, &rule);
            debug!(
                "World {} generation {}: {} live cells",
                id,
                last + 1,
                next.living_count()
            );
            self.store.append_generation(id, last + 1, next)?;
            last += 1;
        }

        world.generation = last;
        self.store.put_world(world);
        Ok(last)
    }

    /// Render one stored generation. The index is clamped to the newest one.
    pub fn display(&self, id: WorldId, generation: usize, from: &str, to: &str) -> Result<Frame> {
        let last = self.store.last_index(id).ok_or(LifeError::Uninitialized(id))?;
        let generation = generation.min(last);
        let board = self.store.get_generation(id, generation)?;
        self.renderer
            .render(board, generation, Vector::parse(from), Vector::parse(to))
    }

    /// Display every generation in `from_gen ..= to_gen`, both clamped to the
    /// stored history, handing each frame to `sink` with the refresh interval.
    /// Returns the number of frames presented.
    #[allow(clippy::too_many_arguments)]
    pub fn display_range(
        &self,
        id: WorldId,
        from_gen: usize,
        to_gen: usize,
        from: &str,
        to: &str,
        refresh: Duration,
        sink: &mut dyn FrameSink,
    ) -> anyhow::Result<usize> {
        let last = self.store.last_index(id).ok_or(LifeError::Uninitialized(id))?;
        let (from_gen, to_gen) = (from_gen.min(last), to_gen.min(last));

        let mut shown = 0;
        for generation in from_gen..=to_gen {
            let frame = self.display(id, generation, from, to)?;
            sink.present(&frame, refresh)?;
            shown += 1;
        }
        Ok(shown)
    }
}
