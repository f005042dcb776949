//! JSON scenario descriptor: initialize a world, iterate it, display a range

use crate::config::Settings;
use crate::error::LifeError;
use crate::game_of_life::load_board_from_file;
use crate::utils::display::Renderer;
use crate::world::{FrameSink, SeedConfig, Simulator, WorldId};
use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One scenario run. Every field is optional; see the accessors for defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Scenario {
    pub id: Option<WorldId>,
    /// First generation to display
    pub from: Option<usize>,
    /// Last generation to display
    pub to: Option<usize>,
    pub iterations: Option<usize>,
    /// Initial configuration selector (0..=5)
    pub config: Option<i64>,
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub from_vector: Option<String>,
    pub to_vector: Option<String>,
    pub alive: Option<char>,
    pub dead: Option<char>,
    /// Text board (`0`/`1` rows) used as generation 0 instead of `Config`
    pub board: Option<PathBuf>,
}

/// Outcome of [`Scenario::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub world: WorldId,
    /// Newest stored generation after iterating
    pub last_generation: usize,
    pub frames_shown: usize,
    pub status: bool,
    pub message: Option<String>,
}

const DEFAULT_WORLD: WorldId = 1;
const DEFAULT_ITERATIONS: usize = 10;

impl Scenario {
    /// Load from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse scenario")
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scenario")
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file: {}", path.as_ref().display()))?;
        Self::from_json(&content)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write scenario file: {}", path.as_ref().display()))
    }

    pub fn world_id(&self) -> WorldId {
        self.id.unwrap_or(DEFAULT_WORLD)
    }

    pub fn iteration_count(&self) -> usize {
        self.iterations.unwrap_or(DEFAULT_ITERATIONS)
    }

    pub fn seed_config(&self) -> SeedConfig {
        SeedConfig::from_selector(self.config.unwrap_or(0))
    }

    /// Display range, defaulting to every generation produced by the run
    pub fn generation_range(&self) -> (usize, usize) {
        (self.from.unwrap_or(0), self.to.unwrap_or(self.iteration_count()))
    }

    /// Window corners, defaulting to the whole board
    pub fn window(&self, rows: usize, columns: usize) -> (String, String) {
        (
            self.from_vector.clone().unwrap_or_else(|| "1,1".to_string()),
            self.to_vector
                .clone()
                .unwrap_or_else(|| format!("{},{}", columns, rows)),
        )
    }

    /// Initialize the world, iterate it and display the requested range.
    ///
    /// An uninitialized world or an incorrect range yields a report with
    /// `status == false`; other failures are errors.
    pub fn run(&self, settings: &Settings, sink: &mut dyn FrameSink) -> Result<RunReport> {
        let mut simulator = self.simulator(settings);
        self.run_on(&mut simulator, settings, sink)
    }

    /// In-memory simulator with this scenario's world opened and its glyphs
    /// applied over `settings`
    pub fn simulator(&self, settings: &Settings) -> Simulator {
        let renderer = Renderer::new(
            self.alive.unwrap_or(settings.display.alive),
            self.dead.unwrap_or(settings.display.dead),
        );
        let mut simulator = Simulator::in_memory(settings.seeding.seed).with_renderer(renderer);
        simulator.open_world(
            self.world_id(),
            self.rows.unwrap_or(settings.world.rows),
            self.columns.unwrap_or(settings.world.columns),
            &settings.world.rule,
        );
        simulator
    }

    /// Run against an existing simulator, leaving its store populated
    pub fn run_on(
        &self,
        simulator: &mut Simulator,
        settings: &Settings,
        sink: &mut dyn FrameSink,
    ) -> Result<RunReport> {
        settings.validate()?;
        let id = self.world_id();

        match &self.board {
            Some(path) => {
                info!(
                    "Running scenario on world {}: board {}, {} iterations",
                    id,
                    path.display(),
                    self.iteration_count()
                );
                let board = load_board_from_file(path)?;
                simulator
                    .initialize_with_board(id, &board)
                    .context("Failed to initialize world")?;
            }
            None => {
                info!(
                    "Running scenario on world {}: {:?}, {} iterations",
                    id,
                    self.seed_config(),
                    self.iteration_count()
                );
                simulator
                    .initialize(
                        id,
                        self.seed_config(),
                        settings.seeding.origin_row,
                        settings.seeding.origin_col,
                    )
                    .context("Failed to initialize world")?;
            }
        }

        let last_generation = simulator
            .iterate(id, self.iteration_count())
            .context("Failed to iterate world")?;

        let (rows, columns) = simulator
            .world(id)
            .map(|w| (w.rows, w.columns))
            .ok_or(LifeError::UnknownWorld(id))?;
        let (from_vector, to_vector) = self.window(rows, columns);
        let (from_gen, to_gen) = self.generation_range();
        let refresh = Duration::from_secs_f64(settings.display.refresh_seconds);

        let mut report = RunReport {
            world: id,
            last_generation,
            frames_shown: 0,
            status: true,
            message: None,
        };

        match simulator.display_range(id, from_gen, to_gen, &from_vector, &to_vector, refresh, sink) {
            Ok(shown) => report.frames_shown = shown,
            Err(err) => match err.downcast_ref::<LifeError>() {
                Some(life_err @ (LifeError::RangeIncorrect { .. } | LifeError::Uninitialized(_))) => {
                    warn!("World {}: {}", id, life_err);
                    report.status = false;
                    report.message = Some(life_err.to_string());
                }
                _ => return Err(err.context("Failed to display world")),
            },
        }

        Ok(report)
    }
}
