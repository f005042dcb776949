//! Bounded Game of Life worlds
//!
//! This library seeds Life worlds from a pattern library, advances them under
//! a configurable survive/birth rule while retaining every generation, and
//! renders windows of any stored generation as text frames.

pub mod config;
pub mod driver;
pub mod error;
pub mod game_of_life;
pub mod utils;
pub mod world;

pub use config::Settings;
pub use driver::{RunReport, Scenario};
pub use error::LifeError;
pub use world::{Simulator, World, WorldId};

use anyhow::Result;
use world::FrameSink;

/// Main entry point for running a scenario with the given settings
pub fn run_scenario(scenario: &Scenario, settings: &Settings, sink: &mut dyn FrameSink) -> Result<RunReport> {
    scenario.run(settings, sink)
}
