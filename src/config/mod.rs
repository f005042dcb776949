//! Configuration management for world simulation

pub mod settings;

pub use settings::{CliOverrides, DisplayConfig, SeedingConfig, Settings, WorldConfig};
