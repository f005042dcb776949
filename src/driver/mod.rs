//! Structured scenario descriptors and their runner

pub mod scenario;

pub use scenario::{RunReport, Scenario};
