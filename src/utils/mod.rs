//! Rendering and terminal output helpers

pub mod display;

pub use display::{validate_range, ColorOutput, Frame, Renderer, TerminalSink, Vector};
