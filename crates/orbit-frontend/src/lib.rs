//! Orbit Editor Frontend
//!
//! egui-based application for editing scenes of orbiting primitives.

pub mod actions;
pub mod app;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::OrbitEditorApp;
pub use state::{AppAction, AppState, SharedAppState};
