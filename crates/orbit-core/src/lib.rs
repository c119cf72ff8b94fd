//! Core scene data for the orbit editor
//!
//! Primitive mesh generation, the model/light/scene data model, orbital
//! kinematics, screen-space picking, and the JSON scene document.

pub mod constants;
pub mod document;
pub mod light;
pub mod mesh;
pub mod model;
pub mod orbit;
pub mod picking;
pub mod primitive;
pub mod scene;

pub use document::{SceneDocument, SceneError};
pub use light::Light;
pub use mesh::Mesh;
pub use model::{Model, ModelKind, OrbitAxis};
pub use orbit::{evaluate_positions, rotate_about_axis};
pub use picking::{pick_model, world_to_screen};
pub use scene::Scene;
