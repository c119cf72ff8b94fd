//! wgpu renderer for the orbit editor viewport
//!
//! Three passes over one render target: shaded models, an optional
//! translucent wireframe overlay, and the world axis gizmo.

pub mod axis;
pub mod camera;
pub mod constants;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod vertex;
pub mod wireframe;

pub use camera::{CameraUniform, OrbitCamera};
pub use renderer::{LightUniform, Renderer};
