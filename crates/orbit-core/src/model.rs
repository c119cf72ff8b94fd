//! Scene model: a placed primitive with orbit parameters

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The built-in primitive shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Sphere,
    Cone,
    Cylinder,
    Cuboid,
}

impl ModelKind {
    /// Lowercase identifier, used in generated names and in documents
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::Sphere => "sphere",
            ModelKind::Cone => "cone",
            ModelKind::Cylinder => "cylinder",
            ModelKind::Cuboid => "cuboid",
        }
    }

    /// Human-readable name for menus
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::Sphere => "Sphere",
            ModelKind::Cone => "Cone",
            ModelKind::Cylinder => "Cylinder",
            ModelKind::Cuboid => "Cuboid",
        }
    }

    /// All shape kinds, in menu order
    pub fn all() -> &'static [ModelKind] {
        &[
            ModelKind::Sphere,
            ModelKind::Cone,
            ModelKind::Cylinder,
            ModelKind::Cuboid,
        ]
    }
}

/// World axis a model orbits around
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitAxis {
    X,
    Y,
    #[default]
    Z,
}

impl OrbitAxis {
    /// Unit vector of the axis
    pub fn direction(&self) -> Vec3 {
        match self {
            OrbitAxis::X => Vec3::X,
            OrbitAxis::Y => Vec3::Y,
            OrbitAxis::Z => Vec3::Z,
        }
    }

    /// Axis letter for the UI
    pub fn label(&self) -> &'static str {
        match self {
            OrbitAxis::X => "X",
            OrbitAxis::Y => "Y",
            OrbitAxis::Z => "Z",
        }
    }

    /// All axes, in selector order
    pub fn all() -> &'static [OrbitAxis] {
        &[OrbitAxis::X, OrbitAxis::Y, OrbitAxis::Z]
    }
}

/// A placed primitive in the scene
#[derive(Debug, Clone)]
pub struct Model {
    /// Stable in-memory identity
    pub id: Uuid,
    /// Shape kind
    pub kind: ModelKind,
    /// Per-kind creation number, never reused within a scene
    pub sequence: u32,
    /// Editable display name
    pub name: String,
    /// Offset from the orbit center (or the absolute anchor when static)
    pub local_offset: Vec3,
    /// Evaluated world position; derived each frame from the orbit state
    pub world_position: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
    /// Base color (linear RGB)
    pub color: [f32; 3],
    /// Fallback orbit center when no target model is set
    pub orbit_point: Vec3,
    /// Model this one orbits, if any
    pub orbit_target: Option<Uuid>,
    /// World axis of the orbit rotation
    pub orbit_axis: OrbitAxis,
    /// Angular speed in radians per second; zero means static
    pub orbit_speed: f32,
}

impl Model {
    /// Create a model with default placement and the given color.
    ///
    /// The generated name follows the `"<kind> #<sequence>"` convention.
    pub fn new(kind: ModelKind, sequence: u32, color: [f32; 3]) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            sequence,
            name: format!("{} #{}", kind.label(), sequence),
            local_offset: Vec3::ZERO,
            world_position: Vec3::ZERO,
            scale: Vec3::ONE,
            color,
            orbit_point: Vec3::ZERO,
            orbit_target: None,
            orbit_axis: OrbitAxis::default(),
            orbit_speed: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name() {
        let model = Model::new(ModelKind::Cylinder, 3, [1.0, 0.0, 0.0]);
        assert_eq!(model.name, "cylinder #3");
        assert_eq!(model.orbit_axis, OrbitAxis::Z);
        assert_eq!(model.scale, Vec3::ONE);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ModelKind::Cuboid).unwrap();
        assert_eq!(json, "\"cuboid\"");
        let kind: ModelKind = serde_json::from_str("\"sphere\"").unwrap();
        assert_eq!(kind, ModelKind::Sphere);
    }

    #[test]
    fn test_axis_serializes_as_letter() {
        let json = serde_json::to_string(&OrbitAxis::Y).unwrap();
        assert_eq!(json, "\"Y\"");
    }
}
