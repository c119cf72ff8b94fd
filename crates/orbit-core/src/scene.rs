//! Scene container: models, light, and shared primitive meshes

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::constants::{
    CONE_HEIGHT, CONE_RADIUS, CONE_U_SEGMENTS, CONE_V_SEGMENTS, CUBOID_SIZE, CYLINDER_HEIGHT,
    CYLINDER_RADIUS, CYLINDER_U_SEGMENTS, CYLINDER_V_SEGMENTS, SPHERE_RADIUS, SPHERE_U_SEGMENTS,
    SPHERE_V_SEGMENTS,
};
use crate::light::Light;
use crate::mesh::Mesh;
use crate::model::{Model, ModelKind};
use crate::primitive::{generate_cone, generate_cuboid, generate_cylinder, generate_sphere};

/// Colors handed out to new models, cycled by creation order
const PALETTE: [[f32; 3]; 8] = [
    [0.85, 0.33, 0.31],
    [0.36, 0.68, 0.89],
    [0.48, 0.78, 0.46],
    [0.93, 0.76, 0.32],
    [0.68, 0.51, 0.84],
    [0.40, 0.80, 0.76],
    [0.89, 0.47, 0.70],
    [0.77, 0.72, 0.58],
];

/// The editable scene: an ordered list of models plus the point light.
///
/// Meshes are generated once per shape kind and shared by every model of
/// that kind; per-model size differences go through the scale transform.
pub struct Scene {
    models: Vec<Model>,
    /// The scene's point light
    pub light: Light,
    counters: HashMap<ModelKind, u32>,
    spawned_total: u32,
    meshes: HashMap<ModelKind, Arc<Mesh>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with the shared meshes prebuilt.
    pub fn new() -> Self {
        let meshes = ModelKind::all()
            .iter()
            .map(|&kind| (kind, Arc::new(build_mesh(kind))))
            .collect();

        Self {
            models: Vec::new(),
            light: Light::default(),
            counters: HashMap::new(),
            spawned_total: 0,
            meshes,
        }
    }

    /// Add a model of the given kind and return its id.
    ///
    /// Sequence numbers count up per kind and are never reused, even after
    /// deletions.
    pub fn spawn(&mut self, kind: ModelKind) -> Uuid {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;

        let color = PALETTE[self.spawned_total as usize % PALETTE.len()];
        self.spawned_total += 1;

        let model = Model::new(kind, *counter, color);
        let id = model.id;
        tracing::debug!("Spawned model: {}", model.name);
        self.models.push(model);
        id
    }

    /// Shared mesh for a shape kind
    pub fn mesh(&self, kind: ModelKind) -> Arc<Mesh> {
        Arc::clone(&self.meshes[&kind])
    }

    /// All models, in creation order
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Mutable access to the models (ordering and membership are fixed;
    /// use [`Scene::spawn`] and [`Scene::remove_model`] for those)
    pub fn models_mut(&mut self) -> &mut [Model] {
        &mut self.models
    }

    /// Look up a model by id
    pub fn model(&self, id: Uuid) -> Option<&Model> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Look up a model by id, mutably
    pub fn model_mut(&mut self, id: Uuid) -> Option<&mut Model> {
        self.models.iter_mut().find(|m| m.id == id)
    }

    /// Remove a model. Returns whether anything was removed.
    ///
    /// Orbit references to the removed model are left in place; the
    /// evaluator treats a dangling target as no target.
    pub fn remove_model(&mut self, id: Uuid) -> bool {
        let before = self.models.len();
        self.models.retain(|m| m.id != id);
        let removed = before != self.models.len();
        if removed {
            tracing::debug!("Removed model {}", id);
        }
        removed
    }

    /// Remove every model and reset the light and the per-kind counters.
    pub fn clear(&mut self) {
        self.models.clear();
        self.counters.clear();
        self.spawned_total = 0;
        self.light = Light::default();
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the scene has no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn build_mesh(kind: ModelKind) -> Mesh {
    let (positions, indices) = match kind {
        ModelKind::Sphere => generate_sphere(SPHERE_RADIUS, SPHERE_U_SEGMENTS, SPHERE_V_SEGMENTS),
        ModelKind::Cone => generate_cone(CONE_RADIUS, CONE_HEIGHT, CONE_U_SEGMENTS, CONE_V_SEGMENTS),
        ModelKind::Cylinder => generate_cylinder(
            CYLINDER_RADIUS,
            CYLINDER_HEIGHT,
            CYLINDER_U_SEGMENTS,
            CYLINDER_V_SEGMENTS,
        ),
        ModelKind::Cuboid => generate_cuboid(CUBOID_SIZE),
    };
    Mesh::new(positions, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_numbers_per_kind() {
        let mut scene = Scene::new();
        let a = scene.spawn(ModelKind::Sphere);
        let _ = scene.spawn(ModelKind::Cone);
        let b = scene.spawn(ModelKind::Sphere);

        assert_eq!(scene.model(a).unwrap().name, "sphere #1");
        assert_eq!(scene.model(b).unwrap().name, "sphere #2");
        assert_eq!(scene.models()[1].name, "cone #1");
    }

    #[test]
    fn test_sequence_not_reused_after_remove() {
        let mut scene = Scene::new();
        let a = scene.spawn(ModelKind::Cuboid);
        assert!(scene.remove_model(a));
        let b = scene.spawn(ModelKind::Cuboid);
        assert_eq!(scene.model(b).unwrap().sequence, 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut scene = Scene::new();
        scene.spawn(ModelKind::Sphere);
        assert!(!scene.remove_model(Uuid::new_v4()));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_clear_resets_counters() {
        let mut scene = Scene::new();
        scene.spawn(ModelKind::Cone);
        scene.light.set_intensity(2.0);
        scene.clear();

        assert!(scene.is_empty());
        assert_eq!(scene.light.intensity(), 1.0);
        let id = scene.spawn(ModelKind::Cone);
        assert_eq!(scene.model(id).unwrap().sequence, 1);
    }

    #[test]
    fn test_shared_meshes() {
        let mut scene = Scene::new();
        scene.spawn(ModelKind::Sphere);
        scene.spawn(ModelKind::Sphere);
        let a = scene.mesh(ModelKind::Sphere);
        let b = scene.mesh(ModelKind::Sphere);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_palette_is_deterministic() {
        let mut first = Scene::new();
        let mut second = Scene::new();
        let a = first.spawn(ModelKind::Sphere);
        let b = second.spawn(ModelKind::Cuboid);
        assert_eq!(first.model(a).unwrap().color, second.model(b).unwrap().color);
    }
}
