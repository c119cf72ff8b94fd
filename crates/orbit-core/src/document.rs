//! The JSON scene document and scene save/load
//!
//! Field names are part of the on-disk format and stay camelCase; the
//! document structs exist solely to pin that format down, independent of
//! the in-memory types.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::LIGHT_DEFAULT_INTENSITY;
use crate::model::{ModelKind, OrbitAxis};
use crate::scene::Scene;

/// Errors from scene document I/O
#[derive(Debug, Clone, Error)]
pub enum SceneError {
    /// File read/write failure
    #[error("IO error: {0}")]
    Io(String),
    /// Malformed or invalid document
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct LightDoc {
    position: [f32; 3],
    #[serde(default)]
    inside: bool,
    #[serde(default = "default_intensity")]
    intensity: f32,
}

fn default_intensity() -> f32 {
    LIGHT_DEFAULT_INTENSITY
}

impl Default for LightDoc {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            inside: false,
            intensity: LIGHT_DEFAULT_INTENSITY,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ModelDoc {
    #[serde(rename = "type")]
    kind: ModelKind,
    name: String,
    #[serde(rename = "localPos")]
    local_pos: [f32; 3],
    pos: [f32; 3],
    scale: [f32; 3],
    color: [f32; 3],
    #[serde(rename = "orbitPoint")]
    orbit_point: [f32; 3],
    #[serde(rename = "orbitTargetCount", default)]
    orbit_target_count: Option<u32>,
    #[serde(rename = "orbitSpeed", default)]
    orbit_speed: f32,
    #[serde(rename = "orbitAxis", default)]
    orbit_axis: OrbitAxis,
}

/// On-disk scene document
#[derive(Debug, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    light: LightDoc,
    models: Vec<ModelDoc>,
}

impl SceneDocument {
    /// Snapshot a scene into document form.
    ///
    /// Orbit targets are recorded as the target's per-kind sequence
    /// number; a target that no longer exists serializes as null.
    pub fn from_scene(scene: &Scene) -> Self {
        let models = scene
            .models()
            .iter()
            .map(|m| ModelDoc {
                kind: m.kind,
                name: m.name.clone(),
                local_pos: m.local_offset.to_array(),
                pos: m.world_position.to_array(),
                scale: m.scale.to_array(),
                color: m.color,
                orbit_point: m.orbit_point.to_array(),
                orbit_target_count: m
                    .orbit_target
                    .and_then(|id| scene.model(id))
                    .map(|target| target.sequence),
                orbit_speed: m.orbit_speed,
                orbit_axis: m.orbit_axis,
            })
            .collect();

        Self {
            light: LightDoc {
                position: scene.light.position.to_array(),
                inside: scene.light.inside,
                intensity: scene.light.intensity(),
            },
            models,
        }
    }

    /// Build a fresh scene from the document.
    ///
    /// Models are respawned in list order, which renumbers sequences from
    /// one per kind; orbit links are then resolved against the new
    /// numbering. A recorded target with no match is dropped with a
    /// warning.
    pub fn into_scene(self) -> Scene {
        let mut scene = Scene::new();
        scene.light.position = Vec3::from(self.light.position);
        scene.light.inside = self.light.inside;
        scene.light.set_intensity(self.light.intensity);

        let mut spawned = Vec::with_capacity(self.models.len());
        for doc in &self.models {
            let id = scene.spawn(doc.kind);
            spawned.push(id);
            if let Some(model) = scene.model_mut(id) {
                model.name = doc.name.clone();
                model.local_offset = Vec3::from(doc.local_pos);
                model.world_position = Vec3::from(doc.pos);
                model.scale = Vec3::from(doc.scale);
                model.color = doc.color;
                model.orbit_point = Vec3::from(doc.orbit_point);
                model.orbit_speed = doc.orbit_speed;
                model.orbit_axis = doc.orbit_axis;
            }
        }

        for (i, doc) in self.models.iter().enumerate() {
            let Some(count) = doc.orbit_target_count else {
                continue;
            };
            let target = scene
                .models()
                .iter()
                .find(|m| m.id != spawned[i] && m.sequence == count)
                .map(|m| m.id);
            if target.is_none() {
                tracing::warn!("Orbit target #{} of '{}' not found, dropping", count, doc.name);
            }
            if let Some(model) = scene.model_mut(spawned[i]) {
                model.orbit_target = target;
            }
        }

        scene
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, SceneError> {
        serde_json::to_vec_pretty(self).map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Parse a document from JSON bytes
    pub fn from_json_bytes(data: &[u8]) -> Result<Self, SceneError> {
        serde_json::from_slice(data).map_err(|e| SceneError::Parse(e.to_string()))
    }
}

impl Scene {
    /// Serialize the scene to pretty-printed JSON
    pub fn to_bytes(&self) -> Result<Vec<u8>, SceneError> {
        SceneDocument::from_scene(self).to_json_bytes()
    }

    /// Build a scene from JSON bytes.
    ///
    /// The scene is only constructed after the document parses in full,
    /// so a malformed file never leaves a half-loaded scene behind.
    pub fn load_from_bytes(data: &[u8]) -> Result<Scene, SceneError> {
        Ok(SceneDocument::from_json_bytes(data)?.into_scene())
    }

    /// Write the scene to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SceneError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(|e| SceneError::Io(e.to_string()))?;
        tracing::info!("Saved scene to {:?}", path);
        Ok(())
    }

    /// Read a scene from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Scene, SceneError> {
        let data = std::fs::read(path).map_err(|e| SceneError::Io(e.to_string()))?;
        let scene = Scene::load_from_bytes(&data)?;
        tracing::info!("Loaded scene from {:?} ({} models)", path, scene.len());
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        let planet = scene.spawn(ModelKind::Sphere);
        let moon = scene.spawn(ModelKind::Sphere);
        let block = scene.spawn(ModelKind::Cuboid);

        {
            let p = scene.model_mut(planet).unwrap();
            p.local_offset = Vec3::new(4.0, 0.0, 0.0);
            p.color = [0.2, 0.4, 0.6];
        }
        {
            let m = scene.model_mut(moon).unwrap();
            m.orbit_target = Some(planet);
            m.orbit_speed = 1.5;
            m.local_offset = Vec3::new(1.0, 0.0, 0.0);
            m.orbit_axis = OrbitAxis::Y;
        }
        {
            let b = scene.model_mut(block).unwrap();
            b.name = "pedestal".to_string();
            b.scale = Vec3::new(1.0, 2.0, 0.5);
        }

        scene.light.position = Vec3::new(0.0, 0.0, 5.0);
        scene.light.set_intensity(2.0);
        scene.light.inside = true;
        scene
    }

    #[test]
    fn test_round_trip() {
        let scene = sample_scene();
        let bytes = scene.to_bytes().unwrap();
        let loaded = Scene::load_from_bytes(&bytes).unwrap();

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.light.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(loaded.light.intensity(), 2.0);
        assert!(loaded.light.inside);

        let planet = &loaded.models()[0];
        let moon = &loaded.models()[1];
        let block = &loaded.models()[2];

        assert_eq!(planet.color, [0.2, 0.4, 0.6]);
        assert_eq!(moon.orbit_target, Some(planet.id));
        assert_eq!(moon.orbit_axis, OrbitAxis::Y);
        assert_eq!(moon.orbit_speed, 1.5);
        assert_eq!(block.name, "pedestal");
        assert_eq!(block.scale, Vec3::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_wire_field_names() {
        let scene = sample_scene();
        let text = String::from_utf8(scene.to_bytes().unwrap()).unwrap();

        for field in [
            "\"light\"",
            "\"models\"",
            "\"type\"",
            "\"localPos\"",
            "\"pos\"",
            "\"orbitPoint\"",
            "\"orbitTargetCount\"",
            "\"orbitSpeed\"",
            "\"orbitAxis\"",
            "\"intensity\"",
            "\"inside\"",
        ] {
            assert!(text.contains(field), "missing field {}", field);
        }
        assert!(text.contains("\"sphere\""));
        // Pretty-printed output
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_null_models_rejected() {
        let err = Scene::load_from_bytes(br#"{"models": null}"#);
        assert!(matches!(err, Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(Scene::load_from_bytes(b"not json").is_err());
        assert!(Scene::load_from_bytes(br#"{"models": [{"type": "teapot"}]}"#).is_err());
    }

    #[test]
    fn test_missing_light_uses_defaults() {
        let scene = Scene::load_from_bytes(br#"{"models": []}"#).unwrap();
        assert_eq!(scene.light.position, Vec3::ZERO);
        assert_eq!(scene.light.intensity(), 1.0);
        assert!(!scene.light.inside);
    }

    #[test]
    fn test_dangling_target_dropped() {
        let mut scene = sample_scene();
        // Remove the planet after the moon recorded it
        let planet_id = scene.models()[0].id;
        let bytes = scene.to_bytes().unwrap();
        scene.remove_model(planet_id);

        // Re-export after removal writes null for the moon's target
        let text = String::from_utf8(scene.to_bytes().unwrap()).unwrap();
        assert!(text.contains("\"orbitTargetCount\": null"));

        // A document recording a sequence with no match loads link-free
        let mut doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        doc["models"][1]["orbitTargetCount"] = serde_json::json!(99);
        let loaded = Scene::load_from_bytes(&serde_json::to_vec(&doc).unwrap()).unwrap();
        assert_eq!(loaded.models()[1].orbit_target, None);
    }

    #[test]
    fn test_import_renumbers_sequences() {
        let mut scene = Scene::new();
        let a = scene.spawn(ModelKind::Sphere);
        let b = scene.spawn(ModelKind::Sphere);
        scene.remove_model(a);
        assert_eq!(scene.model(b).unwrap().sequence, 2);

        let bytes = scene.to_bytes().unwrap();
        let loaded = Scene::load_from_bytes(&bytes).unwrap();
        // Name survives, sequence restarts from one
        assert_eq!(loaded.models()[0].name, "sphere #2");
        assert_eq!(loaded.models()[0].sequence, 1);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");

        let scene = sample_scene();
        scene.save_to_file(&path).unwrap();
        let loaded = Scene::load_from_file(&path).unwrap();
        assert_eq!(loaded.len(), scene.len());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Scene::load_from_file(Path::new("/nonexistent/scene.json"));
        assert!(matches!(err, Err(SceneError::Io(_))));
    }
}
