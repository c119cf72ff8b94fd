//! Screen-space model picking through cached model-view-projection matrices

use std::collections::HashMap;

use glam::{Mat4, Vec2, Vec3};
use uuid::Uuid;

use crate::constants::PICK_RADIUS;
use crate::model::Model;

/// Project a world position to pixel coordinates.
///
/// Returns `None` when the point sits at or behind the eye plane
/// (non-positive clip-space w), where the perspective divide is
/// meaningless.
pub fn world_to_screen(world: Vec3, mvp: Mat4, width: f32, height: f32) -> Option<Vec2> {
    let clip = mvp * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }

    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;

    Some(Vec2::new(
        (ndc_x * 0.5 + 0.5) * width,
        (-ndc_y * 0.5 + 0.5) * height,
    ))
}

/// Find the model whose projected position lies nearest to `pointer`,
/// within [`PICK_RADIUS`] pixels.
///
/// Each model is projected through its own cached matrix from the last
/// rendered frame; models without a cached matrix are skipped.
pub fn pick_model(
    models: &[Model],
    mvps: &HashMap<Uuid, Mat4>,
    pointer: Vec2,
    width: f32,
    height: f32,
) -> Option<Uuid> {
    let mut best = None;
    let mut best_distance = PICK_RADIUS;

    for model in models {
        let Some(&mvp) = mvps.get(&model.id) else {
            continue;
        };
        let Some(screen) = world_to_screen(model.world_position, mvp, width, height) else {
            continue;
        };

        let distance = screen.distance(pointer);
        if distance < best_distance {
            best_distance = distance;
            best = Some(model.id);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use crate::model::ModelKind;
    use crate::scene::Scene;

    use super::*;

    fn test_mvp(target: Vec3) -> Mat4 {
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(0.0, -10.0, 0.0), target, Vec3::Z);
        proj * view
    }

    #[test]
    fn test_centered_point_projects_to_center() {
        let screen = world_to_screen(Vec3::ZERO, test_mvp(Vec3::ZERO), 800.0, 600.0).unwrap();
        assert!((screen.x - 400.0).abs() < 1.0);
        assert!((screen.y - 300.0).abs() < 1.0);
    }

    #[test]
    fn test_point_behind_eye_is_rejected() {
        let behind = Vec3::new(0.0, -20.0, 0.0);
        assert!(world_to_screen(behind, test_mvp(Vec3::ZERO), 800.0, 600.0).is_none());
    }

    #[test]
    fn test_pick_nearest_within_radius() {
        let mut scene = Scene::new();
        let centered = scene.spawn(ModelKind::Sphere);
        let offside = scene.spawn(ModelKind::Cone);
        scene.model_mut(offside).unwrap().world_position = Vec3::new(5.0, 0.0, 0.0);

        let mvp = test_mvp(Vec3::ZERO);
        let mvps: HashMap<Uuid, Mat4> =
            scene.models().iter().map(|m| (m.id, mvp)).collect();

        let hit = pick_model(scene.models(), &mvps, Vec2::new(400.0, 300.0), 800.0, 600.0);
        assert_eq!(hit, Some(centered));

        let miss = pick_model(scene.models(), &mvps, Vec2::new(100.0, 100.0), 800.0, 600.0);
        assert_eq!(miss, None);
    }

    #[test]
    fn test_unrendered_models_are_skipped() {
        let mut scene = Scene::new();
        scene.spawn(ModelKind::Sphere);

        let mvps = HashMap::new();
        let hit = pick_model(scene.models(), &mvps, Vec2::new(400.0, 300.0), 800.0, 600.0);
        assert_eq!(hit, None);
    }
}
