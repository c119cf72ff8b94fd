//! Orbital kinematics: axis rotation and per-frame position evaluation

use std::collections::HashMap;

use glam::Vec3;
use uuid::Uuid;

use crate::model::Model;

/// Rotate `v` around `axis` by `angle` radians (Rodrigues' formula).
///
/// The axis is normalized internally; a zero axis leaves only the
/// cosine-scaled term.
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let k = axis.normalize_or_zero();
    let (sin, cos) = angle.sin_cos();
    v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}

/// Evaluate every model's world position at time `t` (seconds).
///
/// Models are ordered so each reads its orbit target's position for the
/// same frame, regardless of list order. Models caught in a target cycle
/// fall back to the previous frame's positions. Dangling and
/// self-referencing targets count as unset.
pub fn evaluate_positions(models: &mut [Model], t: f32) {
    let previous: HashMap<Uuid, Vec3> = models.iter().map(|m| (m.id, m.world_position)).collect();
    let index_of: HashMap<Uuid, usize> =
        models.iter().enumerate().map(|(i, m)| (m.id, i)).collect();

    let targets: Vec<Option<usize>> = models
        .iter()
        .enumerate()
        .map(|(i, m)| {
            m.orbit_target
                .and_then(|id| index_of.get(&id).copied())
                .filter(|&j| j != i)
        })
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); models.len()];
    let mut blocked = vec![false; models.len()];
    for (i, target) in targets.iter().enumerate() {
        if let Some(j) = *target {
            children[j].push(i);
            blocked[i] = true;
        }
    }

    let mut queue: Vec<usize> = (0..models.len()).filter(|&i| !blocked[i]).collect();
    let mut visited = vec![false; models.len()];

    let mut head = 0;
    while head < queue.len() {
        let i = queue[head];
        head += 1;
        visited[i] = true;

        let center = targets[i].map(|j| models[j].world_position);
        step(&mut models[i], center, t);

        for &child in &children[i] {
            queue.push(child);
        }
    }

    // Whatever was never reached sits in a cycle
    for i in 0..models.len() {
        if !visited[i] {
            let center = targets[i].and_then(|j| previous.get(&models[j].id).copied());
            step(&mut models[i], center, t);
        }
    }
}

/// Advance one model given its resolved orbit center.
///
/// Zero speed anchors the model at its local offset from the center (the
/// world origin when no target is set). Nonzero speed sweeps the local
/// offset around the orbit axis; an all-zero offset falls back to a unit
/// offset along x so the orbit has a visible radius.
fn step(model: &mut Model, target_position: Option<Vec3>, t: f32) {
    if model.orbit_speed == 0.0 {
        let center = target_position.unwrap_or(Vec3::ZERO);
        model.world_position = center + model.local_offset;
    } else {
        let center = target_position.unwrap_or(model.orbit_point);
        let mut offset = model.local_offset;
        if offset == Vec3::ZERO {
            offset.x = 1.0;
        }
        let angle = t * model.orbit_speed;
        model.world_position =
            center + rotate_about_axis(offset, model.orbit_axis.direction(), angle);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use approx::assert_abs_diff_eq;

    use crate::model::{ModelKind, OrbitAxis};
    use crate::scene::Scene;

    use super::*;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-4);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-4);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-4);
    }

    #[test]
    fn test_rotation_identity_at_zero_angle() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_vec3_eq(rotate_about_axis(v, Vec3::Z, 0.0), v);
        assert_vec3_eq(rotate_about_axis(v, Vec3::Z, 2.0 * PI), v);
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let rotated = rotate_about_axis(Vec3::X, Vec3::Z, PI / 2.0);
        assert_vec3_eq(rotated, Vec3::Y);
    }

    #[test]
    fn test_static_model_anchors_at_offset() {
        let mut scene = Scene::new();
        let id = scene.spawn(ModelKind::Sphere);
        scene.model_mut(id).unwrap().local_offset = Vec3::new(1.0, 2.0, 3.0);

        evaluate_positions(scene.models_mut(), 7.5);
        assert_vec3_eq(
            scene.model(id).unwrap().world_position,
            Vec3::new(1.0, 2.0, 3.0),
        );
    }

    #[test]
    fn test_orbit_around_point() {
        let mut scene = Scene::new();
        let id = scene.spawn(ModelKind::Cone);
        {
            let m = scene.model_mut(id).unwrap();
            m.orbit_point = Vec3::new(5.0, 0.0, 0.0);
            m.local_offset = Vec3::new(2.0, 0.0, 0.0);
            m.orbit_speed = 1.0;
        }

        evaluate_positions(scene.models_mut(), 0.0);
        assert_vec3_eq(
            scene.model(id).unwrap().world_position,
            Vec3::new(7.0, 0.0, 0.0),
        );

        evaluate_positions(scene.models_mut(), PI);
        assert_vec3_eq(
            scene.model(id).unwrap().world_position,
            Vec3::new(3.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_zero_offset_gets_unit_radius() {
        let mut scene = Scene::new();
        let id = scene.spawn(ModelKind::Cylinder);
        scene.model_mut(id).unwrap().orbit_speed = 2.0;

        evaluate_positions(scene.models_mut(), 0.0);
        assert_vec3_eq(scene.model(id).unwrap().world_position, Vec3::X);
    }

    #[test]
    fn orbit_respects_axis() {
        let mut scene = Scene::new();
        let id = scene.spawn(ModelKind::Sphere);
        {
            let m = scene.model_mut(id).unwrap();
            m.local_offset = Vec3::new(0.0, 1.0, 0.0);
            m.orbit_speed = 1.0;
            m.orbit_axis = OrbitAxis::X;
        }

        evaluate_positions(scene.models_mut(), PI / 2.0);
        assert_vec3_eq(scene.model(id).unwrap().world_position, Vec3::Z);
    }

    #[test]
    fn chain_evaluates_target_first() {
        // The moon is listed before the planet it orbits; it must still
        // read the planet's position for this frame, not last frame's.
        let mut scene = Scene::new();
        let moon = scene.spawn(ModelKind::Sphere);
        let planet = scene.spawn(ModelKind::Sphere);
        {
            let m = scene.model_mut(moon).unwrap();
            m.orbit_target = Some(planet);
            m.local_offset = Vec3::new(2.0, 0.0, 0.0);
            m.orbit_speed = 1.0;
        }
        {
            let p = scene.model_mut(planet).unwrap();
            p.orbit_point = Vec3::ZERO;
            p.local_offset = Vec3::new(10.0, 0.0, 0.0);
            p.orbit_speed = 1.0;
        }

        evaluate_positions(scene.models_mut(), PI);
        let planet_pos = scene.model(planet).unwrap().world_position;
        let moon_pos = scene.model(moon).unwrap().world_position;

        assert_vec3_eq(planet_pos, Vec3::new(-10.0, 0.0, 0.0));
        assert_vec3_eq(moon_pos, planet_pos + Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn test_static_model_follows_target() {
        let mut scene = Scene::new();
        let anchor = scene.spawn(ModelKind::Cuboid);
        let follower = scene.spawn(ModelKind::Sphere);
        scene.model_mut(anchor).unwrap().local_offset = Vec3::new(0.0, 4.0, 0.0);
        {
            let f = scene.model_mut(follower).unwrap();
            f.orbit_target = Some(anchor);
            f.local_offset = Vec3::new(1.0, 0.0, 0.0);
        }

        evaluate_positions(scene.models_mut(), 0.0);
        assert_vec3_eq(
            scene.model(follower).unwrap().world_position,
            Vec3::new(1.0, 4.0, 0.0),
        );
    }

    #[test]
    fn test_cycle_does_not_panic() {
        let mut scene = Scene::new();
        let a = scene.spawn(ModelKind::Sphere);
        let b = scene.spawn(ModelKind::Sphere);
        scene.model_mut(a).unwrap().orbit_target = Some(b);
        scene.model_mut(b).unwrap().orbit_target = Some(a);
        scene.model_mut(a).unwrap().local_offset = Vec3::X;
        scene.model_mut(b).unwrap().local_offset = Vec3::Y;

        evaluate_positions(scene.models_mut(), 0.0);
        evaluate_positions(scene.models_mut(), 1.0);

        // Cycle members read last frame's snapshot
        let a_pos = scene.model(a).unwrap().world_position;
        let b_pos = scene.model(b).unwrap().world_position;
        assert!(a_pos.is_finite());
        assert!(b_pos.is_finite());
    }

    #[test]
    fn test_dangling_target_treated_as_unset() {
        let mut scene = Scene::new();
        let id = scene.spawn(ModelKind::Sphere);
        {
            let m = scene.model_mut(id).unwrap();
            m.orbit_target = Some(Uuid::new_v4());
            m.local_offset = Vec3::new(3.0, 0.0, 0.0);
        }

        evaluate_positions(scene.models_mut(), 0.0);
        assert_vec3_eq(
            scene.model(id).unwrap().world_position,
            Vec3::new(3.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_self_target_ignored() {
        let mut scene = Scene::new();
        let id = scene.spawn(ModelKind::Sphere);
        {
            let m = scene.model_mut(id).unwrap();
            m.orbit_target = Some(id);
            m.local_offset = Vec3::new(0.0, 2.0, 0.0);
        }

        evaluate_positions(scene.models_mut(), 0.0);
        assert_vec3_eq(
            scene.model(id).unwrap().world_position,
            Vec3::new(0.0, 2.0, 0.0),
        );
    }
}
