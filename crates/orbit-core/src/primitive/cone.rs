//! Cone generation (tapered UV grid)

use std::f32::consts::PI;

use super::{PrimitiveData, push_grid_cell};

/// Generate an open cone with its base on the `z = 0` plane and its apex
/// at `z = height`.
///
/// Each ring shrinks linearly toward the apex; the last ring collapses to
/// a single point repeated `u_segments + 1` times, which keeps the index
/// layout identical to the other grid primitives.
pub fn generate_cone(radius: f32, height: f32, u_segments: u32, v_segments: u32) -> PrimitiveData {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for v in 0..=v_segments {
        let vv = v as f32 / v_segments as f32;
        let ring_radius = radius * (1.0 - vv);
        let z = vv * height;

        for u in 0..=u_segments {
            let theta = (u as f32 / u_segments as f32) * 2.0 * PI;
            positions.push([ring_radius * theta.cos(), ring_radius * theta.sin(), z]);
        }
    }

    for v in 0..v_segments {
        for u in 0..u_segments {
            push_grid_cell(&mut indices, u_segments, v, u);
        }
    }

    (positions, indices)
}
