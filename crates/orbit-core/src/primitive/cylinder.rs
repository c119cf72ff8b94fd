//! Cylinder generation (open-ended UV grid)

use std::f32::consts::PI;

use super::{PrimitiveData, push_grid_cell};

/// Generate an open cylinder centered on the origin along `z`.
pub fn generate_cylinder(
    radius: f32,
    height: f32,
    u_segments: u32,
    v_segments: u32,
) -> PrimitiveData {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for v in 0..=v_segments {
        let vv = v as f32 / v_segments as f32;
        let z = -height / 2.0 + vv * height;

        for u in 0..=u_segments {
            let theta = (u as f32 / u_segments as f32) * 2.0 * PI;
            positions.push([radius * theta.cos(), radius * theta.sin(), z]);
        }
    }

    for v in 0..v_segments {
        for u in 0..u_segments {
            push_grid_cell(&mut indices, u_segments, v, u);
        }
    }

    (positions, indices)
}
