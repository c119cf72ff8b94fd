//! UV sphere generation

use std::f32::consts::PI;

use super::{PrimitiveData, push_grid_cell};

/// Generate a UV sphere centered on the origin.
///
/// Latitude sweeps from the south pole (`-PI/2`) to the north pole, with
/// `v_segments + 1` rings of `u_segments + 1` shared vertices each.
pub fn generate_sphere(radius: f32, u_segments: u32, v_segments: u32) -> PrimitiveData {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for v in 0..=v_segments {
        let phi = -PI / 2.0 + (v as f32 / v_segments as f32) * PI;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for u in 0..=u_segments {
            let theta = (u as f32 / u_segments as f32) * 2.0 * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();

            positions.push([
                radius * cos_theta * cos_phi,
                radius * sin_theta * cos_phi,
                radius * sin_phi,
            ]);
        }
    }

    for v in 0..v_segments {
        for u in 0..u_segments {
            push_grid_cell(&mut indices, u_segments, v, u);
        }
    }

    (positions, indices)
}
