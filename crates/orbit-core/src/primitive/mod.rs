//! Primitive mesh generation for the built-in shape kinds
//!
//! Generates shared-vertex positions and triangle indices for:
//! - Sphere (UV sphere)
//! - Cone (tapered UV grid, apex at the top)
//! - Cylinder (open-ended UV grid)
//! - Cuboid (eight corners, twelve triangles)

mod cone;
mod cuboid;
mod cylinder;
mod sphere;

pub use cone::generate_cone;
pub use cuboid::generate_cuboid;
pub use cylinder::generate_cylinder;
pub use sphere::generate_sphere;

/// Primitive data: vertex positions and triangle indices
pub type PrimitiveData = (Vec<[f32; 3]>, Vec<u32>);

/// Emit the two triangles covering one cell of a UV grid.
///
/// Rows hold `u_segments + 1` shared vertices; `v` and `u` address the
/// cell's lower-left corner.
pub(crate) fn push_grid_cell(indices: &mut Vec<u32>, u_segments: u32, v: u32, u: u32) {
    let i0 = v * (u_segments + 1) + u;
    let i1 = i0 + 1;
    let i2 = i0 + u_segments + 1;
    let i3 = i2 + 1;

    indices.extend_from_slice(&[i0, i2, i1]);
    indices.extend_from_slice(&[i1, i2, i3]);
}

#[cfg(test)]
mod tests {
    use crate::constants::*;

    use super::*;

    fn assert_valid(positions: &[[f32; 3]], indices: &[u32]) {
        assert!(!positions.is_empty());
        assert!(!indices.is_empty());
        assert_eq!(indices.len() % 3, 0);
        for &i in indices {
            assert!((i as usize) < positions.len(), "index {} out of range", i);
        }
    }

    #[test]
    fn test_sphere() {
        let (positions, indices) = generate_sphere(1.0, 30, 30);
        assert_valid(&positions, &indices);
        assert_eq!(positions.len(), 31 * 31);
        assert_eq!(indices.len(), (30 * 30 * 6) as usize);
        for p in &positions {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cone() {
        let (positions, indices) = generate_cone(1.0, 2.0, 30, 20);
        assert_valid(&positions, &indices);
        assert_eq!(positions.len(), 31 * 21);
        // Base ring sits at z = 0, apex ring at z = height
        let min_z = positions.iter().map(|p| p[2]).fold(f32::MAX, f32::min);
        let max_z = positions.iter().map(|p| p[2]).fold(f32::MIN, f32::max);
        assert!((min_z - 0.0).abs() < 1e-5);
        assert!((max_z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_cylinder() {
        let (positions, indices) = generate_cylinder(1.0, 2.0, 30, 20);
        assert_valid(&positions, &indices);
        // Centered on the origin along z
        let min_z = positions.iter().map(|p| p[2]).fold(f32::MAX, f32::min);
        let max_z = positions.iter().map(|p| p[2]).fold(f32::MIN, f32::max);
        assert!((min_z + 1.0).abs() < 1e-5);
        assert!((max_z - 1.0).abs() < 1e-5);
        // Every vertex lies on the lateral surface
        for p in &positions {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cuboid() {
        let (positions, indices) = generate_cuboid(1.5);
        assert_valid(&positions, &indices);
        assert_eq!(positions.len(), 8);
        assert_eq!(indices.len(), 36);
        for p in &positions {
            for c in p {
                assert!((c.abs() - 0.75).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_default_dimensions() {
        let (positions, _) = generate_sphere(SPHERE_RADIUS, SPHERE_U_SEGMENTS, SPHERE_V_SEGMENTS);
        let max = positions
            .iter()
            .map(|p| (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt())
            .fold(f32::MIN, f32::max);
        assert!((max - SPHERE_RADIUS).abs() < 1e-4);

        let (positions, _) = generate_cuboid(CUBOID_SIZE);
        let extent = positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max)
            - positions.iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        assert!((extent - CUBOID_SIZE).abs() < 1e-5);
    }
}
