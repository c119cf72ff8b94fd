//! Render-ready mesh data derived from primitive grids

use glam::Vec3;

/// Mesh with smooth per-vertex normals and a wireframe edge list.
///
/// Built once per shape kind and shared between models of that kind.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Smooth per-vertex normals
    pub normals: Vec<[f32; 3]>,
    /// Triangle index list
    pub indices: Vec<u32>,
    /// Line-list indices outlining every triangle
    pub edges: Vec<u32>,
}

impl Mesh {
    /// Build a mesh from raw positions and triangle indices, deriving
    /// smooth normals and the edge list.
    pub fn new(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        let normals = compute_smooth_normals(&positions, &indices);
        let edges = compute_edge_indices(&indices);
        Self {
            positions,
            normals,
            indices,
            edges,
        }
    }
}

/// Accumulate each face normal into its three corners, then renormalize.
fn compute_smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let v0 = Vec3::from(positions[i0]);
        let v1 = Vec3::from(positions[i1]);
        let v2 = Vec3::from(positions[i2]);

        let face_normal = (v2 - v0).cross(v1 - v0).normalize_or_zero();
        normals[i0] += face_normal;
        normals[i1] += face_normal;
        normals[i2] += face_normal;
    }

    normals
        .into_iter()
        .map(|n| n.normalize_or_zero().to_array())
        .collect()
}

/// Emit the three edges of every triangle, without deduplication.
fn compute_edge_indices(indices: &[u32]) -> Vec<u32> {
    let mut edges = Vec::with_capacity(indices.len() * 2);
    for tri in indices.chunks_exact(3) {
        edges.extend_from_slice(&[tri[0], tri[1], tri[1], tri[2], tri[2], tri[0]]);
    }
    edges
}

#[cfg(test)]
mod tests {
    use crate::primitive::{generate_cuboid, generate_sphere};

    use super::*;

    #[test]
    fn test_normals_are_unit_length() {
        let (positions, indices) = generate_sphere(1.0, 12, 12);
        let mesh = Mesh::new(positions, indices);
        for n in &mesh.normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_normals_point_outward() {
        let (positions, indices) = generate_sphere(2.0, 16, 16);
        let mesh = Mesh::new(positions, indices);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            let radial = Vec3::from(*p).normalize();
            assert!(radial.dot(Vec3::from(*n)) > 0.5, "inward normal at {:?}", p);
        }
    }

    #[test]
    fn test_edge_list_outlines_triangles() {
        let (positions, indices) = generate_cuboid(1.0);
        let mesh = Mesh::new(positions, indices);
        assert_eq!(mesh.edges.len(), mesh.indices.len() * 2);
        assert_eq!(&mesh.edges[..6], &[0, 1, 1, 2, 2, 0]);
    }
}
