//! Cuboid generation

use super::PrimitiveData;

/// Generate an axis-aligned cube with edge length `size`, centered on the
/// origin. Eight shared corners, two triangles per face.
pub fn generate_cuboid(size: f32) -> PrimitiveData {
    let s = size / 2.0;

    let positions = vec![
        [-s, -s, -s],
        [s, -s, -s],
        [s, s, -s],
        [-s, s, -s],
        [-s, -s, s],
        [s, -s, s],
        [s, s, s],
        [-s, s, s],
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,  0, 2, 3, // bottom
        4, 5, 6,  4, 6, 7, // top
        0, 4, 7,  0, 7, 3, // -x
        1, 5, 6,  1, 6, 2, // +x
        3, 2, 6,  3, 6, 7, // +y
        0, 1, 5,  0, 5, 4, // -y
    ];

    (positions, indices)
}
