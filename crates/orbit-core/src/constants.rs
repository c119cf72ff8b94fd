//! Default parameters for scene content

/// Default sphere radius
pub const SPHERE_RADIUS: f32 = 1.0;
/// Sphere segments around the equator
pub const SPHERE_U_SEGMENTS: u32 = 30;
/// Sphere segments from pole to pole
pub const SPHERE_V_SEGMENTS: u32 = 30;

/// Default cone base radius
pub const CONE_RADIUS: f32 = 1.0;
/// Default cone height
pub const CONE_HEIGHT: f32 = 2.0;
/// Cone segments around the axis
pub const CONE_U_SEGMENTS: u32 = 30;
/// Cone rings from base to apex
pub const CONE_V_SEGMENTS: u32 = 20;

/// Default cylinder radius
pub const CYLINDER_RADIUS: f32 = 1.0;
/// Default cylinder height
pub const CYLINDER_HEIGHT: f32 = 2.0;
/// Cylinder segments around the axis
pub const CYLINDER_U_SEGMENTS: u32 = 30;
/// Cylinder rings along the axis
pub const CYLINDER_V_SEGMENTS: u32 = 20;

/// Default cuboid edge length
pub const CUBOID_SIZE: f32 = 1.5;

/// Lower bound for the global light intensity
pub const LIGHT_MIN_INTENSITY: f32 = 0.0;
/// Upper bound for the global light intensity
pub const LIGHT_MAX_INTENSITY: f32 = 3.0;
/// Intensity assigned to a fresh light
pub const LIGHT_DEFAULT_INTENSITY: f32 = 1.0;

/// Screen-space distance (in pixels) within which a click hits a model
pub const PICK_RADIUS: f32 = 20.0;
