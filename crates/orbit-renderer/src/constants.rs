//! Rendering constants

/// Viewport settings
pub mod viewport {
    /// Background clear color
    pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
        r: 0.1,
        g: 0.1,
        b: 0.1,
        a: 1.0,
    };
}

/// Orbit camera settings
pub mod camera {
    use std::f32::consts::FRAC_PI_4;

    /// Initial distance from the target
    pub const START_DISTANCE: f32 = 8.0;
    /// Initial azimuth angle (radians)
    pub const START_THETA: f32 = FRAC_PI_4;
    /// Initial polar angle from the +z axis (radians)
    pub const START_PHI: f32 = FRAC_PI_4;
    /// Closest allowed distance
    pub const MIN_ZOOM: f32 = 2.0;
    /// Farthest allowed distance
    pub const MAX_ZOOM: f32 = 72.0;
    /// Distance change per scroll unit
    pub const ZOOM_SPEED: f32 = 0.01;
    /// Radians per dragged pixel
    pub const ROTATE_SPEED: f32 = 0.005;
    /// Pan speed per pixel, scaled by the current distance
    pub const PAN_SPEED_FACTOR: f32 = 0.002;
    /// Keep-out margin around the poles (radians)
    pub const PHI_EPSILON: f32 = 0.01;
    /// Vertical field of view (radians)
    pub const FOV: f32 = FRAC_PI_4;
    /// Near clipping plane
    pub const NEAR: f32 = 0.1;
    /// Far clipping plane
    pub const FAR: f32 = 100.0;
}

/// World axis gizmo settings
pub mod axes {
    /// Length of each axis line, drawn from the origin
    pub const LENGTH: f32 = 25.0;
    /// +x axis color
    pub const X_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
    /// +y axis color
    pub const Y_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
    /// +z axis color
    pub const Z_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
}
