//! Orbital camera for the 3D viewport

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::constants::camera as constants;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix
    pub view_proj: [[f32; 4]; 4],
    /// View matrix
    pub view: [[f32; 4]; 4],
    /// Projection matrix
    pub proj: [[f32; 4]; 4],
    /// Eye position (w = 1)
    pub eye: [f32; 4],
}

/// Z-up orbital camera described by spherical coordinates around a target.
///
/// `theta` is the azimuth in the xy plane, `phi` the polar angle measured
/// from the +z axis, clamped just short of the poles so the view vector
/// never collapses onto the up vector.
pub struct OrbitCamera {
    /// Point the camera looks at
    pub target: Vec3,
    /// Distance from the target
    pub distance: f32,
    /// Azimuth angle (radians)
    pub theta: f32,
    /// Polar angle from +z (radians)
    pub phi: f32,
    /// Viewport aspect ratio
    pub aspect: f32,
}

impl OrbitCamera {
    /// Create a camera at the default orbit position
    pub fn new(aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: constants::START_DISTANCE,
            theta: constants::START_THETA,
            phi: constants::START_PHI,
            aspect,
        }
    }

    /// Return to the default orbit position
    pub fn reset(&mut self) {
        *self = Self::new(self.aspect);
    }

    /// Update the aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Eye position derived from the orbit parameters
    pub fn eye(&self) -> Vec3 {
        self.target
            + self.distance
                * Vec3::new(
                    self.phi.sin() * self.theta.cos(),
                    self.phi.sin() * self.theta.sin(),
                    self.phi.cos(),
                )
    }

    /// Orbit around the target by a pixel delta
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.theta += delta_x * constants::ROTATE_SPEED;
        self.phi = (self.phi - delta_y * constants::ROTATE_SPEED).clamp(
            constants::PHI_EPSILON,
            std::f32::consts::PI - constants::PHI_EPSILON,
        );
    }

    /// Pan the target in the view plane by a pixel delta
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let pan_speed = constants::PAN_SPEED_FACTOR * self.distance;

        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Z).normalize();
        let up = right.cross(forward);

        self.target -= right * (delta_x * pan_speed);
        self.target += up * (delta_y * pan_speed);
    }

    /// Zoom by a scroll delta, clamping the distance
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance + delta * constants::ZOOM_SPEED).clamp(constants::MIN_ZOOM, constants::MAX_ZOOM);
    }

    /// View matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Z)
    }

    /// Projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(constants::FOV, self.aspect, constants::NEAR, constants::FAR)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        let eye = self.eye();

        CameraUniform {
            view_proj: (proj * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_zoom_clamped() {
        let mut camera = OrbitCamera::new(1.0);
        camera.zoom(-100000.0);
        assert_eq!(camera.distance, constants::MIN_ZOOM);
        camera.zoom(100000.0);
        assert_eq!(camera.distance, constants::MAX_ZOOM);
    }

    #[test]
    fn test_phi_avoids_poles() {
        let mut camera = OrbitCamera::new(1.0);
        camera.orbit(0.0, 10000.0);
        assert_eq!(camera.phi, constants::PHI_EPSILON);
        camera.orbit(0.0, -10000.0);
        assert_eq!(camera.phi, std::f32::consts::PI - constants::PHI_EPSILON);
    }

    #[test]
    fn test_eye_distance() {
        let camera = OrbitCamera::new(1.6);
        assert_abs_diff_eq!(
            (camera.eye() - camera.target).length(),
            constants::START_DISTANCE,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_pan_moves_target_perpendicular_to_view() {
        let mut camera = OrbitCamera::new(1.0);
        let before = camera.eye() - camera.target;
        camera.pan(50.0, 0.0);
        let after = camera.eye() - camera.target;
        // Panning translates both eye and target; the offset is unchanged
        assert_abs_diff_eq!((before - after).length(), 0.0, epsilon = 1e-4);
        assert!(camera.target != Vec3::ZERO);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut camera = OrbitCamera::new(2.0);
        camera.orbit(30.0, -20.0);
        camera.zoom(500.0);
        camera.pan(10.0, 10.0);
        camera.reset();

        assert_eq!(camera.distance, constants::START_DISTANCE);
        assert_eq!(camera.theta, constants::START_THETA);
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.aspect, 2.0);
    }
}
