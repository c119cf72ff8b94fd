//! The scene's single point light

use glam::Vec3;

use crate::constants::{LIGHT_DEFAULT_INTENSITY, LIGHT_MAX_INTENSITY, LIGHT_MIN_INTENSITY};

/// Point light with a clamped global intensity.
///
/// `inside` marks the light as sitting inside the models, which makes the
/// shader flip back-facing normals so interiors are lit.
#[derive(Debug, Clone)]
pub struct Light {
    /// World position
    pub position: Vec3,
    /// Whether the light sits inside the models
    pub inside: bool,
    intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            inside: false,
            intensity: LIGHT_DEFAULT_INTENSITY,
        }
    }
}

impl Light {
    /// Current intensity, always within the allowed range
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Set the intensity, clamping to the allowed range.
    /// Non-finite input falls back to zero.
    pub fn set_intensity(&mut self, intensity: f32) {
        let value = if intensity.is_finite() { intensity } else { 0.0 };
        self.intensity = value.clamp(LIGHT_MIN_INTENSITY, LIGHT_MAX_INTENSITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_clamped() {
        let mut light = Light::default();
        assert_eq!(light.intensity(), 1.0);

        light.set_intensity(5.0);
        assert_eq!(light.intensity(), LIGHT_MAX_INTENSITY);

        light.set_intensity(-1.0);
        assert_eq!(light.intensity(), LIGHT_MIN_INTENSITY);

        light.set_intensity(f32::NAN);
        assert_eq!(light.intensity(), 0.0);
    }
}
