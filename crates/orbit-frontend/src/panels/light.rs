//! Light panel

use orbit_core::constants::{LIGHT_MAX_INTENSITY, LIGHT_MIN_INTENSITY};

use super::{vector3_row, Panel};
use crate::state::SharedAppState;

/// Panel for editing the scene's point light
pub struct LightPanel;

impl LightPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LightPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for LightPanel {
    fn name(&self) -> &str {
        "Light"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut state = app_state.lock();
        let mut changed = false;

        let mut position = state.scene.light.position.to_array();
        if vector3_row(ui, "Position", &mut position, 0.05) {
            state.scene.light.position = position.into();
            changed = true;
        }

        let mut intensity = state.scene.light.intensity();
        ui.horizontal(|ui| {
            ui.label("Intensity");
            if ui
                .add(egui::Slider::new(
                    &mut intensity,
                    LIGHT_MIN_INTENSITY..=LIGHT_MAX_INTENSITY,
                ))
                .changed()
            {
                state.scene.light.set_intensity(intensity);
                changed = true;
            }
        });

        changed |= ui
            .checkbox(&mut state.scene.light.inside, "Light inside models")
            .changed();

        if changed {
            state.modified = true;
        }
    }
}
