//! 3D viewport panel

use uuid::Uuid;

use super::Panel;
use crate::state::{AppAction, SharedAppState, SharedViewportState};

/// Panel hosting the 3D scene view
pub struct ViewportPanel {
    /// Model under the most recent right-click, if any
    context_model: Option<Uuid>,
    /// Whether the active primary drag pans instead of orbiting
    panning: bool,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            context_model: None,
            panning: false,
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "Viewport"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _app_state: &SharedAppState) {
        ui.centered_and_justified(|ui| {
            ui.label("3D viewport unavailable (wgpu was not initialized)");
        });
    }

    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
    ) {
        {
            let mut viewport = viewport_state.lock();
            ui.horizontal(|ui| {
                ui.checkbox(&mut viewport.renderer.show_wireframe, "Wireframe");
                ui.checkbox(&mut viewport.renderer.show_axes, "Axes");
                ui.separator();
                if ui.button("Reset View").clicked() {
                    viewport.renderer.camera_mut().reset();
                }
            });
        }

        let available = ui.available_size();
        let width = available.x.max(1.0) as u32;
        let height = available.y.max(1.0) as u32;

        let texture_id = {
            let mut viewport = viewport_state.lock();
            let id = viewport.ensure_texture(width, height, &mut render_state.renderer.write());
            viewport.render();
            id
        };

        let response = ui.add(
            egui::Image::new(egui::load::SizedTexture::new(texture_id, available))
                .sense(egui::Sense::click_and_drag()),
        );

        // Camera controls: primary drag orbits, ctrl-drag pans, scroll
        // zooms. The pan modifier is latched at drag start.
        {
            let mut viewport = viewport_state.lock();

            if response.drag_started_by(egui::PointerButton::Primary) {
                self.panning = ui.input(|i| i.modifiers.ctrl || i.modifiers.command);
            }
            if response.dragged_by(egui::PointerButton::Primary) {
                let delta = response.drag_delta();
                if self.panning {
                    viewport.renderer.camera_mut().pan(delta.x, delta.y);
                } else {
                    viewport.renderer.camera_mut().orbit(delta.x, delta.y);
                }
            }
            if response.drag_stopped_by(egui::PointerButton::Primary) {
                self.panning = false;
            }

            if response.hovered() {
                let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                if scroll != 0.0 {
                    // Scrolling up brings the camera closer.
                    viewport.renderer.camera_mut().zoom(-scroll);
                }
            }
        }

        if response.secondary_clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let local = pointer - response.rect.min;
                let mvps = viewport_state.lock().renderer.model_mvps().clone();
                let state = app_state.lock();
                self.context_model = orbit_core::pick_model(
                    state.scene.models(),
                    &mvps,
                    glam::Vec2::new(local.x, local.y),
                    available.x,
                    available.y,
                );
            }
        }

        response.context_menu(|ui| match self.context_model {
            Some(id) => {
                let name = app_state.lock().scene.model(id).map(|m| m.name.clone());
                if let Some(name) = name {
                    ui.label(name);
                    ui.separator();
                    if ui.button("Select").clicked() {
                        app_state
                            .lock()
                            .queue_action(AppAction::SelectModel(Some(id)));
                        ui.close_menu();
                    }
                    if ui.button("Remove").clicked() {
                        app_state.lock().queue_action(AppAction::RemoveModel(id));
                        self.context_model = None;
                        ui.close_menu();
                    }
                } else {
                    ui.close_menu();
                }
            }
            None => {
                if ui.button("Reset View").clicked() {
                    viewport_state.lock().renderer.camera_mut().reset();
                    ui.close_menu();
                }
            }
        });
    }
}
