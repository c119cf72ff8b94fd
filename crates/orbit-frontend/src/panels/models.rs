//! Model list panel

use uuid::Uuid;

use orbit_core::OrbitAxis;

use super::{vector3_row, Panel};
use crate::state::{AppAction, SharedAppState};

/// Panel listing every model with its editable properties
pub struct ModelListPanel;

impl ModelListPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ModelListPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ModelListPanel {
    fn name(&self) -> &str {
        "Models"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut state = app_state.lock();

        if state.scene.is_empty() {
            ui.label("No models yet. Use the Add menu to create one.");
            return;
        }

        // Snapshot names up front; the orbit target combo needs them
        // while the model itself is borrowed mutably.
        let labels: Vec<(Uuid, String)> = state
            .scene
            .models()
            .iter()
            .map(|m| (m.id, m.name.clone()))
            .collect();
        let selected = state.selected_model;

        let mut changed = false;
        let mut to_select: Option<Uuid> = None;
        let mut to_remove: Option<Uuid> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for model in state.scene.models_mut() {
                let is_selected = selected == Some(model.id);
                let title = if is_selected {
                    format!("▶ {}", model.name)
                } else {
                    model.name.clone()
                };

                egui::CollapsingHeader::new(title)
                    .id_salt(model.id)
                    .default_open(is_selected)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Name");
                            changed |= ui.text_edit_singleline(&mut model.name).changed();
                        });

                        let mut offset = model.local_offset.to_array();
                        if vector3_row(ui, "Local offset", &mut offset, 0.05) {
                            model.local_offset = offset.into();
                            changed = true;
                        }

                        let mut scale = model.scale.to_array();
                        if vector3_row(ui, "Scale", &mut scale, 0.05) {
                            model.scale = scale.into();
                            changed = true;
                        }

                        ui.horizontal(|ui| {
                            ui.label("Color");
                            changed |= ui.color_edit_button_rgb(&mut model.color).changed();
                        });

                        ui.separator();

                        let mut orbit_point = model.orbit_point.to_array();
                        if vector3_row(ui, "Orbit point", &mut orbit_point, 0.05) {
                            model.orbit_point = orbit_point.into();
                            changed = true;
                        }

                        ui.horizontal(|ui| {
                            ui.label("Orbit target");
                            // Unbound orbits circle the fallback point.
                            let point_label = format!(
                                "point ({:.1}, {:.1}, {:.1})",
                                model.orbit_point.x, model.orbit_point.y, model.orbit_point.z
                            );
                            let current = model
                                .orbit_target
                                .and_then(|tid| {
                                    labels.iter().find(|(id, _)| *id == tid).map(|(_, n)| n.clone())
                                })
                                .unwrap_or_else(|| point_label.clone());

                            egui::ComboBox::from_id_salt(("orbit_target", model.id))
                                .selected_text(current)
                                .show_ui(ui, |ui| {
                                    if ui
                                        .selectable_label(model.orbit_target.is_none(), &point_label)
                                        .clicked()
                                    {
                                        model.orbit_target = None;
                                        changed = true;
                                    }
                                    for (id, name) in &labels {
                                        if *id == model.id {
                                            continue;
                                        }
                                        if ui
                                            .selectable_label(model.orbit_target == Some(*id), name)
                                            .clicked()
                                        {
                                            model.orbit_target = Some(*id);
                                            changed = true;
                                        }
                                    }
                                });
                        });

                        ui.horizontal(|ui| {
                            ui.label("Orbit axis");
                            egui::ComboBox::from_id_salt(("orbit_axis", model.id))
                                .selected_text(model.orbit_axis.label())
                                .show_ui(ui, |ui| {
                                    for &axis in OrbitAxis::all() {
                                        changed |= ui
                                            .selectable_value(
                                                &mut model.orbit_axis,
                                                axis,
                                                axis.label(),
                                            )
                                            .changed();
                                    }
                                });
                        });

                        ui.horizontal(|ui| {
                            ui.label("Orbit speed");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut model.orbit_speed)
                                        .speed(0.01)
                                        .suffix(" rad/s"),
                                )
                                .changed();
                        });

                        ui.separator();

                        ui.horizontal(|ui| {
                            if ui.button("Select").clicked() {
                                to_select = Some(model.id);
                            }
                            if ui.button("Remove").clicked() {
                                to_remove = Some(model.id);
                            }
                        });
                    });
            }
        });

        if changed {
            state.modified = true;
        }
        if let Some(id) = to_select {
            state.select_model(Some(id));
        }
        if let Some(id) = to_remove {
            state.queue_action(AppAction::RemoveModel(id));
        }
    }
}
