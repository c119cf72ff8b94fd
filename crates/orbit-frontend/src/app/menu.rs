//! Menu bar

use orbit_core::ModelKind;

use crate::state::{AppAction, SharedAppState};

/// Actions the menu asks the app to perform directly
pub enum MenuAction {
    /// Reset the dock layout to its default
    ResetLayout,
}

/// Render the menu bar, returning an app-level action if one was chosen
pub fn render_menu_bar(ctx: &egui::Context, app_state: &SharedAppState) -> Option<MenuAction> {
    let mut menu_action = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Scene").clicked() {
                    app_state.lock().queue_action(AppAction::NewScene);
                    ui.close_menu();
                }

                ui.separator();

                #[cfg(not(target_arch = "wasm32"))]
                {
                    if ui.button("Open Scene...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON scene", &["json"])
                            .pick_file()
                        {
                            app_state.lock().queue_action(AppAction::LoadScene(path));
                        }
                        ui.close_menu();
                    }

                    if ui.button("Save Scene").clicked() {
                        let known_path = app_state.lock().scene_path.is_some();
                        if known_path {
                            app_state.lock().queue_action(AppAction::SaveScene(None));
                        } else if let Some(path) = save_dialog() {
                            app_state
                                .lock()
                                .queue_action(AppAction::SaveScene(Some(path)));
                        }
                        ui.close_menu();
                    }

                    if ui.button("Save Scene As...").clicked() {
                        if let Some(path) = save_dialog() {
                            app_state
                                .lock()
                                .queue_action(AppAction::SaveScene(Some(path)));
                        }
                        ui.close_menu();
                    }

                    ui.separator();

                    if ui.button("Exit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                }

                #[cfg(target_arch = "wasm32")]
                {
                    if ui.button("Open Scene...").clicked() {
                        let app_state = app_state.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            if let Some(file) = rfd::AsyncFileDialog::new()
                                .add_filter("JSON scene", &["json"])
                                .pick_file()
                                .await
                            {
                                let name = file.file_name();
                                let data = file.read().await;
                                app_state
                                    .lock()
                                    .queue_action(AppAction::LoadSceneBytes { name, data });
                            }
                        });
                        ui.close_menu();
                    }

                    if ui.button("Save Scene...").clicked() {
                        let serialized = app_state.lock().scene.to_bytes();
                        match serialized {
                            Ok(data) => {
                                let app_state = app_state.clone();
                                wasm_bindgen_futures::spawn_local(async move {
                                    let Some(file) = rfd::AsyncFileDialog::new()
                                        .add_filter("JSON scene", &["json"])
                                        .set_file_name("scene.json")
                                        .save_file()
                                        .await
                                    else {
                                        return;
                                    };
                                    match file.write(&data).await {
                                        Ok(()) => app_state.lock().modified = false,
                                        Err(e) => {
                                            app_state.lock().last_error =
                                                Some(format!("Failed to save scene: {}", e));
                                        }
                                    }
                                });
                            }
                            Err(e) => {
                                app_state.lock().last_error =
                                    Some(format!("Failed to save scene: {}", e));
                            }
                        }
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Edit", |ui| {
                let selected = app_state.lock().selected_model;
                if ui
                    .add_enabled(selected.is_some(), egui::Button::new("Delete Selected"))
                    .clicked()
                {
                    if let Some(id) = selected {
                        app_state.lock().queue_action(AppAction::RemoveModel(id));
                    }
                    ui.close_menu();
                }
            });

            ui.menu_button("Add", |ui| {
                for &kind in ModelKind::all() {
                    if ui.button(kind.display_name()).clicked() {
                        app_state.lock().queue_action(AppAction::AddModel(kind));
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Layout").clicked() {
                    menu_action = Some(MenuAction::ResetLayout);
                    ui.close_menu();
                }
            });
        });
    });

    menu_action
}

#[cfg(not(target_arch = "wasm32"))]
fn save_dialog() -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .add_filter("JSON scene", &["json"])
        .set_file_name("scene.json")
        .save_file()
}
