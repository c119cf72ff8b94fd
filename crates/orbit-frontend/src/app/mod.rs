//! Main application module

mod dock;
mod menu;

pub use dock::{create_dock_layout, OrbitTabViewer, PanelType};
pub use menu::{render_menu_bar, MenuAction};

use std::sync::Arc;

use egui_dock::{DockArea, DockState, Style};
use parking_lot::Mutex;

use crate::actions::{dispatch_action, ActionContext};
use crate::state::{create_shared_state, SharedAppState, SharedViewportState, ViewportState};

/// Main application
pub struct OrbitEditorApp {
    dock_state: DockState<PanelType>,
    app_state: SharedAppState,
    viewport_state: Option<SharedViewportState>,
}

impl OrbitEditorApp {
    /// Create a new app instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app_state = create_shared_state();

        let viewport_state = cc.wgpu_render_state.as_ref().map(|render_state| {
            Arc::new(Mutex::new(ViewportState::new(
                render_state.device.clone(),
                render_state.queue.clone(),
                render_state.target_format,
            ))) as SharedViewportState
        });

        if viewport_state.is_none() {
            tracing::warn!("No wgpu render state; 3D viewport disabled");
        }

        Self {
            dock_state: create_dock_layout(),
            app_state,
            viewport_state,
        }
    }

    /// Process pending actions queued by panels and menus
    fn process_actions(&mut self) {
        let actions = self.app_state.lock().take_pending_actions();
        if actions.is_empty() {
            return;
        }

        let ctx = ActionContext {
            app_state: &self.app_state,
            viewport_state: &self.viewport_state,
        };

        for action in actions {
            dispatch_action(action, &ctx);
        }
    }

    /// Banner for the most recent error, with a dismiss button
    fn show_error_banner(&self, ctx: &egui::Context) {
        let message = self.app_state.lock().last_error.clone();
        let Some(message) = message else {
            return;
        };

        egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::LIGHT_RED, &message);
                if ui.button("Dismiss").clicked() {
                    self.app_state.lock().last_error = None;
                }
            });
        });
    }
}

impl eframe::App for OrbitEditorApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.process_actions();

        if let Some(menu_action) = render_menu_bar(ctx, &self.app_state) {
            match menu_action {
                MenuAction::ResetLayout => {
                    self.dock_state = create_dock_layout();
                }
            }
        }

        self.show_error_banner(ctx);

        // Advance orbits and push the result to the GPU before any
        // panel draws this frame.
        let time = ctx.input(|i| i.time) as f32;
        {
            let mut state = self.app_state.lock();
            orbit_core::evaluate_positions(state.scene.models_mut(), time);
            if let Some(viewport_state) = &self.viewport_state {
                viewport_state.lock().sync_scene(&state.scene);
            }
        }

        let render_state = frame.wgpu_render_state().cloned();

        let mut tab_viewer = OrbitTabViewer {
            app_state: self.app_state.clone(),
            render_state,
            viewport_state: &self.viewport_state,
        };

        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut tab_viewer);

        // Orbits animate continuously.
        ctx.request_repaint();
    }
}
