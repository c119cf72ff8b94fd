//! UI panels

mod helpers;
mod light;
mod models;
mod viewport;

pub use light::LightPanel;
pub use models::ModelListPanel;
pub use viewport::ViewportPanel;

pub(crate) use helpers::vector3_row;

use crate::state::{SharedAppState, SharedViewportState};

/// Common interface for dockable panels
pub trait Panel {
    /// Tab title
    fn name(&self) -> &str;

    /// Render the panel contents
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState);

    /// Render with access to the wgpu render state. Panels that do not
    /// draw 3D content fall through to `ui`.
    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        _render_state: &egui_wgpu::RenderState,
        _viewport_state: &SharedViewportState,
    ) {
        self.ui(ui, app_state);
    }
}
