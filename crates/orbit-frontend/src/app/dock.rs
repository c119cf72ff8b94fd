//! Dock layout and tab viewer

use egui_dock::{DockState, NodeIndex};

use crate::panels::{LightPanel, ModelListPanel, Panel, ViewportPanel};
use crate::state::{SharedAppState, SharedViewportState};

/// The panels that can live in dock tabs
pub enum PanelType {
    Viewport(ViewportPanel),
    Models(ModelListPanel),
    Light(LightPanel),
}

impl PanelType {
    fn name(&self) -> &str {
        match self {
            PanelType::Viewport(p) => p.name(),
            PanelType::Models(p) => p.name(),
            PanelType::Light(p) => p.name(),
        }
    }
}

/// Tab viewer that renders panel contents
pub struct OrbitTabViewer<'a> {
    pub app_state: SharedAppState,
    pub render_state: Option<egui_wgpu::RenderState>,
    pub viewport_state: &'a Option<SharedViewportState>,
}

impl egui_dock::TabViewer for OrbitTabViewer<'_> {
    type Tab = PanelType;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.name().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelType::Viewport(panel) => {
                if let (Some(render_state), Some(viewport_state)) =
                    (&self.render_state, self.viewport_state)
                {
                    panel.ui_with_render_context(ui, &self.app_state, render_state, viewport_state);
                } else {
                    panel.ui(ui, &self.app_state);
                }
            }
            PanelType::Models(panel) => panel.ui(ui, &self.app_state),
            PanelType::Light(panel) => panel.ui(ui, &self.app_state),
        }
    }
}

/// Create the default dock layout: viewport on the left, models and
/// light stacked on the right.
pub fn create_dock_layout() -> DockState<PanelType> {
    let mut dock_state = DockState::new(vec![PanelType::Viewport(ViewportPanel::new())]);

    let surface = dock_state.main_surface_mut();
    let [_viewport, right] = surface.split_right(
        NodeIndex::root(),
        0.75,
        vec![PanelType::Models(ModelListPanel::new())],
    );
    let [_models, _light] =
        surface.split_below(right, 0.5, vec![PanelType::Light(LightPanel::new())]);

    dock_state
}
