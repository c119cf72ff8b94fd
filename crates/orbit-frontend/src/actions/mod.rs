//! Action handlers for app state mutations

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod file_wasm;
mod model;

#[cfg(not(target_arch = "wasm32"))]
pub use file::handle_file_action;
#[cfg(target_arch = "wasm32")]
pub use file_wasm::handle_file_action_wasm;
pub use model::handle_model_action;

use std::path::PathBuf;

use orbit_core::Scene;

use crate::state::{AppAction, SharedAppState, SharedViewportState};

/// Context passed to action handlers
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
    pub viewport_state: &'a Option<SharedViewportState>,
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::NewScene => handle_new_scene(ctx),

        #[cfg(not(target_arch = "wasm32"))]
        AppAction::SaveScene(_) | AppAction::LoadScene(_) => handle_file_action(action, ctx),
        #[cfg(target_arch = "wasm32")]
        AppAction::SaveScene(_) | AppAction::LoadScene(_) => {
            tracing::warn!("Path-based file actions are not supported on WASM");
        }

        #[cfg(target_arch = "wasm32")]
        AppAction::LoadSceneBytes { .. } => handle_file_action_wasm(action, ctx),
        #[cfg(not(target_arch = "wasm32"))]
        AppAction::LoadSceneBytes { .. } => {
            tracing::warn!("Byte-based scene loading is only used on WASM");
        }

        AppAction::AddModel(_) | AppAction::SelectModel(_) | AppAction::RemoveModel(_) => {
            handle_model_action(action, ctx);
        }
    }
}

fn handle_new_scene(ctx: &ActionContext) {
    if let Some(viewport_state) = ctx.viewport_state {
        let mut viewport = viewport_state.lock();
        viewport.clear_models();
        viewport.renderer.camera_mut().reset();
    }

    ctx.app_state.lock().new_scene();
    tracing::info!("Created new scene");
}

/// Install a freshly loaded scene. GPU resources for its models are
/// created on the next viewport sync.
pub(crate) fn apply_loaded_scene(scene: Scene, path: Option<PathBuf>, ctx: &ActionContext) {
    if let Some(viewport_state) = ctx.viewport_state {
        viewport_state.lock().clear_models();
    }

    let mut state = ctx.app_state.lock();
    state.load_scene(scene, path);
    tracing::info!(models = state.scene.len(), "Scene installed");
}
