//! File action handlers (WASM)
//!
//! On the web there is no filesystem; scenes arrive as bytes from the
//! browser's file picker.

use orbit_core::Scene;

use super::{apply_loaded_scene, ActionContext};
use crate::state::AppAction;

/// Handle file-related actions on WASM
pub fn handle_file_action_wasm(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::LoadSceneBytes { name, data } => handle_load_scene_bytes(&name, &data, ctx),
        _ => {}
    }
}

fn handle_load_scene_bytes(name: &str, data: &[u8], ctx: &ActionContext) {
    match Scene::load_from_bytes(data) {
        Ok(scene) => {
            tracing::info!("Loaded scene from {}", name);
            apply_loaded_scene(scene, None, ctx);
        }
        Err(e) => {
            tracing::error!("Failed to load scene from {}: {}", name, e);
            ctx.app_state.lock().last_error = Some(format!("Failed to load scene: {}", e));
        }
    }
}
