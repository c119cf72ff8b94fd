//! File action handlers (native)

use std::path::PathBuf;

use orbit_core::Scene;

use super::{apply_loaded_scene, ActionContext};
use crate::state::AppAction;

/// Handle file-related actions
pub fn handle_file_action(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::SaveScene(path) => handle_save_scene(path, ctx),
        AppAction::LoadScene(path) => handle_load_scene(path, ctx),
        _ => {}
    }
}

fn handle_save_scene(path: Option<PathBuf>, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();

    let Some(path) = path.or_else(|| state.scene_path.clone()) else {
        state.last_error = Some("No file chosen for saving".to_string());
        return;
    };

    match state.scene.save_to_file(&path) {
        Ok(()) => {
            state.scene_path = Some(path);
            state.modified = false;
            state.last_error = None;
        }
        Err(e) => {
            tracing::error!("Failed to save scene: {}", e);
            state.last_error = Some(format!("Failed to save scene: {}", e));
        }
    }
}

fn handle_load_scene(path: PathBuf, ctx: &ActionContext) {
    match Scene::load_from_file(&path) {
        Ok(scene) => apply_loaded_scene(scene, Some(path), ctx),
        Err(e) => {
            tracing::error!("Failed to load scene from {}: {}", path.display(), e);
            ctx.app_state.lock().last_error = Some(format!("Failed to load scene: {}", e));
        }
    }
}
