//! Model add/select/remove handlers

use uuid::Uuid;

use orbit_core::ModelKind;

use super::ActionContext;
use crate::state::AppAction;

/// Handle model-related actions
pub fn handle_model_action(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::AddModel(kind) => handle_add_model(kind, ctx),
        AppAction::SelectModel(id) => {
            ctx.app_state.lock().select_model(id);
        }
        AppAction::RemoveModel(id) => handle_remove_model(id, ctx),
        _ => {}
    }
}

fn handle_add_model(kind: ModelKind, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();
    let id = state.scene.spawn(kind);
    state.selected_model = Some(id);
    state.modified = true;
    tracing::info!("Added {}", kind.display_name());
    // The viewport picks up the new model on its next sync.
}

fn handle_remove_model(id: Uuid, ctx: &ActionContext) {
    {
        let mut state = ctx.app_state.lock();
        if !state.scene.remove_model(id) {
            tracing::warn!(%id, "Tried to remove unknown model");
            return;
        }
        if state.selected_model == Some(id) {
            state.selected_model = None;
        }
        state.modified = true;
    }

    if let Some(viewport_state) = ctx.viewport_state {
        viewport_state.lock().remove_model(id);
    }
}
