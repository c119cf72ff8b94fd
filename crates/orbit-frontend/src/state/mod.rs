//! Application state module

mod viewport;

pub use viewport::{SharedViewportState, ViewportState};

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use orbit_core::{ModelKind, Scene};

/// Actions that can be performed on the app state
#[derive(Debug, Clone)]
pub enum AppAction {
    // File actions
    /// Reset to an empty scene
    NewScene,
    /// Save the scene; `None` reuses the current file path
    SaveScene(Option<PathBuf>),
    /// Load a scene file (path-based, native only)
    LoadScene(PathBuf),
    /// Load a scene from bytes (for WASM)
    LoadSceneBytes { name: String, data: Vec<u8> },

    // Model actions
    /// Add a model of the given kind
    AddModel(ModelKind),
    /// Select a model
    SelectModel(Option<Uuid>),
    /// Remove a model
    RemoveModel(Uuid),
}

/// Application state
pub struct AppState {
    /// The edited scene
    pub scene: Scene,
    /// Currently selected model
    pub selected_model: Option<Uuid>,
    /// Scene file path
    pub scene_path: Option<PathBuf>,
    /// Has unsaved changes
    pub modified: bool,
    /// Last error to surface in the UI, if any
    pub last_error: Option<String>,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scene: Scene::new(),
            selected_model: None,
            scene_path: None,
            modified: false,
            last_error: None,
            pending_actions: Vec::new(),
        }
    }
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a model
    pub fn select_model(&mut self, id: Option<Uuid>) {
        self.selected_model = id;
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Reset to an empty scene
    pub fn new_scene(&mut self) {
        self.scene = Scene::new();
        self.selected_model = None;
        self.scene_path = None;
        self.modified = false;
        self.last_error = None;
    }

    /// Replace the scene with a loaded one
    pub fn load_scene(&mut self, scene: Scene, path: Option<PathBuf>) {
        self.scene = scene;
        self.scene_path = path;
        self.selected_model = None;
        self.modified = false;
        self.last_error = None;
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_queue_drains() {
        let mut state = AppState::new();
        state.queue_action(AppAction::AddModel(ModelKind::Sphere));
        state.queue_action(AppAction::NewScene);

        let actions = state.take_pending_actions();
        assert_eq!(actions.len(), 2);
        assert!(state.take_pending_actions().is_empty());
    }

    #[test]
    fn test_new_scene_resets_everything() {
        let mut state = AppState::new();
        let id = state.scene.spawn(ModelKind::Cone);
        state.selected_model = Some(id);
        state.scene_path = Some(PathBuf::from("scene.json"));
        state.modified = true;
        state.last_error = Some("boom".to_string());

        state.new_scene();

        assert!(state.scene.is_empty());
        assert!(state.selected_model.is_none());
        assert!(state.scene_path.is_none());
        assert!(!state.modified);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_load_scene_clears_selection_but_keeps_models() {
        let mut state = AppState::new();
        let id = state.scene.spawn(ModelKind::Sphere);
        state.selected_model = Some(id);
        state.modified = true;

        let mut loaded = Scene::new();
        loaded.spawn(ModelKind::Cuboid);
        loaded.spawn(ModelKind::Cuboid);
        state.load_scene(loaded, Some(PathBuf::from("two_boxes.json")));

        assert_eq!(state.scene.len(), 2);
        assert!(state.selected_model.is_none());
        assert!(!state.modified);
        assert_eq!(
            state.scene_path.as_deref(),
            Some(std::path::Path::new("two_boxes.json"))
        );
    }
}
