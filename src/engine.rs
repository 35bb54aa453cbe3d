#[cfg(feature = "web")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "web")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use std::fmt;

use tracing::{debug, info, trace, warn};

use crate::config::EditorConfig;
use crate::error::LayoutError;
use crate::hit;
use crate::input::{InputState, UiState, snap_to_grid};
use crate::scene::{Item, Scene};
use crate::storage::LayoutStore;
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Scene state changed; redraw.
    RenderNeeded,
    /// Show a message to the user.
    Notice(Notice),
}

/// User-visible outcome of an explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    GridSnapChanged(bool),
    LayoutSaved,
    LayoutLoaded,
    NothingToLoad,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridSnapChanged(true) => f.write_str("Grid snapping is now ON"),
            Self::GridSnapChanged(false) => f.write_str("Grid snapping is now OFF"),
            Self::LayoutSaved => f.write_str("Layout saved to storage!"),
            Self::LayoutLoaded => f.write_str("Layout loaded from storage!"),
            Self::NothingToLoad => f.write_str("No saved layout found!"),
        }
    }
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Handlers run to completion; there is no reentrancy and no background work.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub scene: Scene,
    pub viewport: Viewport,
    pub ui: UiState,
    pub input: InputState,
    pub config: EditorConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an empty scene sized by `config`.
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::new(config.canvas_width, config.canvas_height),
            ui: UiState::default(),
            input: InputState::default(),
            config,
        }
    }

    // --- User actions ---

    /// Add a default item of `kind` on top of the scene.
    pub fn add_item(&mut self, kind: &str) -> Vec<Action> {
        self.scene.add_item(kind);
        vec![Action::RenderNeeded]
    }

    /// Flip grid snapping and report the new setting.
    pub fn toggle_grid_snap(&mut self) -> Vec<Action> {
        self.ui.grid_snap = !self.ui.grid_snap;
        info!(grid_snap = self.ui.grid_snap, "grid snap toggled");
        vec![Action::Notice(Notice::GridSnapChanged(self.ui.grid_snap))]
    }

    /// Write the encoded scene to the configured storage slot.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backend rejects the write.
    pub fn save<S: LayoutStore + ?Sized>(&self, store: &mut S) -> Result<Vec<Action>, LayoutError> {
        let text = self.scene.serialize()?;
        store.set(&self.config.storage_key, &text)?;
        info!(key = %self.config.storage_key, items = self.scene.len(), "layout saved");
        Ok(vec![Action::Notice(Notice::LayoutSaved)])
    }

    /// Replace the scene with the layout in the configured storage slot.
    ///
    /// An empty slot is reported as a notice and leaves the scene untouched.
    ///
    /// # Errors
    ///
    /// Returns `MalformedData` or `Storage`; the scene is unchanged in both cases.
    pub fn load<S: LayoutStore + ?Sized>(&mut self, store: &S) -> Result<Vec<Action>, LayoutError> {
        match self.try_load(store) {
            Ok(()) => Ok(vec![Action::RenderNeeded, Action::Notice(Notice::LayoutLoaded)]),
            Err(LayoutError::NotFound { .. }) => Ok(vec![Action::Notice(Notice::NothingToLoad)]),
            Err(e) => Err(e),
        }
    }

    /// Like [`EngineCore::load`] but reports an empty slot as `NotFound`.
    ///
    /// A successful load ends any drag in progress, since the dragged index
    /// no longer refers to anything meaningful.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `MalformedData`, or `Storage`; the scene is
    /// unchanged in every error case.
    pub fn try_load<S: LayoutStore + ?Sized>(&mut self, store: &S) -> Result<(), LayoutError> {
        let key = &self.config.storage_key;
        let Some(text) = store.get(key)? else {
            info!(%key, "no saved layout");
            return Err(LayoutError::NotFound { key: key.clone() });
        };
        if let Err(e) = self.scene.replace_from(&text) {
            warn!(%key, error = %e, "saved layout rejected");
            return Err(e);
        }
        self.input = InputState::Idle;
        info!(%key, items = self.scene.len(), "layout loaded");
        Ok(())
    }

    /// Move the surface origin used to convert screen points.
    pub fn set_origin(&mut self, origin_x: f64, origin_y: f64) {
        self.viewport.set_origin(origin_x, origin_y);
    }

    // --- Input events ---

    /// Pick the frontmost item under the pointer, bring it to front, select it,
    /// and start dragging. Clicking empty space clears the selection. Points
    /// with a non-finite coordinate are ignored.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        if !screen_pt.is_finite() {
            trace!(x = screen_pt.x, y = screen_pt.y, "non-finite pointer-down ignored");
            return Vec::new();
        }
        let scene_pt = self.viewport.screen_to_scene(screen_pt);

        let grabbed = hit::hit_test(scene_pt, &self.scene).and_then(|i| {
            let origin = self.scene.get(i).map(Item::origin)?;
            let index = self.scene.reorder_to_front(i)?;
            Some((index, Point::new(scene_pt.x - origin.x, scene_pt.y - origin.y)))
        });

        self.scene.set_selected(grabbed.map(|(index, _)| index));
        self.input = match grabbed {
            Some((index, grab_offset)) => {
                debug!(index, offset_x = grab_offset.x, offset_y = grab_offset.y, "drag started");
                InputState::Dragging { index, grab_offset }
            }
            None => InputState::Idle,
        };

        vec![Action::RenderNeeded]
    }

    /// Move the dragged item so it stays under the pointer at its grab offset.
    /// A no-op when no drag is in progress or the new position is not finite.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Dragging { index, grab_offset } = self.input else {
            return Vec::new();
        };

        let scene_pt = self.viewport.screen_to_scene(screen_pt);
        let mut pos = Point::new(scene_pt.x - grab_offset.x, scene_pt.y - grab_offset.y);
        if self.ui.grid_snap {
            pos = snap_to_grid(pos, self.config.grid_size);
        }
        if !pos.is_finite() {
            trace!(index, x = pos.x, y = pos.y, "non-finite drag position ignored");
            return Vec::new();
        }

        if !self.scene.set_position(index, pos) {
            warn!(index, "drag target vanished; ending drag");
            self.input = InputState::Idle;
            return Vec::new();
        }
        trace!(index, x = pos.x, y = pos.y, "item dragged");
        vec![Action::RenderNeeded]
    }

    /// End any drag in progress. The item keeps whatever position the last
    /// pointer-move wrote.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if let InputState::Dragging { index, .. } = self.input {
            debug!(index, "drag ended");
        }
        self.input = InputState::Idle;
        Vec::new()
    }

    // --- Queries ---

    /// The scene, back to front.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Index of the selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.scene.selected_index()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[must_use]
    pub fn grid_snap(&self) -> bool {
        self.ui.grid_snap
    }

    /// Look up an item by scene index.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.scene.get(index)
    }
}

/// The full editor engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// Pointer positions are taken in client coordinates; the canvas origin is
/// re-read from its bounding rect on every pointer-down so layout shifts
/// between gestures are honored.
#[cfg(feature = "web")]
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

#[cfg(feature = "web")]
impl Engine {
    /// Create a new engine bound to the given canvas element, sized to it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let config = EditorConfig {
            canvas_width: f64::from(canvas.width()),
            canvas_height: f64::from(canvas.height()),
            ..EditorConfig::default()
        };
        Ok(Self { canvas, ctx, core: EngineCore::with_config(config) })
    }

    fn sync_origin(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.core.set_origin(rect.left(), rect.top());
    }

    // --- Delegated actions ---

    pub fn add_item(&mut self, kind: &str) -> Vec<Action> {
        self.core.add_item(kind)
    }

    pub fn toggle_grid_snap(&mut self) -> Vec<Action> {
        self.core.toggle_grid_snap()
    }

    /// # Errors
    ///
    /// See [`EngineCore::save`].
    pub fn save<S: LayoutStore + ?Sized>(&self, store: &mut S) -> Result<Vec<Action>, LayoutError> {
        self.core.save(store)
    }

    /// # Errors
    ///
    /// See [`EngineCore::load`].
    pub fn load<S: LayoutStore + ?Sized>(&mut self, store: &S) -> Result<Vec<Action>, LayoutError> {
        self.core.load(store)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        self.sync_origin();
        self.core.on_pointer_down(client_pt)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(client_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        crate::render::draw(&mut self.ctx, &self.core.scene, &self.core.viewport, self.core.config.grid_size)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.core.selection()
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.core.item(index)
    }
}
