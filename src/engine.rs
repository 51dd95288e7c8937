use crate::config::CanvasConfig;
use crate::create::drop_element;
use crate::doc::{Content, Element, ElementId, ElementKind, ElementRecord, ElementStore, PartialElement};
use crate::drag::MoveSession;
use crate::error::LayoutError;
use crate::geometry::{Geometry, Point};
use crate::hit::{Part, Target, hit_test};
use crate::input::InputState;
use crate::order::{RenderItem, render_items};
use crate::persist::{PersistenceSink, load_json};
use crate::render::Renderer;
use crate::resize::ResizeSession;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ElementCreated(Element),
    ElementUpdated { id: ElementId, fields: PartialElement },
    ElementDeleted { id: ElementId },
    SelectionChanged(Option<ElementId>),
    SetCursor(String),
    RenderNeeded,
}

/// The layout engine: element store, canvas, and the single interaction
/// session.
///
/// All methods run synchronously on the host's UI thread. Pointer handlers
/// take canvas-local points.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub store: ElementStore,
    pub input: InputState,
}

impl Engine {
    #[must_use]
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { store: ElementStore::new(canvas), input: InputState::Idle }
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasConfig {
        self.store.canvas()
    }

    // --- Persistence ---

    /// Seed the store from a persisted layout. Drops any active session.
    pub fn load(&mut self, elements: Vec<Element>) {
        self.input = InputState::Idle;
        self.store.load(elements);
    }

    /// Parse and load a persisted JSON layout.
    ///
    /// # Errors
    ///
    /// Returns the [`LayoutError`] from [`load_json`]; the store is left
    /// untouched on failure.
    pub fn load_json(&mut self, json: &str) -> Result<(), LayoutError> {
        let elements = load_json(json)?;
        self.load(elements);
        Ok(())
    }

    /// The full ordered element list in wire form.
    #[must_use]
    pub fn save(&self) -> Vec<ElementRecord> {
        self.store.save()
    }

    /// Hand the full ordered element list to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error.
    pub fn save_to<S: PersistenceSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.save(&self.store.save())
    }

    // --- Palette ---

    /// Create a `kind` element for a drop at `client`, where `origin` is the
    /// canvas's top-left in the same space.
    pub fn on_drop(&mut self, kind: ElementKind, client: Point, origin: Point) -> Vec<Action> {
        let id = drop_element(&mut self.store, kind, client, origin);
        let Some(el) = self.store.get(&id) else {
            return Vec::new();
        };
        vec![Action::ElementCreated(el.clone()), Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    // --- Pointer ---

    /// Start a move on a drag handle or a resize on a handle of the selected
    /// element. Anything else, or any pointer-down while a session is
    /// active, is ignored.
    pub fn on_pointer_down(&mut self, pt: Point, target: Target) -> Vec<Action> {
        if !self.input.is_idle() {
            tracing::debug!(?target, "pointer-down ignored; session already active");
            return Vec::new();
        }
        let Target::Element { id, part } = target else {
            return Vec::new();
        };
        let Some(el) = self.store.get(&id) else {
            return Vec::new();
        };

        match part {
            Part::DragHandle => {
                self.input = InputState::Moving(MoveSession::begin(el, pt));
                tracing::debug!(%id, x = pt.x, y = pt.y, "move started");
                let mut actions = self.select(Some(id));
                actions.push(Action::SetCursor(self.input.cursor().to_string()));
                actions.push(Action::RenderNeeded);
                actions
            }
            Part::ResizeHandle(handle) if self.store.selection() == Some(id) => {
                self.input = InputState::Resizing(ResizeSession::begin(el, handle, pt));
                tracing::debug!(%id, ?handle, x = pt.x, y = pt.y, "resize started");
                vec![Action::SetCursor(handle.cursor().to_string()), Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    /// Update the live preview of the active session.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let canvas = self.store.canvas();
        match &mut self.input {
            InputState::Idle => return Vec::new(),
            InputState::Moving(s) => s.track(pt),
            InputState::Resizing(s) => s.track(pt, &canvas),
        }
        tracing::trace!(x = pt.x, y = pt.y, "session tracked");
        vec![Action::RenderNeeded]
    }

    /// Commit the active session at `pt` and return to idle.
    ///
    /// There is no cancel path; release always commits.
    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        let canvas = self.store.canvas();
        let (id, fields) = match std::mem::take(&mut self.input) {
            InputState::Idle => return Vec::new(),
            InputState::Moving(mut s) => {
                s.track(pt);
                (s.id, s.commit(canvas.width))
            }
            InputState::Resizing(mut s) => {
                s.track(pt, &canvas);
                (s.id, s.commit())
            }
        };

        let mut actions = Vec::new();
        if self.store.update(&id, &fields) {
            tracing::debug!(%id, ?fields, "session committed");
            actions.push(Action::ElementUpdated { id, fields });
        }
        actions.push(Action::SetCursor(self.input.cursor().to_string()));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Apply the click selection policy.
    ///
    /// Empty canvas clears the selection and an element body selects it.
    /// Clicks on sub-controls and handles leave the selection alone.
    pub fn on_click(&mut self, target: Target) -> Vec<Action> {
        match target {
            Target::Canvas => self.select(None),
            Target::Element { id, part: Part::Body } => self.select(Some(id)),
            Target::Element { .. } => Vec::new(),
        }
    }

    /// Resolve a canvas-local point against the current paint order.
    #[must_use]
    pub fn target_at(&self, pt: Point) -> Target {
        hit_test(pt, &self.render_items())
    }

    // --- Edits ---

    /// Set or clear the selection. Unknown ids are ignored.
    pub fn select(&mut self, id: Option<ElementId>) -> Vec<Action> {
        let before = self.store.selection();
        if !self.store.select(id) || before == id {
            return Vec::new();
        }
        vec![Action::SelectionChanged(id), Action::RenderNeeded]
    }

    /// Remove an element. A session on it is dropped without committing.
    pub fn delete(&mut self, id: &ElementId) -> Vec<Action> {
        let was_selected = self.store.selection() == Some(*id);
        if self.store.delete(id).is_none() {
            return Vec::new();
        }
        if self.input.active().is_some_and(|(active, _)| active == *id) {
            self.input = InputState::Idle;
        }
        tracing::debug!(%id, "element deleted");
        let mut actions = vec![Action::ElementDeleted { id: *id }];
        if was_selected {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove the selected element, if any.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        match self.store.selection() {
            Some(id) => self.delete(&id),
            None => Vec::new(),
        }
    }

    /// Replace an element's content. Ignored when the content's type differs
    /// from the element's.
    pub fn set_content(&mut self, id: &ElementId, content: Content) -> Vec<Action> {
        let fields = PartialElement::content(content);
        if !self.store.update(id, &fields) {
            return Vec::new();
        }
        vec![Action::ElementUpdated { id: *id, fields }, Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.store.selection()
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.store.get(id)
    }

    /// Elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        self.store.list()
    }

    /// Geometry to draw for `id`: the live preview during its session,
    /// otherwise the stored geometry.
    #[must_use]
    pub fn preview(&self, id: &ElementId) -> Option<Geometry> {
        match self.input.active() {
            Some((active, live)) if active == *id => Some(live),
            _ => self.store.get(id).map(Element::geometry),
        }
    }

    /// Render items in paint order, with live geometry applied.
    #[must_use]
    pub fn render_items(&self) -> Vec<RenderItem<'_>> {
        render_items(&self.store, self.input.active())
    }

    /// Feed every element to `renderer`, bottom to top.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for item in self.render_items() {
            renderer.paint(&item);
        }
    }
}
