use crate::config::{DragConfig, RepressPolicy};
use crate::geometry::{Point, Rect, Viewport};
use crate::input::{DragSession, DragState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Index of a registered element, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

impl ElementId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Actions returned from input handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start listening for document-level move and release events for this element.
    Subscribe(ElementId),
    /// Stop listening for document-level move and release events for this element.
    Unsubscribe(ElementId),
    /// Write the element's `left` / `top` style, in CSS pixels.
    SetPosition { id: ElementId, left: f64, top: f64 },
}

/// Format a coordinate as a CSS pixel length (`40` -> `"40px"`).
#[must_use]
pub fn css_px(value: f64) -> String {
    format!("{value}px")
}

/// Drag logic for every registered element, independent of the DOM.
///
/// Separated from the browser binding so it can be tested without WASM.
pub struct DragCore {
    config: DragConfig,
    elements: Vec<DragState>,
}

impl Default for DragCore {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl DragCore {
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self { config, elements: Vec::new() }
    }

    // --- Registration ---

    /// Register an element by its `class` attribute.
    ///
    /// Returns `None` and leaves the element untouched when it lacks the marker class.
    pub fn register(&mut self, class_attr: &str) -> Option<ElementId> {
        if !self.config.is_marked(class_attr) {
            log::debug!("skipping unmarked element (class={class_attr:?})");
            return None;
        }
        let id = ElementId(self.elements.len());
        self.elements.push(DragState::Idle);
        Some(id)
    }

    // --- Input events ---

    /// Pointer pressed on element `id` at `client` (viewport space).
    ///
    /// `rect` is the element's current bounding box, `viewport` the current window metrics.
    pub fn on_press(&mut self, id: ElementId, client: Point, rect: Rect, viewport: &Viewport) -> Vec<Action> {
        let repress = self.config.repress;
        let Some(state) = self.elements.get_mut(id.0) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if state.is_dragging() {
            match repress {
                RepressPolicy::Ignore => {
                    log::debug!("element {} already dragging, press ignored", id.0);
                    return actions;
                }
                RepressPolicy::Replace => {
                    log::debug!("element {} already dragging, replacing session", id.0);
                    actions.push(Action::Unsubscribe(id));
                }
            }
        }

        let pointer = viewport.to_document(client);
        let session = DragSession::begin(pointer, rect);
        log::debug!(
            "drag start on element {} (offset {}, {})",
            id.0,
            session.offset.x,
            session.offset.y
        );
        *state = DragState::Dragging(session);
        actions.push(Action::Subscribe(id));
        actions
    }

    /// Pointer moved to `client` while element `id` may be dragging.
    pub fn on_move(&mut self, id: ElementId, client: Point, viewport: &Viewport) -> Vec<Action> {
        let Some(DragState::Dragging(session)) = self.elements.get(id.0) else {
            return Vec::new();
        };
        let target = session.target(viewport.to_document(client), viewport);
        vec![Action::SetPosition { id, left: target.x, top: target.y }]
    }

    /// Pointer released; ends the session on element `id`.
    pub fn on_release(&mut self, id: ElementId) -> Vec<Action> {
        let Some(state) = self.elements.get_mut(id.0) else {
            return Vec::new();
        };
        if !state.is_dragging() {
            return Vec::new();
        }
        *state = DragState::Idle;
        log::debug!("drag end on element {}", id.0);
        vec![Action::Unsubscribe(id)]
    }

    // --- Queries ---

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up an element's state.
    #[must_use]
    pub fn state(&self, id: ElementId) -> Option<&DragState> {
        self.elements.get(id.0)
    }

    #[must_use]
    pub fn is_dragging(&self, id: ElementId) -> bool {
        self.state(id).is_some_and(DragState::is_dragging)
    }

    /// Elements with a session in progress.
    pub fn active(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_dragging())
            .map(|(index, _)| ElementId(index))
    }

    /// Id for the element at `index`, if registered.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<ElementId> {
        (index < self.elements.len()).then_some(ElementId(index))
    }
}
