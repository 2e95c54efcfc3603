//! Browser binding: wires marked elements to [`DragCore`] and applies its actions.
//!
//! Press listeners live on the elements and are owned by the [`Attachment`].
//! Move and release listeners live on the document and are owned by a
//! per-session [`Subscription`], released exactly once when the drag ends.
//! Listener closures hold a `Weak` reference to the shared state so that
//! dropping the `Attachment` frees everything.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Once;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::config::DragConfig;
use crate::consts::{LEFT_PROPERTY, MOVE_EVENT, PRESS_EVENT, RELEASE_EVENT, TOP_PROPERTY};
use crate::engine::{Action, DragCore, ElementId, css_px};
use crate::error::DragError;
use crate::geometry::{Point, Rect, Viewport};

type MouseCallback = Closure<dyn FnMut(MouseEvent)>;

fn dom_error(value: &JsValue) -> DragError {
    DragError::Dom(format!("{value:?}"))
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn bounding_rect(element: &HtmlElement) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Document-level move and release listeners for one drag session.
pub struct Subscription {
    document: Document,
    on_move: MouseCallback,
    on_release: MouseCallback,
    active: Cell<bool>,
}

impl Subscription {
    fn listen(document: &Document, on_move: MouseCallback, on_release: MouseCallback) -> Result<Self, DragError> {
        document
            .add_event_listener_with_callback(MOVE_EVENT, on_move.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;
        let subscription = Self {
            document: document.clone(),
            on_move,
            on_release,
            active: Cell::new(true),
        };
        // On failure the returned value is dropped, which removes the move listener.
        document
            .add_event_listener_with_callback(RELEASE_EVENT, subscription.on_release.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;
        Ok(subscription)
    }

    /// Remove both listeners. Later calls do nothing.
    ///
    /// Safe to call from inside one of the subscription's own callbacks; the
    /// closures stay allocated until the subscription is dropped.
    pub fn release(&self) {
        if !self.active.replace(false) {
            return;
        }
        for (name, callback) in [(MOVE_EVENT, &self.on_move), (RELEASE_EVENT, &self.on_release)] {
            if let Err(err) = self
                .document
                .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {name} listener: {err:?}");
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// State shared between the attachment and every listener closure.
struct Shared {
    window: Window,
    document: Document,
    core: RefCell<DragCore>,
    elements: Vec<HtmlElement>,
    subscriptions: RefCell<Vec<Option<Subscription>>>,
}

impl Shared {
    fn viewport(&self) -> Viewport {
        let size = |value: Result<JsValue, JsValue>| match value {
            Ok(v) => v.as_f64().unwrap_or(0.0),
            Err(err) => {
                log::warn!("failed to read viewport size: {err:?}");
                0.0
            }
        };
        let scroll = |value: Result<f64, JsValue>| match value {
            Ok(v) => v,
            Err(err) => {
                log::warn!("failed to read scroll offset: {err:?}");
                0.0
            }
        };
        Viewport {
            width: size(self.window.inner_width()),
            height: size(self.window.inner_height()),
            scroll_x: scroll(self.window.scroll_x()),
            scroll_y: scroll(self.window.scroll_y()),
        }
    }

    fn handle_press(self: &Rc<Self>, id: ElementId, event: &MouseEvent) {
        let Some(element) = self.elements.get(id.index()) else {
            return;
        };
        let rect = bounding_rect(element);
        let viewport = self.viewport();
        let actions = self.core.borrow_mut().on_press(id, client_point(event), rect, &viewport);
        self.apply(actions);
    }

    fn handle_move(self: &Rc<Self>, id: ElementId, event: &MouseEvent) {
        let viewport = self.viewport();
        let actions = self.core.borrow_mut().on_move(id, client_point(event), &viewport);
        self.apply(actions);
    }

    fn handle_release(self: &Rc<Self>, id: ElementId) {
        let actions = self.core.borrow_mut().on_release(id);
        self.apply(actions);
    }

    fn apply(self: &Rc<Self>, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Subscribe(id) => self.subscribe(id),
                Action::Unsubscribe(id) => self.unsubscribe(id),
                Action::SetPosition { id, left, top } => self.set_position(id, left, top),
            }
        }
    }

    fn subscribe(self: &Rc<Self>, id: ElementId) {
        let weak = Rc::downgrade(self);
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            if let Some(shared) = weak.upgrade() {
                shared.handle_move(id, &event);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let weak = Rc::downgrade(self);
        let on_release = Closure::wrap(Box::new(move |_event: MouseEvent| {
            if let Some(shared) = weak.upgrade() {
                shared.handle_release(id);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        match Subscription::listen(&self.document, on_move, on_release) {
            Ok(subscription) => {
                if let Some(slot) = self.subscriptions.borrow_mut().get_mut(id.index()) {
                    *slot = Some(subscription);
                }
            }
            Err(err) => {
                log::warn!("element {}: {err}", id.index());
                // Without listeners the session could never end; drop it now.
                let actions = self.core.borrow_mut().on_release(id);
                self.apply(actions);
            }
        }
    }

    fn unsubscribe(&self, id: ElementId) {
        if let Some(Some(subscription)) = self.subscriptions.borrow().get(id.index()) {
            subscription.release();
        }
    }

    fn set_position(&self, id: ElementId, left: f64, top: f64) {
        let Some(element) = self.elements.get(id.index()) else {
            return;
        };
        let style = element.style();
        for (property, value) in [(LEFT_PROPERTY, left), (TOP_PROPERTY, top)] {
            if let Err(err) = style.set_property(property, &css_px(value)) {
                log::warn!("element {}: failed to set {property}: {err:?}", id.index());
            }
        }
    }
}

/// Drag behavior attached to the marked elements of a document.
///
/// Dropping it removes every listener it registered.
pub struct Attachment {
    shared: Rc<Shared>,
    press_listeners: Vec<MouseCallback>,
}

impl Attachment {
    /// Number of elements with drag behavior.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.elements.is_empty()
    }

    /// Whether the element at `index` (document order) is being dragged.
    #[must_use]
    pub fn is_dragging(&self, index: usize) -> bool {
        let core = self.shared.core.borrow();
        core.id_at(index).is_some_and(|id| core.is_dragging(id))
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        for (element, callback) in self.shared.elements.iter().zip(&self.press_listeners) {
            if let Err(err) = element.remove_event_listener_with_callback(PRESS_EVENT, callback.as_ref().unchecked_ref()) {
                log::warn!("failed to remove {PRESS_EVENT} listener: {err:?}");
            }
        }
        for subscription in self.shared.subscriptions.borrow().iter().flatten() {
            subscription.release();
        }
        log::debug!("detached from {} element(s)", self.shared.elements.len());
    }
}

/// Attach drag behavior to every element carrying the default marker class.
///
/// # Errors
///
/// See [`initialize_with`].
pub fn initialize() -> Result<Attachment, DragError> {
    initialize_with(DragConfig::default())
}

/// Attach drag behavior to every element carrying `config.marker_class`.
///
/// # Errors
///
/// Returns [`DragError::InvalidMarker`] for an unusable marker, [`DragError::NoWindow`] /
/// [`DragError::NoDocument`] outside a browser, and [`DragError::Dom`] when the
/// selector query or listener registration fails.
pub fn initialize_with(config: DragConfig) -> Result<Attachment, DragError> {
    config.validate()?;
    let window = web_sys::window().ok_or(DragError::NoWindow)?;
    let document = window.document().ok_or(DragError::NoDocument)?;

    let nodes = document
        .query_selector_all(&config.selector())
        .map_err(|e| dom_error(&e))?;

    let mut core = DragCore::new(config);
    let mut elements = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            log::debug!("skipping non-HTML node at index {index}");
            continue;
        };
        if core.register(&element.class_name()).is_some() {
            elements.push(element);
        }
    }

    let count = elements.len();
    let shared = Rc::new(Shared {
        window,
        document,
        core: RefCell::new(core),
        elements,
        subscriptions: RefCell::new((0..count).map(|_| None).collect()),
    });

    let mut attachment = Attachment { shared, press_listeners: Vec::with_capacity(count) };
    for index in 0..count {
        let Some(id) = attachment.shared.core.borrow().id_at(index) else {
            continue;
        };
        let weak: Weak<Shared> = Rc::downgrade(&attachment.shared);
        let on_press = Closure::wrap(Box::new(move |event: MouseEvent| {
            if let Some(shared) = weak.upgrade() {
                shared.handle_press(id, &event);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        attachment.shared.elements[index]
            .add_event_listener_with_callback(PRESS_EVENT, on_press.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;
        attachment.press_listeners.push(on_press);
    }

    log::debug!("attached drag behavior to {count} element(s)");
    Ok(attachment)
}

// --- JS surface ---

static LOGGER: Once = Once::new();

fn install_logger(level: log::Level) {
    LOGGER.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(level).is_err() {
            log::debug!("logger already installed");
        }
    });
}

/// Handle returned to JS. Calling `free()` detaches all drag behavior.
#[wasm_bindgen]
pub struct DragBinding {
    attachment: Attachment,
}

#[wasm_bindgen]
impl DragBinding {
    /// Number of elements with drag behavior.
    pub fn count(&self) -> usize {
        self.attachment.len()
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self, index: usize) -> bool {
        self.attachment.is_dragging(index)
    }
}

/// Entry point for the host page: `initDraggables()` or `initDraggables('{"marker_class":"card"}')`.
///
/// # Errors
///
/// Rejects with the [`DragError`] message when the config is invalid or the DOM is unavailable.
#[wasm_bindgen(js_name = initDraggables)]
pub fn init_draggables(config: Option<String>) -> Result<DragBinding, JsValue> {
    let config = match config {
        Some(raw) => DragConfig::from_json(&raw),
        None => Ok(DragConfig::default()),
    }
    .map_err(|err| JsValue::from_str(&err.to_string()))?;
    install_logger(config.log_level);
    let attachment = initialize_with(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(DragBinding { attachment })
}
