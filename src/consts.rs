//! Shared constants for the drag crate.

// ── Selection ───────────────────────────────────────────────────

/// Class carried by every element that should be draggable.
pub const DEFAULT_MARKER_CLASS: &str = "movable-element";

// ── DOM event names ─────────────────────────────────────────────

/// Registered on each marked element.
pub const PRESS_EVENT: &str = "mousedown";

/// Registered on the document for the lifetime of a drag session.
pub const MOVE_EVENT: &str = "mousemove";

/// Registered on the document for the lifetime of a drag session.
pub const RELEASE_EVENT: &str = "mouseup";

// ── Style ───────────────────────────────────────────────────────

/// Inline style property receiving the horizontal position.
pub const LEFT_PROPERTY: &str = "left";

/// Inline style property receiving the vertical position.
pub const TOP_PROPERTY: &str = "top";
