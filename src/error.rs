//! Error type shared by configuration parsing and the browser binding.

/// Error returned by [`crate::config::DragConfig::from_json`] and [`crate::dom::initialize`].
#[derive(Debug, thiserror::Error)]
pub enum DragError {
    /// The configuration JSON could not be parsed.
    #[error("invalid drag config: {0}")]
    Config(#[from] serde_json::Error),
    /// The marker class is empty or not a plain CSS class name.
    #[error("invalid marker class: {0:?}")]
    InvalidMarker(String),
    /// No global `window` (not running in a browser).
    #[error("no browser window available")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// A DOM call was rejected by the browser.
    #[error("dom call failed: {0}")]
    Dom(String),
}
