//! Runtime configuration, supplied by the host page as JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MARKER_CLASS;
use crate::error::DragError;

/// What a press on an element that is already being dragged does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepressPolicy {
    /// End the current session and start a new one from the new press.
    #[default]
    Replace,
    /// Keep the current session; the press is dropped.
    Ignore,
}

/// Drag behavior settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Class that marks an element as draggable.
    pub marker_class: String,
    /// Handling of a second press during a drag.
    pub repress: RepressPolicy,
    /// Level for the browser console logger.
    pub log_level: log::Level,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            repress: RepressPolicy::default(),
            log_level: log::Level::Info,
        }
    }
}

impl DragConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::Config`] for malformed JSON and
    /// [`DragError::InvalidMarker`] when the marker is not usable as a class selector.
    pub fn from_json(raw: &str) -> Result<Self, DragError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the marker class can be used in a `.class` selector as-is.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::InvalidMarker`] when it cannot.
    pub fn validate(&self) -> Result<(), DragError> {
        let marker = self.marker_class.as_str();
        let mut chars = marker.chars();
        // A leading `-` must be followed by a letter, `_` or another `-`.
        let starts_ok = match (chars.next(), chars.next()) {
            (Some('-'), Some(second)) => second.is_ascii_alphabetic() || second == '_' || second == '-',
            (Some('-'), None) | (None, _) => false,
            (Some(first), _) => first.is_ascii_alphabetic() || first == '_',
        };
        let chars_ok = marker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if starts_ok && chars_ok {
            Ok(())
        } else {
            Err(DragError::InvalidMarker(self.marker_class.clone()))
        }
    }

    /// CSS selector matching every marked element.
    #[must_use]
    pub fn selector(&self) -> String {
        format!(".{}", self.marker_class)
    }

    /// Whether a `class` attribute value carries the marker.
    #[must_use]
    pub fn is_marked(&self, class_attr: &str) -> bool {
        class_attr
            .split_ascii_whitespace()
            .any(|class| class == self.marker_class)
    }
}
