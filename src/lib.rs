//! Viewport-clamped mouse dragging for marked page elements.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Every element
//! carrying the marker class (`movable-element` by default) can be pressed and
//! dragged; while the button is held the element follows the pointer, keeping
//! the grab offset from the press, and stays fully inside the viewport. The host
//! page only calls `initDraggables()` and styles the elements with a positioning
//! mode that makes `left` / `top` meaningful.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::DragCore`] and the [`engine::Action`]s it emits |
//! | [`dom`] | Browser binding: listener ownership, style writes, JS entry point |
//! | [`input`] | Drag session and per-element state machine |
//! | [`geometry`] | Points, rectangles, viewport metrics and clamping |
//! | [`config`] | JSON-configurable settings |
//! | [`error`] | Crate error type |
//! | [`consts`] | Default marker, DOM event and style property names |

pub mod config;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
