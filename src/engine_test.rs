#![allow(clippy::float_cmp)]

use super::*;
use crate::config::{DragConfig, RepressPolicy};

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn element_rect() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 50.0)
}

fn core_with_one() -> (DragCore, ElementId) {
    let mut core = DragCore::default();
    let id = core.register("movable-element").unwrap();
    (core, id)
}

fn core_with_policy(repress: RepressPolicy) -> (DragCore, ElementId) {
    let mut core = DragCore::new(DragConfig { repress, ..DragConfig::default() });
    let id = core.register("movable-element").unwrap();
    (core, id)
}

fn position(actions: &[Action]) -> Option<(f64, f64)> {
    actions.iter().find_map(|a| match a {
        Action::SetPosition { left, top, .. } => Some((*left, *top)),
        _ => None,
    })
}

// =============================================================
// Registration
// =============================================================

#[test]
fn new_core_is_empty() {
    let core = DragCore::default();
    assert!(core.is_empty());
    assert_eq!(core.len(), 0);
}

#[test]
fn register_marked_element_assigns_sequential_ids() {
    let mut core = DragCore::default();
    let a = core.register("movable-element").unwrap();
    let b = core.register("card movable-element").unwrap();
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(core.len(), 2);
}

#[test]
fn register_unmarked_element_is_rejected() {
    let mut core = DragCore::default();
    assert!(core.register("card").is_none());
    assert!(core.register("").is_none());
    assert!(core.is_empty());
}

#[test]
fn register_uses_configured_marker() {
    let mut core = DragCore::new(DragConfig { marker_class: "tile".into(), ..DragConfig::default() });
    assert!(core.register("movable-element").is_none());
    assert!(core.register("tile").is_some());
}

#[test]
fn registered_element_starts_idle() {
    let (core, id) = core_with_one();
    assert_eq!(core.state(id), Some(&DragState::Idle));
    assert!(!core.is_dragging(id));
}

#[test]
fn id_at_only_for_registered_indices() {
    let (core, id) = core_with_one();
    assert_eq!(core.id_at(0), Some(id));
    assert_eq!(core.id_at(1), None);
}

// =============================================================
// Press
// =============================================================

#[test]
fn press_subscribes_and_starts_dragging() {
    let (mut core, id) = core_with_one();
    let actions = core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    assert_eq!(actions, vec![Action::Subscribe(id)]);
    assert!(core.is_dragging(id));
}

#[test]
fn press_records_offset() {
    let (mut core, id) = core_with_one();
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    let session = core.state(id).and_then(DragState::session).unwrap();
    assert_eq!(session.offset, pt(10.0, 10.0));
}

#[test]
fn press_on_unknown_element_does_nothing() {
    let (mut core, _) = core_with_one();
    let other = ElementId(7);
    assert!(core.on_press(other, pt(1.0, 1.0), element_rect(), &viewport()).is_empty());
    assert_eq!(core.active().count(), 0);
}

#[test]
fn repress_with_replace_resubscribes_and_recomputes_offset() {
    let (mut core, id) = core_with_policy(RepressPolicy::Replace);
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    let moved = Rect::new(40.0, 30.0, 100.0, 50.0);
    let actions = core.on_press(id, pt(60.0, 35.0), moved, &viewport());
    assert_eq!(actions, vec![Action::Unsubscribe(id), Action::Subscribe(id)]);
    let session = core.state(id).and_then(DragState::session).unwrap();
    assert_eq!(session.offset, pt(20.0, 5.0));
}

#[test]
fn repress_with_ignore_keeps_first_session() {
    let (mut core, id) = core_with_policy(RepressPolicy::Ignore);
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    let actions = core.on_press(id, pt(60.0, 35.0), Rect::new(40.0, 30.0, 100.0, 50.0), &viewport());
    assert!(actions.is_empty());
    let session = core.state(id).and_then(DragState::session).unwrap();
    assert_eq!(session.offset, pt(10.0, 10.0));
}

// =============================================================
// Move
// =============================================================

#[test]
fn move_inside_viewport_preserves_offset() {
    let (mut core, id) = core_with_one();
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    let actions = core.on_move(id, pt(50.0, 40.0), &viewport());
    assert_eq!(actions, vec![Action::SetPosition { id, left: 40.0, top: 30.0 }]);
}

#[test]
fn move_past_far_edges_clamps_to_max() {
    let (mut core, id) = core_with_one();
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    let actions = core.on_move(id, pt(790.0, 590.0), &viewport());
    assert_eq!(position(&actions), Some((700.0, 550.0)));
}

#[test]
fn move_past_origin_clamps_to_zero() {
    let (mut core, id) = core_with_one();
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    let actions = core.on_move(id, pt(5.0, 3.0), &viewport());
    assert_eq!(position(&actions), Some((0.0, 0.0)));
}

#[test]
fn every_move_keeps_offset_until_release() {
    let (mut core, id) = core_with_one();
    core.on_press(id, pt(25.0, 15.0), Rect::new(5.0, 5.0, 100.0, 50.0), &viewport());
    for (x, y) in [(100.0, 100.0), (230.0, 140.0), (400.0, 300.0), (120.0, 60.0)] {
        let (left, top) = position(&core.on_move(id, pt(x, y), &viewport())).unwrap();
        assert_eq!(x - left, 20.0);
        assert_eq!(y - top, 10.0);
    }
}

#[test]
fn move_accounts_for_scroll() {
    let (mut core, id) = core_with_one();
    let scrolled = viewport().scrolled(0.0, 100.0);
    core.on_press(id, pt(10.0, 30.0), Rect::new(0.0, 20.0, 100.0, 50.0), &scrolled);
    let actions = core.on_move(id, pt(10.0, 40.0), &scrolled);
    assert_eq!(position(&actions), Some((0.0, 30.0)));
}

#[test]
fn move_with_oversized_element_pins_to_zero() {
    let (mut core, id) = core_with_one();
    let narrow = Viewport::new(80.0, 600.0);
    core.on_press(id, pt(10.0, 10.0), element_rect(), &narrow);
    let actions = core.on_move(id, pt(60.0, 40.0), &narrow);
    assert_eq!(position(&actions), Some((0.0, 30.0)));
}

#[test]
fn move_while_idle_does_nothing() {
    let (mut core, id) = core_with_one();
    assert!(core.on_move(id, pt(50.0, 40.0), &viewport()).is_empty());
}

// =============================================================
// Release
// =============================================================

#[test]
fn release_unsubscribes_and_returns_to_idle() {
    let (mut core, id) = core_with_one();
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    assert_eq!(core.on_release(id), vec![Action::Unsubscribe(id)]);
    assert!(!core.is_dragging(id));
}

#[test]
fn move_after_release_is_inert() {
    let (mut core, id) = core_with_one();
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    core.on_move(id, pt(50.0, 40.0), &viewport());
    core.on_release(id);
    assert!(core.on_move(id, pt(300.0, 300.0), &viewport()).is_empty());
    assert!(core.on_move(id, pt(0.0, 0.0), &viewport()).is_empty());
}

#[test]
fn release_while_idle_does_nothing() {
    let (mut core, id) = core_with_one();
    assert!(core.on_release(id).is_empty());
}

#[test]
fn release_twice_unsubscribes_once() {
    let (mut core, id) = core_with_one();
    core.on_press(id, pt(10.0, 10.0), element_rect(), &viewport());
    assert_eq!(core.on_release(id).len(), 1);
    assert!(core.on_release(id).is_empty());
}

// =============================================================
// Multiple elements
// =============================================================

#[test]
fn sessions_are_per_element() {
    let mut core = DragCore::default();
    let a = core.register("movable-element").unwrap();
    let b = core.register("movable-element").unwrap();
    core.on_press(a, pt(10.0, 10.0), element_rect(), &viewport());
    assert_eq!(core.active().collect::<Vec<_>>(), vec![a]);
    assert!(core.on_move(b, pt(50.0, 40.0), &viewport()).is_empty());
    assert_eq!(position(&core.on_move(a, pt(50.0, 40.0), &viewport())), Some((40.0, 30.0)));
}

// =============================================================
// css_px
// =============================================================

#[test]
fn css_px_whole_number_has_no_fraction() {
    assert_eq!(css_px(40.0), "40px");
    assert_eq!(css_px(0.0), "0px");
}

#[test]
fn css_px_keeps_fraction() {
    assert_eq!(css_px(12.5), "12.5px");
}
