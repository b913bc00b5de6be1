//! Level 6: Widget Input Routing Tests
//!
//! Runs the real [`MapView`] inside a headless egui context and scripts raw
//! pointer events through egui's input pipeline: clicks resolve against the
//! canvas rect, window coordinates translate into surface space, and the
//! scroll wheel drives the discrete zoom steps.

mod common;

use common::harness::{MapHarness, WidgetHarness};
use egui::{pos2, vec2, Vec2};
use egui_research_map::InteractionState;

#[test]
fn test_click_on_the_canvas_selects_the_node() {
    let mut harness = WidgetHarness::seeded();
    let t1 = harness.id_of("T1");

    harness.click(pos2(100.0, 100.0));

    assert_eq!(harness.ctrl.selected_node(), Some(t1.as_str()));
    assert_eq!(
        *harness.ctrl.state(),
        InteractionState::NodeSelected(t1.clone())
    );
}

#[test]
fn test_window_positions_translate_into_surface_coordinates() {
    let mut harness = WidgetHarness::at(MapHarness::seeded().ctrl, pos2(40.0, 25.0));
    let t1 = harness.id_of("T1");

    // T1 sits at surface (100, 100); the canvas corner sits at (40, 25).
    harness.click(pos2(140.0, 125.0));
    assert_eq!(harness.ctrl.selected_node(), Some(t1.as_str()));

    // The untranslated position lands on empty canvas and clears it.
    harness.click(pos2(100.0, 100.0));
    assert_eq!(harness.ctrl.selected_node(), None);
}

#[test]
fn test_held_drag_accumulates_pan_across_frames() {
    let mut harness = WidgetHarness::seeded();

    harness.mouse_down(pos2(400.0, 400.0));
    assert!(harness.ctrl.state().is_panning());

    harness.mouse_move(pos2(430.0, 415.0));
    harness.mouse_move(pos2(460.0, 430.0));
    harness.mouse_up(pos2(460.0, 430.0));

    assert_eq!(harness.ctrl.viewport().offset(), vec2(60.0, 30.0));
    assert_eq!(*harness.ctrl.state(), InteractionState::Idle);
}

#[test]
fn test_pan_keeps_tracking_after_the_pointer_leaves_the_canvas() {
    let mut harness = WidgetHarness::seeded();

    harness.mouse_down(pos2(600.0, 400.0));
    harness.mouse_move(pos2(700.0, 500.0));

    assert_eq!(
        harness.ctrl.viewport().offset(),
        vec2(100.0, 100.0),
        "motion must keep forwarding while the button is held"
    );

    harness.mouse_up(pos2(700.0, 500.0));
    assert_eq!(*harness.ctrl.state(), InteractionState::Idle);
}

#[test]
fn test_press_off_the_canvas_is_ignored() {
    let mut harness = WidgetHarness::seeded();

    harness.mouse_down(pos2(700.0, 500.0));
    assert_eq!(*harness.ctrl.state(), InteractionState::Idle);

    harness.mouse_up(pos2(700.0, 500.0));
    assert_eq!(harness.ctrl.viewport().offset(), Vec2::ZERO);
    assert_eq!(harness.ctrl.selected_node(), None);
}

#[test]
fn test_scroll_steps_zoom_while_hovering_the_canvas() {
    let mut harness = WidgetHarness::seeded();

    harness.scroll(pos2(320.0, 240.0), 40.0);
    assert!((harness.ctrl.viewport().zoom() - 1.1).abs() < 1e-5);

    harness.scroll(pos2(320.0, 240.0), -40.0);
    assert!((harness.ctrl.viewport().zoom() - 1.0).abs() < 1e-5);
}

#[test]
fn test_scroll_off_the_canvas_leaves_zoom_alone() {
    let mut harness = WidgetHarness::seeded();

    harness.scroll(pos2(700.0, 500.0), 40.0);
    assert_eq!(harness.ctrl.viewport().zoom(), 1.0);
}

#[test]
fn test_connect_gesture_through_the_widget() {
    let mut harness = WidgetHarness::seeded();
    let t1 = harness.id_of("T1");
    let s1 = harness.id_of("S1");

    harness.ctrl.toggle_connect_mode();
    harness.click(pos2(100.0, 100.0));
    harness.click(pos2(150.0, 250.0));

    let connections = harness.ctrl.graph().connections();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].source_id, t1);
    assert_eq!(connections[0].target_id, s1);
    assert!(!harness.ctrl.connect_mode());
}
