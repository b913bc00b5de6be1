//! Test harnesses for the research map.
//!
//! [`MapHarness`] drives a [`MapController`] directly, feeding surface-local
//! screen coordinates in the same order `MapView::show` would: motion first,
//! then press, then release. [`WidgetHarness`] goes one layer further out and
//! runs the real [`MapView`] inside a headless egui context, scripting raw
//! window events through egui's input pipeline.

#![allow(dead_code)]

use egui::{vec2, Pos2, Rect};
use egui_research_map::{screen_circle, MapController, MapView, NodeKind, SeedRecord};

/// Harness wrapping a controller plus interaction helpers.
pub struct MapHarness {
    pub ctrl: MapController,
}

impl MapHarness {
    /// Empty controller with the default style.
    pub fn new() -> Self {
        Self {
            ctrl: MapController::new(),
        }
    }

    /// Harness seeded with one topic and one source.
    ///
    /// With the default bands the topic lands at world (100, 100) and the
    /// source at world (150, 250).
    pub fn seeded() -> Self {
        Self::seeded_with(&[
            SeedRecord::new(NodeKind::Topic, "T1", "Primary topic", "item-t1"),
            SeedRecord::new(NodeKind::Source, "S1", "Primary source", "item-s1"),
        ])
    }

    /// Harness seeded with custom records.
    pub fn seeded_with(records: &[SeedRecord]) -> Self {
        let mut harness = Self::new();
        harness.ctrl.seed(records);
        harness
    }

    /// Id of the node carrying the given title. Panics if absent; fixtures
    /// use unique titles.
    pub fn id_of(&self, title: &str) -> String {
        self.ctrl
            .graph()
            .nodes()
            .iter()
            .find(|n| n.title == title)
            .map(|n| n.id.clone())
            .unwrap_or_else(|| panic!("no node titled {title:?}"))
    }

    /// Screen-space center of a node under the current viewport.
    pub fn node_center(&self, node_id: &str) -> Pos2 {
        let node = self
            .ctrl
            .graph()
            .node(node_id)
            .unwrap_or_else(|| panic!("no node with id {node_id:?}"));
        let (center, _) = screen_circle(node, self.ctrl.viewport(), self.ctrl.style());
        center
    }

    /// Screen-space center of the node carrying the given title.
    pub fn center_of(&self, title: &str) -> Pos2 {
        let id = self.id_of(title);
        self.node_center(&id)
    }

    // === Pointer event helpers ===

    /// Press the primary button at a surface-local position.
    pub fn press(&mut self, pos: Pos2) {
        self.ctrl.pointer_moved(pos);
        self.ctrl.pointer_pressed(pos);
    }

    /// Move the pointer to a surface-local position.
    pub fn move_to(&mut self, pos: Pos2) {
        self.ctrl.pointer_moved(pos);
    }

    /// Release the primary button.
    pub fn release(&mut self) {
        self.ctrl.pointer_released();
    }

    /// Complete click (press + release) at a position.
    pub fn click(&mut self, pos: Pos2) {
        self.press(pos);
        self.release();
    }

    /// Click the center of the node carrying the given title.
    pub fn click_node(&mut self, title: &str) {
        let center = self.center_of(title);
        self.click(center);
    }

    /// Complete drag from one position to another.
    pub fn drag(&mut self, from: Pos2, to: Pos2) {
        self.press(from);
        self.move_to(to);
        self.release();
    }

    /// Flip the connect-mode control.
    pub fn toggle_connect(&mut self) {
        self.ctrl.toggle_connect_mode();
    }
}

impl Default for MapHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Harness running the real [`MapView`] under a headless egui context.
///
/// Scripted events pass through egui's own input pipeline, so hover gating
/// and press/release resolution behave exactly as they would in a window.
/// The canvas is a fixed 640x480 points with its top-left corner at
/// `origin`, inside an 800x600 window.
///
/// egui hit-tests the pointer against the widget rects of the previous
/// frame, so the constructors run empty frames before any scripted
/// input. Two are needed: the first is the area's sizing pass, during
/// which widgets register as disabled and thus unhittable; only the
/// second registers the canvas enabled at its final rect.
pub struct WidgetHarness {
    pub ctx: egui::Context,
    pub ctrl: MapController,
    /// Window position of the canvas rect's top-left corner.
    pub origin: Pos2,
}

impl WidgetHarness {
    /// Harness with the canvas at the window origin, so window and
    /// surface-local coordinates coincide.
    pub fn new(ctrl: MapController) -> Self {
        Self::at(ctrl, Pos2::ZERO)
    }

    /// Harness with the canvas pinned at an arbitrary window position.
    pub fn at(ctrl: MapController, origin: Pos2) -> Self {
        let mut harness = Self {
            ctx: egui::Context::default(),
            ctrl,
            origin,
        };
        harness.frame(vec![]);
        harness.frame(vec![]);
        harness
    }

    /// Harness seeded with one topic and one source, canvas at the origin.
    ///
    /// With the default viewport the topic "T1" renders at window (100, 100)
    /// and the source "S1" at window (150, 250).
    pub fn seeded() -> Self {
        Self::new(MapHarness::seeded().ctrl)
    }

    /// Id of the node carrying the given title. Panics if absent; fixtures
    /// use unique titles.
    pub fn id_of(&self, title: &str) -> String {
        self.ctrl
            .graph()
            .nodes()
            .iter()
            .find(|n| n.title == title)
            .map(|n| n.id.clone())
            .unwrap_or_else(|| panic!("no node titled {title:?}"))
    }

    /// Run one frame, feeding the given events into the context.
    pub fn frame(&mut self, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let ctrl = &mut self.ctrl;
        let origin = self.origin;
        self.ctx.run(input, |ctx| {
            egui::Area::new(egui::Id::new("map_canvas"))
                .fixed_pos(origin)
                .show(ctx, |ui| {
                    MapView::with_size(vec2(640.0, 480.0)).show(ui, ctrl);
                });
        });
    }

    // === Window event helpers ===

    /// Press the primary button at a window position.
    pub fn mouse_down(&mut self, pos: Pos2) {
        self.frame(vec![
            egui::Event::PointerMoved(pos),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::default(),
            },
        ]);
    }

    /// Move the pointer to a window position, leaving button state as is.
    pub fn mouse_move(&mut self, pos: Pos2) {
        self.frame(vec![egui::Event::PointerMoved(pos)]);
    }

    /// Release the primary button at a window position.
    pub fn mouse_up(&mut self, pos: Pos2) {
        self.frame(vec![egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::default(),
        }]);
    }

    /// Complete click (down frame + up frame) at a window position.
    pub fn click(&mut self, pos: Pos2) {
        self.mouse_down(pos);
        self.mouse_up(pos);
    }

    /// Complete drag across three frames.
    pub fn drag(&mut self, from: Pos2, to: Pos2) {
        self.mouse_down(from);
        self.mouse_move(to);
        self.mouse_up(to);
    }

    /// Scroll by `delta_y` points with the pointer at a window position.
    pub fn scroll(&mut self, pos: Pos2, delta_y: f32) {
        self.frame(vec![
            egui::Event::PointerMoved(pos),
            egui::Event::MouseWheel {
                unit: egui::MouseWheelUnit::Point,
                delta: vec2(0.0, delta_y),
                modifiers: egui::Modifiers::default(),
            },
        ]);
    }
}
