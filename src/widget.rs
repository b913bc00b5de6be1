//! egui widget wrapping a [`MapController`].
//!
//! [`MapView`] claims a region of the current layout, routes the frame's
//! pointer input into the controller in surface-local coordinates, and
//! paints the resulting scene. The controller stays outside the widget so
//! side panels can drive the same session between frames.
//!
//! # Example
//!
//! ```ignore
//! egui::CentralPanel::default().show(ctx, |ui| {
//!     MapView::new().show(ui, &mut self.ctrl);
//! });
//! ```

use egui::{Response, Sense, Ui, Vec2};

use crate::controller::MapController;

/// Immediate-mode canvas widget for a research map.
#[derive(Default)]
pub struct MapView {
    desired_size: Option<Vec2>,
}

impl MapView {
    /// A view that fills all remaining space in the layout.
    pub fn new() -> Self {
        Self { desired_size: None }
    }

    /// Request a fixed canvas size instead of filling the layout.
    pub fn with_size(size: Vec2) -> Self {
        Self {
            desired_size: Some(size),
        }
    }

    /// Route this frame's input into `ctrl` and paint its scene.
    ///
    /// Presses and scroll only register while the pointer hovers the
    /// canvas; motion and release are forwarded unconditionally so a pan
    /// that leaves the rect keeps tracking until the button comes up.
    pub fn show(self, ui: &mut Ui, ctrl: &mut MapController) -> Response {
        let size = self.desired_size.unwrap_or_else(|| ui.available_size());
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let origin = rect.min.to_vec2();

        let (hover, pressed, released, scroll) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.raw_scroll_delta.y,
            )
        });

        if let Some(pos) = hover {
            let local = pos - origin;
            ctrl.pointer_moved(local);
            if pressed && response.hovered() {
                ctrl.pointer_pressed(local);
            }
        }
        if released {
            ctrl.pointer_released();
        }
        if response.hovered() && scroll != 0.0 {
            if scroll > 0.0 {
                ctrl.zoom_in();
            } else {
                ctrl.zoom_out();
            }
        }

        let painter = ui.painter_at(rect);
        ctrl.scene().paint(&painter, origin, ctrl.style());

        response
    }
}
