//! Viewport transform between world and screen space.
//!
//! Nodes live in world coordinates; the pointer reports screen coordinates.
//! The mapping is `screen = world * zoom + offset`, with the offset applied
//! after scaling, so zoom changes pivot around the transform origin rather
//! than the pointer. Panning is the only way to recenter.

use egui::{pos2, Pos2, Vec2};

/// Lower zoom bound. Requests below it are clamped, not rejected.
pub const MIN_ZOOM: f32 = 0.5;
/// Upper zoom bound. Requests above it are clamped, not rejected.
pub const MAX_ZOOM: f32 = 2.0;
/// Zoom change applied by one discrete zoom action.
pub const ZOOM_STEP: f32 = 0.1;

/// Pan/zoom state for one editing session.
///
/// Presentation state only; it is not part of the graph and is discarded
/// with the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    zoom: f32,
    offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Set the zoom factor, clamped to [[`MIN_ZOOM`], [`MAX_ZOOM`]].
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// One discrete zoom-in action (+[`ZOOM_STEP`], clamped).
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// One discrete zoom-out action (-[`ZOOM_STEP`], clamped).
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Translate the view by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Map a world-space point to screen space.
    pub fn world_to_screen(&self, p: Pos2) -> Pos2 {
        pos2(p.x * self.zoom + self.offset.x, p.y * self.zoom + self.offset.y)
    }

    /// Map a screen-space point back to world space. Exact inverse of
    /// [`Viewport::world_to_screen`].
    pub fn screen_to_world(&self, p: Pos2) -> Pos2 {
        pos2((p.x - self.offset.x) / self.zoom, (p.y - self.offset.y) / self.zoom)
    }
}

// ============================================================================
// Tests
// ============================================================================
