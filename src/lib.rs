//! # egui Research Map
//!
//! An egui widget library for interactive research maps: small node-link
//! graphs connecting topics, sources, claims, experts, and events, with
//! typed, weighted connections drawn between them.
//!
//! ## Features
//!
//! - **Single-Owner State** - One [`MapController`] owns graph, viewport, and
//!   interaction state per session
//! - **Explicit Interaction Machine** - Selection, connect mode, and panning
//!   are variants of one [`InteractionState`] enum
//! - **Pure Scene Building** - Each frame is a function of current state; no
//!   retained drawing state to invalidate
//! - **Typed Connections** - Supports, contradicts, relates, and cites kinds
//!   with per-kind colors and strength-scaled widths
//! - **JSON Snapshots** - The whole map serializes through `serde` for
//!   persistence and hand-off
//!
//! ## Quick Start
//!
//! ```ignore
//! use egui_research_map::{MapController, MapView, NodeKind, SeedRecord};
//!
//! struct App {
//!     ctrl: MapController,
//! }
//!
//! impl eframe::App for App {
//!     fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
//!         egui::CentralPanel::default().show(ctx, |ui| {
//!             MapView::new().show(ui, &mut self.ctrl);
//!         });
//!     }
//! }
//! ```
//!
//! ## Core Components
//!
//! - [`MapController`] - Session state owner and pointer state machine
//! - [`MapView`] - egui widget that routes input and paints the scene
//! - [`MapGraph`] - Node and connection store with cascade deletion
//! - [`Viewport`] - Clamped zoom and pan transform
//! - [`MapScene`] - Backend-independent description of one frame
//! - [`MapStyle`] - Radii, palette, and typography in one place
//!
//! ## Helpers
//!
//! - [`node_at_point`] - Topmost-node hit test in screen space
//! - [`seed_graph`] - Deterministic kind-banded seeding from plain records
//! - [`truncate_title`] - Character-budget label truncation

pub mod controller;
pub mod graph;
pub mod interaction;
pub mod scene;
pub mod seed;
pub mod style;
pub mod viewport;
pub mod widget;

// Re-export the public surface
pub use controller::MapController;
pub use graph::{
    Connection, ConnectionKind, MapGraph, Node, NodeKind, NodePatch, NodeSize,
};
pub use hit_test::{node_at_point, node_contains_point, screen_circle};
pub use interaction::InteractionState;
pub use scene::{truncate_title, ConnectionLabel, ConnectionShape, MapScene, NodeShape};
pub use seed::{band, seed_graph, seed_position, Band, SeedRecord};
pub use style::MapStyle;
pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use widget::MapView;
