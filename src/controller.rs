//! High-level controller for research-map sessions.
//!
//! [`MapController`] owns the full editing state (graph, viewport, and
//! interaction) and is the single writer for all of it. Pointer events and
//! commands go in, state transitions and store mutations come out, and
//! [`MapController::scene`] hands back the frame to paint. Construct one per
//! editing session and drop it when the session ends.
//!
//! # Example
//!
//! ```ignore
//! use egui_research_map::{MapController, NodeKind, SeedRecord};
//!
//! let mut ctrl = MapController::new();
//! ctrl.seed(&[
//!     SeedRecord::new(NodeKind::Topic, "Ocean warming", "", "topic-1"),
//!     SeedRecord::new(NodeKind::Source, "IPCC AR6", "", "source-9"),
//! ]);
//!
//! // Wire pointer events from your surface:
//! ctrl.pointer_pressed(egui::pos2(100.0, 100.0)); // selects the topic
//! ctrl.toggle_connect_mode();
//!
//! // After every mutation the snapshot is ready for persistence:
//! let json = ctrl.graph().to_json()?;
//! # anyhow::Ok(())
//! ```

use egui::Pos2;
use log::debug;

use crate::graph::{Connection, MapGraph};
use crate::hit_test;
use crate::interaction::InteractionState;
use crate::scene::MapScene;
use crate::seed::{seed_graph, SeedRecord};
use crate::style::MapStyle;
use crate::viewport::Viewport;

/// Owns `{graph, viewport, interaction}` for one editing session and applies
/// every transition of the pointer state machine.
///
/// All transitions are total: any pointer event or command is accepted in
/// any state, and commands referencing ids that are no longer present fall
/// through as silent no-ops.
pub struct MapController {
    graph: MapGraph,
    viewport: Viewport,
    state: InteractionState,
    /// Connect mode is armed but may not have an anchor yet; the anchor
    /// itself lives in [`InteractionState::ConnectingAwaitingTarget`].
    connect_armed: bool,
    /// Last observed pointer position, in screen space. Feeds the
    /// connect-mode preview line.
    pointer: Pos2,
    style: MapStyle,
}

impl Default for MapController {
    fn default() -> Self {
        Self::new()
    }
}

impl MapController {
    /// Create a controller with the default style and an empty graph.
    pub fn new() -> Self {
        Self::with_style(MapStyle::default())
    }

    pub fn with_style(style: MapStyle) -> Self {
        Self {
            graph: MapGraph::new(),
            viewport: Viewport::new(),
            state: InteractionState::Idle,
            connect_armed: false,
            pointer: Pos2::ZERO,
            style,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn graph(&self) -> &MapGraph {
        &self.graph
    }

    /// Direct store access for caller-driven mutations (patching a node from
    /// a properties panel, seeding connections). Keep such mutations on the
    /// same thread as the pointer events.
    pub fn graph_mut(&mut self) -> &mut MapGraph {
        &mut self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// True while connect mode is armed, with or without an anchor.
    pub fn connect_mode(&self) -> bool {
        self.connect_armed
    }

    pub fn selected_node(&self) -> Option<&str> {
        self.state.selected_node()
    }

    pub fn anchor_node(&self) -> Option<&str> {
        self.state.anchor_node()
    }

    pub fn pointer_pos(&self) -> Pos2 {
        self.pointer
    }

    // ========================================================================
    // Session Setup
    // ========================================================================

    /// Seed the graph from external records; see [`crate::seed`].
    pub fn seed(&mut self, records: &[SeedRecord]) {
        seed_graph(&mut self.graph, records, &self.style);
        debug!("seeded {} record(s)", records.len());
    }

    // ========================================================================
    // Pointer Events
    // ========================================================================

    /// Pointer-down on the canvas, in surface-local screen coordinates.
    pub fn pointer_pressed(&mut self, screen: Pos2) {
        self.pointer = screen;
        let hit = hit_test::node_at_point(screen, self.graph.nodes(), &self.viewport, &self.style)
            .map(str::to_string);

        if self.connect_armed {
            let anchor = self.state.anchor_node().map(str::to_string);
            match (hit, anchor) {
                // Same node again: the anchor stays armed, nothing mutates.
                (Some(target), Some(anchor)) if target == anchor => {}
                (Some(target), Some(anchor)) => {
                    if self.graph.add_connection(Connection::related(anchor, &target)) {
                        debug!("connected to {target}");
                    }
                    self.connect_armed = false;
                    self.state = InteractionState::Idle;
                }
                (Some(node_id), None) => {
                    debug!("anchor armed on {node_id}");
                    self.state = InteractionState::ConnectingAwaitingTarget(node_id);
                }
                // Empty canvas cancels connect mode outright and pans.
                (None, _) => {
                    self.connect_armed = false;
                    self.state = InteractionState::Panning(screen);
                }
            }
        } else {
            match hit {
                Some(node_id) => self.state = InteractionState::NodeSelected(node_id),
                None => self.state = InteractionState::Panning(screen),
            }
        }
    }

    /// Pointer motion. While panning, the delta accumulates into the
    /// viewport offset; otherwise only the remembered pointer position
    /// updates (the preview line follows it).
    pub fn pointer_moved(&mut self, screen: Pos2) {
        if let InteractionState::Panning(last) = &self.state {
            let delta = screen - *last;
            self.viewport.pan_by(delta);
            self.state = InteractionState::Panning(screen);
        }
        self.pointer = screen;
    }

    /// Pointer-up. Ends a pan; every other state survives button release.
    pub fn pointer_released(&mut self) {
        if self.state.is_panning() {
            self.state = InteractionState::Idle;
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Toggle the connect-mode control.
    ///
    /// With an anchor armed this cancels the whole connect gesture and
    /// returns to [`InteractionState::Idle`]; otherwise it just flips the
    /// flag, leaving any selection showing.
    pub fn toggle_connect_mode(&mut self) {
        if self.state.anchor_node().is_some() {
            debug!("connect mode cancelled, anchor discarded");
            self.connect_armed = false;
            self.state = InteractionState::Idle;
        } else {
            self.connect_armed = !self.connect_armed;
        }
    }

    /// One discrete zoom-in step around the transform origin.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// One discrete zoom-out step around the transform origin.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Set the zoom factor directly; out-of-range values clamp.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.viewport.set_zoom(zoom);
    }

    /// Delete the selected node, cascading its connections, and return to
    /// [`InteractionState::Idle`]. A no-op unless a node is selected.
    pub fn delete_selected_node(&mut self) {
        if let InteractionState::NodeSelected(id) = &self.state {
            let id = id.clone();
            self.graph.remove_node(&id);
            debug!("deleted node {id}");
            self.state = InteractionState::Idle;
        }
    }

    /// Remove a single connection (for per-row delete in a connections
    /// list). Selection state is unaffected; unknown ids are a no-op.
    pub fn remove_connection(&mut self, connection_id: &str) {
        self.graph.remove_connection(connection_id);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Build the frame for the current state. Pure; call it after any
    /// mutation and paint the result.
    pub fn scene(&self) -> MapScene {
        MapScene::build(&self.graph, &self.viewport, &self.state, self.pointer, &self.style)
    }
}

// ============================================================================
// Tests
// ============================================================================
