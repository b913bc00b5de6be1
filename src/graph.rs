//! Graph data model for the research map.
//!
//! [`MapGraph`] is the canonical, mutable collection of nodes and connections
//! and the single source of truth for everything the map renders. It holds no
//! viewport or interaction state; those live in
//! [`MapController`](crate::controller::MapController).
//!
//! All mutators are synchronous and total: removing an id that is not present
//! is a silent no-op, so callers can issue commands derived from stale UI
//! state without error handling.

use anyhow::{bail, Result};
use egui::{Color32, Pos2};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Category of research artifact a node represents.
///
/// The set is fixed and closed; it drives the node's default color and size
/// and the type label rendered under the circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Topic,
    Source,
    Claim,
    Expert,
    Event,
}

impl NodeKind {
    /// All kinds in declaration order. Seeding assigns one band per row.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Topic,
        NodeKind::Source,
        NodeKind::Claim,
        NodeKind::Expert,
        NodeKind::Event,
    ];

    /// Lowercase label rendered under the node circle.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Topic => "topic",
            NodeKind::Source => "source",
            NodeKind::Claim => "claim",
            NodeKind::Expert => "expert",
            NodeKind::Event => "event",
        }
    }
}

/// Rendered size class of a node.
///
/// Maps to a fixed pixel radius at zoom 1.0 via
/// [`MapStyle::node_radius`](crate::style::MapStyle::node_radius).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeSize {
    Small,
    Medium,
    Large,
}

/// One research artifact surfaced on the map.
///
/// Serializes with camelCase keys; the snapshot format is shared with
/// non-Rust consumers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Opaque unique id. Minted as a UUID by [`Node::new`]; callers may
    /// substitute their own via [`Node::with_id`].
    pub id: String,
    pub kind: NodeKind,
    /// Full title; the renderer truncates it for display.
    pub title: String,
    /// Longer text shown by callers when the node is selected.
    pub description: String,
    /// Back-reference to the domain record this node represents. Opaque to
    /// the map; never dereferenced here.
    pub item_id: String,
    /// World-space position. Unbounded; panning reveals off-screen nodes.
    pub position: Pos2,
    pub size: NodeSize,
    pub color: Color32,
}

impl Node {
    /// Create a node with a freshly minted id and empty description/item_id.
    pub fn new(
        kind: NodeKind,
        title: impl Into<String>,
        position: Pos2,
        size: NodeSize,
        color: Color32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            description: String::new(),
            item_id: String::new(),
            position,
            size,
            color,
        }
    }

    /// Replace the minted id with a caller-supplied one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = item_id.into();
        self
    }
}

/// Relationship expressed by a connection.
///
/// Fixed set; each kind renders in a distinct color from the
/// [`MapStyle`](crate::style::MapStyle) palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Supports,
    Contradicts,
    Relates,
    Cites,
}

impl ConnectionKind {
    /// Lowercase label for list rows and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionKind::Supports => "supports",
            ConnectionKind::Contradicts => "contradicts",
            ConnectionKind::Relates => "relates",
            ConnectionKind::Cites => "cites",
        }
    }
}

/// A directed, typed, weighted edge between two nodes.
///
/// The endpoint keys serialize as `sourceNodeId`/`targetNodeId` to match
/// the snapshot format shared with non-Rust consumers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Opaque unique id, minted as a UUID by the constructors.
    pub id: String,
    #[serde(rename = "sourceNodeId")]
    pub source_id: String,
    #[serde(rename = "targetNodeId")]
    pub target_id: String,
    pub kind: ConnectionKind,
    /// Weight in [0, 1]; scales the rendered line width.
    pub strength: f32,
    /// Optional short text rendered in a box at the connection midpoint.
    pub label: Option<String>,
}

impl Connection {
    /// Strength assigned to interactively created connections.
    pub const DEFAULT_STRENGTH: f32 = 0.7;
    /// Label assigned to interactively created connections.
    pub const DEFAULT_LABEL: &'static str = "Related";

    /// Create a connection with a freshly minted id.
    ///
    /// `strength` is clamped to [0, 1].
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        kind: ConnectionKind,
        strength: f32,
        label: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            kind,
            strength: strength.clamp(0.0, 1.0),
            label,
        }
    }

    /// The connection the state machine creates when a target click completes
    /// connect mode: `relates`, strength 0.7, label "Related".
    pub fn related(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self::new(
            source_id,
            target_id,
            ConnectionKind::Relates,
            Self::DEFAULT_STRENGTH,
            Some(Self::DEFAULT_LABEL.to_string()),
        )
    }

    /// True if this connection touches the given node on either end.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source_id == node_id || self.target_id == node_id
    }
}

/// Partial update applied by [`MapGraph::update_node`].
///
/// `None` fields are left untouched, so callers patch only what changed.
#[derive(Clone, Debug, Default)]
pub struct NodePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<Pos2>,
    pub size: Option<NodeSize>,
    pub color: Option<Color32>,
}

/// The canonical store of nodes and connections.
///
/// Iteration order is insertion order; the hit-tester and renderer rely on it
/// (later nodes occlude earlier ones). Serializes as the full
/// `{nodes, connections}` snapshot handed to the persistence collaborator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapGraph {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
}

impl MapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// All connections touching the given node, in store order.
    ///
    /// Feeds the per-node connection list callers show next to a selected
    /// node.
    pub fn connections_of<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Connection> {
        self.connections.iter().filter(move |c| c.touches(node_id))
    }

    /// Add a node, replacing any stored node with the same id.
    ///
    /// Replacement keeps `id` unique without an error path; the replaced
    /// node keeps its slot, so iteration order is stable.
    pub fn add_node(&mut self, node: Node) {
        match self.nodes.iter().position(|n| n.id == node.id) {
            Some(index) => self.nodes[index] = node,
            None => self.nodes.push(node),
        }
    }

    /// Remove a node and every connection referencing it.
    ///
    /// Unknown ids are a silent no-op. After this returns, no connection in
    /// the store references `id`.
    pub fn remove_node(&mut self, id: &str) {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return;
        }
        let connections_before = self.connections.len();
        self.connections.retain(|c| !c.touches(id));
        debug!(
            "removed node {} and {} connection(s)",
            id,
            connections_before - self.connections.len()
        );
    }

    /// Apply a patch to the node with the given id. Unknown ids are a
    /// silent no-op.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return;
        };
        if let Some(title) = patch.title {
            node.title = title;
        }
        if let Some(description) = patch.description {
            node.description = description;
        }
        if let Some(position) = patch.position {
            node.position = position;
        }
        if let Some(size) = patch.size {
            node.size = size;
        }
        if let Some(color) = patch.color {
            node.color = color;
        }
    }

    /// Add a connection, refusing anything that would fail
    /// [`MapGraph::validate`].
    ///
    /// Returns `false` (and logs a warning) for a self-loop, an endpoint id
    /// not present in the store, a duplicate connection id, or a strength
    /// outside [0, 1]. The interaction state machine never produces these;
    /// the guard covers callers seeding connections directly.
    pub fn add_connection(&mut self, connection: Connection) -> bool {
        if connection.source_id == connection.target_id {
            warn!("refusing self-loop connection on node {}", connection.source_id);
            return false;
        }
        if self.node(&connection.source_id).is_none() || self.node(&connection.target_id).is_none()
        {
            warn!(
                "refusing connection {} -> {}: endpoint not in store",
                connection.source_id, connection.target_id
            );
            return false;
        }
        if self.connection(&connection.id).is_some() {
            warn!("refusing duplicate connection id {}", connection.id);
            return false;
        }
        if !(0.0..=1.0).contains(&connection.strength) {
            warn!(
                "refusing connection {} with strength {} outside [0, 1]",
                connection.id, connection.strength
            );
            return false;
        }
        self.connections.push(connection);
        true
    }

    /// Remove a single connection. Unknown ids are a silent no-op.
    pub fn remove_connection(&mut self, id: &str) {
        self.connections.retain(|c| c.id != id);
    }

    // ========================================================================
    // Snapshot
    // ========================================================================

    /// Serialize the full `{nodes, connections}` snapshot as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot produced by [`MapGraph::to_json`] and validate it
    /// before handing it back.
    pub fn from_json(json: &str) -> Result<Self> {
        let graph: MapGraph = serde_json::from_str(json)?;
        graph.validate()?;
        Ok(graph)
    }

    /// Check the structural invariants of a snapshot: unique ids, no dangling
    /// connection endpoints, no self-loops, strength within [0, 1].
    ///
    /// Graphs built through the mutator API always pass; this guards
    /// externally produced snapshots at the [`MapGraph::from_json`] boundary.
    pub fn validate(&self) -> Result<()> {
        let mut node_ids = HashSet::new();
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                bail!("duplicate node id: {}", node.id);
            }
        }
        let mut connection_ids = HashSet::new();
        for connection in &self.connections {
            if !connection_ids.insert(connection.id.as_str()) {
                bail!("duplicate connection id: {}", connection.id);
            }
            if connection.source_id == connection.target_id {
                bail!("connection {} is a self-loop", connection.id);
            }
            if !node_ids.contains(connection.source_id.as_str()) {
                bail!(
                    "connection {} references missing source node {}",
                    connection.id,
                    connection.source_id
                );
            }
            if !node_ids.contains(connection.target_id.as_str()) {
                bail!(
                    "connection {} references missing target node {}",
                    connection.id,
                    connection.target_id
                );
            }
            if !(0.0..=1.0).contains(&connection.strength) {
                bail!(
                    "connection {} has strength {} outside [0, 1]",
                    connection.id,
                    connection.strength
                );
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
