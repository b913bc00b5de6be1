//! Band-layout seeding from external project records.
//!
//! The research-project collaborator hands over plain
//! `(kind, title, description, item_id)` tuples; this module turns them into
//! positioned, colored nodes. Each kind occupies its own horizontal band so
//! a freshly seeded map reads as rows: topics, then sources, then claims,
//! then experts. The map neither knows nor cares where the records came
//! from.

use egui::{pos2, Pos2};

use crate::graph::{MapGraph, Node, NodeKind};
use crate::style::MapStyle;

/// One external record to surface on the map.
#[derive(Clone, Debug)]
pub struct SeedRecord {
    pub kind: NodeKind,
    pub title: String,
    pub description: String,
    /// Back-reference stored verbatim on the node.
    pub item_id: String,
}

impl SeedRecord {
    pub fn new(
        kind: NodeKind,
        title: impl Into<String>,
        description: impl Into<String>,
        item_id: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            item_id: item_id.into(),
        }
    }
}

/// The horizontal band one node kind occupies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// World x of the first node of this kind.
    pub base_x: f32,
    /// Fixed world y of the whole band.
    pub row_y: f32,
    /// Horizontal spacing between consecutive nodes of this kind.
    pub step_x: f32,
}

fn row_index(kind: NodeKind) -> usize {
    NodeKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default()
}

/// Band table, one row per kind in [`NodeKind::ALL`] order.
///
/// The first topic lands at world (100, 100) and the first source at
/// (150, 250); each band is staggered 50 px right and 150 px down from the
/// previous one.
pub fn band(kind: NodeKind) -> Band {
    let k = row_index(kind) as f32;
    Band {
        base_x: 100.0 + 50.0 * k,
        row_y: 100.0 + 150.0 * k,
        step_x: 150.0,
    }
}

/// World position of the `index`-th seeded node of a kind.
pub fn seed_position(kind: NodeKind, index: usize) -> Pos2 {
    let band = band(kind);
    pos2(band.base_x + index as f32 * band.step_x, band.row_y)
}

/// Bulk-add one node per record, assigning band positions and the kind's
/// default color and size.
///
/// Indices count per kind, in record order, so interleaved kinds still lay
/// out densely within their own bands. Ids are minted; the record's
/// `item_id` is carried on the node untouched.
pub fn seed_graph(graph: &mut MapGraph, records: &[SeedRecord], style: &MapStyle) {
    let mut counts = [0usize; NodeKind::ALL.len()];
    for record in records {
        let row = row_index(record.kind);
        let position = seed_position(record.kind, counts[row]);
        counts[row] += 1;

        let node = Node::new(
            record.kind,
            record.title.clone(),
            position,
            style.kind_size(record.kind),
            style.kind_color(record.kind),
        )
        .with_description(record.description.clone())
        .with_item_id(record.item_id.clone());
        graph.add_node(node);
    }
}

// ============================================================================
// Tests
// ============================================================================
