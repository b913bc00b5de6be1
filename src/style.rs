//! Render style for the research map.
//!
//! All visual constants live in one [`MapStyle`] value so embedders can
//! restyle the map without forking the renderer. The defaults match the
//! classic research-map palette.

use egui::{Color32, Stroke};

use crate::graph::{ConnectionKind, NodeKind, NodeSize};

/// Visual constants consumed by the hit-tester and the renderer.
#[derive(Clone, Debug)]
pub struct MapStyle {
    pub background: Color32,

    /// Node radius table in pixels at zoom 1.0, keyed by [`NodeSize`].
    pub radius_small: f32,
    pub radius_medium: f32,
    pub radius_large: f32,

    /// Default node fill per kind, assigned at seeding.
    pub topic_color: Color32,
    pub source_color: Color32,
    pub claim_color: Color32,
    pub expert_color: Color32,
    pub event_color: Color32,

    /// Connection stroke color per kind.
    pub supports_color: Color32,
    pub contradicts_color: Color32,
    pub relates_color: Color32,
    pub cites_color: Color32,

    /// Connection width at zoom 1.0 and strength 1.0.
    pub base_line_width: f32,
    /// Arrowhead length in pixels at zoom 1.0.
    pub arrow_length: f32,

    /// Ring drawn around the selected node and the connect-mode anchor.
    pub highlight: Stroke,
    /// Gap between the node circle and the highlight ring.
    pub highlight_padding: f32,

    /// Straight line previewing an in-progress connection.
    pub preview: Stroke,

    pub title_color: Color32,
    pub kind_label_color: Color32,
    pub connection_label_color: Color32,
    /// Fill behind connection labels so they stay legible over lines.
    pub connection_label_fill: Color32,

    /// Title characters kept before the ellipsis.
    pub title_max_chars: usize,
    /// Font sizes in points at zoom 1.0; the renderer scales them with zoom.
    pub title_font_size: f32,
    pub kind_label_font_size: f32,
    pub connection_label_font_size: f32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(24, 26, 31),

            radius_small: 15.0,
            radius_medium: 20.0,
            radius_large: 30.0,

            topic_color: Color32::from_rgb(0x4c, 0xaf, 0x50),
            source_color: Color32::from_rgb(0x21, 0x96, 0xf3),
            claim_color: Color32::from_rgb(0xff, 0x98, 0x00),
            expert_color: Color32::from_rgb(0x9c, 0x27, 0xb0),
            event_color: Color32::from_rgb(0xf4, 0x43, 0x36),

            supports_color: Color32::from_rgb(0x4c, 0xaf, 0x50),
            contradicts_color: Color32::from_rgb(0xf4, 0x43, 0x36),
            relates_color: Color32::from_rgb(0x9e, 0x9e, 0x9e),
            cites_color: Color32::from_rgb(0x21, 0x96, 0xf3),

            base_line_width: 2.0,
            arrow_length: 10.0,

            highlight: Stroke::new(2.0, Color32::from_rgb(0xff, 0xeb, 0x3b)),
            highlight_padding: 4.0,

            preview: Stroke::new(1.5, Color32::from_gray(200)),

            title_color: Color32::WHITE,
            kind_label_color: Color32::from_gray(160),
            connection_label_color: Color32::from_gray(220),
            connection_label_fill: Color32::from_rgb(40, 42, 48),

            title_max_chars: 14,
            title_font_size: 12.0,
            kind_label_font_size: 9.0,
            connection_label_font_size: 10.0,
        }
    }
}

impl MapStyle {
    /// Node radius in pixels at zoom 1.0.
    pub fn node_radius(&self, size: NodeSize) -> f32 {
        match size {
            NodeSize::Small => self.radius_small,
            NodeSize::Medium => self.radius_medium,
            NodeSize::Large => self.radius_large,
        }
    }

    /// Default fill color for a node kind.
    pub fn kind_color(&self, kind: NodeKind) -> Color32 {
        match kind {
            NodeKind::Topic => self.topic_color,
            NodeKind::Source => self.source_color,
            NodeKind::Claim => self.claim_color,
            NodeKind::Expert => self.expert_color,
            NodeKind::Event => self.event_color,
        }
    }

    /// Default size class for a node kind: topics render large, sources and
    /// claims medium, experts and events small.
    pub fn kind_size(&self, kind: NodeKind) -> NodeSize {
        match kind {
            NodeKind::Topic => NodeSize::Large,
            NodeKind::Source | NodeKind::Claim => NodeSize::Medium,
            NodeKind::Expert | NodeKind::Event => NodeSize::Small,
        }
    }

    /// Stroke color for a connection kind. Color depends on kind alone.
    pub fn connection_color(&self, kind: ConnectionKind) -> Color32 {
        match kind {
            ConnectionKind::Supports => self.supports_color,
            ConnectionKind::Contradicts => self.contradicts_color,
            ConnectionKind::Relates => self.relates_color,
            ConnectionKind::Cites => self.cites_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_table_matches_size_classes() {
        let style = MapStyle::default();
        assert_eq!(style.node_radius(NodeSize::Small), 15.0);
        assert_eq!(style.node_radius(NodeSize::Medium), 20.0);
        assert_eq!(style.node_radius(NodeSize::Large), 30.0);
    }

    #[test]
    fn test_connection_colors_are_distinct() {
        let style = MapStyle::default();
        let colors = [
            style.connection_color(ConnectionKind::Supports),
            style.connection_color(ConnectionKind::Contradicts),
            style.connection_color(ConnectionKind::Relates),
            style.connection_color(ConnectionKind::Cites),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b, "connection kinds must render distinguishably");
            }
        }
    }

    #[test]
    fn test_every_kind_has_a_color_and_size() {
        let style = MapStyle::default();
        for kind in NodeKind::ALL {
            let _ = style.kind_color(kind);
            let _ = style.kind_size(kind);
        }
    }
}
