//! Scene construction and painting.
//!
//! Rendering is split in two phases. [`MapScene::build`] is a pure function
//! of (graph, viewport, interaction, pointer, style) that produces plain
//! drawing primitives; [`MapScene::paint`] replays them onto an
//! [`egui::Painter`]. The split keeps the full draw geometry assertable in
//! tests without a UI backend, and guarantees a repaint reflects exactly one
//! consistent snapshot of the state.
//!
//! Draw order, strictly: connection lines with arrowheads, connection
//! labels, node circles with titles and type labels, highlight rings, and
//! finally the connect-mode preview line.

use egui::{vec2, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, Vec2};

use crate::graph::MapGraph;
use crate::hit_test::screen_circle;
use crate::interaction::InteractionState;
use crate::style::MapStyle;
use crate::viewport::Viewport;

/// A connection ready to draw: endpoints pulled in to the node circles,
/// width already scaled by zoom and strength.
#[derive(Clone, Debug)]
pub struct ConnectionShape {
    pub id: String,
    pub from: Pos2,
    pub to: Pos2,
    pub width: f32,
    pub color: Color32,
    /// Arrowhead triangle at the target end: tip first, then the two
    /// back corners.
    pub arrow: [Pos2; 3],
    pub label: Option<ConnectionLabel>,
}

/// Label text boxed at the connection midpoint.
#[derive(Clone, Debug)]
pub struct ConnectionLabel {
    pub text: String,
    pub center: Pos2,
}

/// A node ready to draw as a filled circle.
#[derive(Clone, Debug)]
pub struct NodeShape {
    pub id: String,
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
    /// Title already truncated for display.
    pub title: String,
    /// Type label rendered under the circle.
    pub kind_label: &'static str,
    /// Draw a highlight ring: the node is selected or is the connect-mode
    /// anchor.
    pub highlighted: bool,
}

/// One full frame of the map, in screen-space coordinates local to the
/// drawing surface.
#[derive(Clone, Debug, Default)]
pub struct MapScene {
    pub connections: Vec<ConnectionShape>,
    pub nodes: Vec<NodeShape>,
    /// Straight line from the anchor's screen center to the pointer while a
    /// connection is being created.
    pub preview: Option<(Pos2, Pos2)>,
    /// Zoom the scene was built at; scales fonts at paint time.
    pub zoom: f32,
}

impl MapScene {
    /// Build the scene for the current state.
    ///
    /// Connections whose endpoints coincide on screen are skipped; there is
    /// no direction to point the arrow in.
    pub fn build(
        graph: &MapGraph,
        viewport: &Viewport,
        state: &InteractionState,
        pointer: Pos2,
        style: &MapStyle,
    ) -> Self {
        let mut scene = MapScene {
            zoom: viewport.zoom(),
            ..Default::default()
        };

        for connection in graph.connections() {
            let Some(source) = graph.node(&connection.source_id) else {
                continue;
            };
            let Some(target) = graph.node(&connection.target_id) else {
                continue;
            };
            let (source_center, source_radius) = screen_circle(source, viewport, style);
            let (target_center, target_radius) = screen_circle(target, viewport, style);

            let delta = target_center - source_center;
            let length = delta.length();
            if length <= f32::EPSILON {
                continue;
            }
            let direction = delta / length;

            let from = source_center + direction * source_radius;
            let to = target_center - direction * target_radius;

            let arrow_length = style.arrow_length * viewport.zoom();
            let back = to - direction * arrow_length;
            let half_width = vec2(-direction.y, direction.x) * (arrow_length * 0.5);

            scene.connections.push(ConnectionShape {
                id: connection.id.clone(),
                from,
                to,
                width: style.base_line_width * viewport.zoom() * connection.strength,
                color: style.connection_color(connection.kind),
                arrow: [to, back + half_width, back - half_width],
                label: connection.label.as_ref().map(|text| ConnectionLabel {
                    text: text.clone(),
                    center: source_center + delta * 0.5,
                }),
            });
        }

        let selected = state.selected_node();
        let anchor = state.anchor_node();
        for node in graph.nodes() {
            let (center, radius) = screen_circle(node, viewport, style);
            scene.nodes.push(NodeShape {
                id: node.id.clone(),
                center,
                radius,
                fill: node.color,
                title: truncate_title(&node.title, style.title_max_chars),
                kind_label: node.kind.label(),
                highlighted: selected == Some(node.id.as_str())
                    || anchor == Some(node.id.as_str()),
            });
        }

        if let Some(anchor_id) = anchor {
            if let Some(node) = graph.node(anchor_id) {
                let (center, _) = screen_circle(node, viewport, style);
                scene.preview = Some((center, pointer));
            }
        }

        scene
    }

    /// Replay the scene onto a painter.
    ///
    /// `origin` is added to every position, translating surface-local
    /// coordinates to wherever the widget sits in the window. The painter is
    /// expected to be clipped to the drawing surface.
    pub fn paint(&self, painter: &egui::Painter, origin: Vec2, style: &MapStyle) {
        painter.rect_filled(painter.clip_rect(), 0.0, style.background);

        for connection in &self.connections {
            painter.line_segment(
                [connection.from + origin, connection.to + origin],
                Stroke::new(connection.width, connection.color),
            );
            painter.add(Shape::convex_polygon(
                connection.arrow.iter().map(|p| *p + origin).collect(),
                connection.color,
                Stroke::NONE,
            ));
        }

        // Labels go over every line so crossings cannot obscure them.
        let label_font = FontId::proportional(style.connection_label_font_size * self.zoom);
        for label in self.connections.iter().filter_map(|c| c.label.as_ref()) {
            let galley = painter.layout_no_wrap(
                label.text.clone(),
                label_font.clone(),
                style.connection_label_color,
            );
            let padding = vec2(4.0, 2.0) * self.zoom;
            let rect = Rect::from_center_size(label.center + origin, galley.size() + padding * 2.0);
            painter.rect_filled(rect, 2.0, style.connection_label_fill);
            painter.galley(
                label.center + origin - galley.size() * 0.5,
                galley,
                style.connection_label_color,
            );
        }

        let title_font = FontId::proportional(style.title_font_size * self.zoom);
        let kind_font = FontId::proportional(style.kind_label_font_size * self.zoom);
        for node in &self.nodes {
            painter.circle_filled(node.center + origin, node.radius, node.fill);
            painter.text(
                node.center + origin,
                Align2::CENTER_CENTER,
                &node.title,
                title_font.clone(),
                style.title_color,
            );
            painter.text(
                node.center + origin + vec2(0.0, node.radius + 4.0),
                Align2::CENTER_TOP,
                node.kind_label,
                kind_font.clone(),
                style.kind_label_color,
            );
        }

        for node in self.nodes.iter().filter(|n| n.highlighted) {
            painter.circle_stroke(
                node.center + origin,
                node.radius + style.highlight_padding,
                style.highlight,
            );
        }

        if let Some((from, to)) = self.preview {
            painter.line_segment([from + origin, to + origin], style.preview);
        }
    }
}

/// Shorten a title for in-circle display: at most `max_chars` characters,
/// with an ellipsis when anything was cut.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut truncated: String = title.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}

// ============================================================================
// Tests
// ============================================================================
