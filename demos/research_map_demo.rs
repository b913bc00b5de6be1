//! Interactive research-map demo.
//!
//! Seeds a small climate-research map and wires a side panel with the
//! controls a host application would offer: connect mode, zoom, selected
//! node detail with per-connection removal, and a JSON snapshot export.
//!
//! Run with `cargo run --example research_map_demo`.

use eframe::egui;
use flexi_logger::Logger;
use log::{error, info};

use egui_research_map::{
    Connection, ConnectionKind, MapController, MapView, NodeKind, SeedRecord,
};

fn main() -> eframe::Result<()> {
    init_logging();
    info!("research map demo starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(1100.0, 720.0))
            .with_app_id("egui-research-map-demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Research Map",
        options,
        Box::new(|_cc| Ok(Box::new(ResearchMapApp::default()))),
    )
}

fn init_logging() {
    let _ = Logger::try_with_env_or_str("info")
        .unwrap_or_else(|e| panic!("logger initialization failed: {e}"))
        .start()
        .unwrap_or_else(|e| panic!("logger initialization failed: {e}"));
}

struct ResearchMapApp {
    ctrl: MapController,
}

impl Default for ResearchMapApp {
    fn default() -> Self {
        let mut ctrl = MapController::new();
        ctrl.seed(&[
            SeedRecord::new(
                NodeKind::Topic,
                "Ocean warming",
                "Long-term rise in sea surface and upper-ocean temperatures",
                "topic-ocean-warming",
            ),
            SeedRecord::new(
                NodeKind::Topic,
                "Coral bleaching",
                "Loss of symbiotic algae under thermal stress",
                "topic-coral-bleaching",
            ),
            SeedRecord::new(
                NodeKind::Source,
                "IPCC AR6 WG1",
                "Physical science basis assessment report",
                "source-ipcc-ar6",
            ),
            SeedRecord::new(
                NodeKind::Source,
                "Reef survey 2017",
                "Aerial and in-water bleaching surveys",
                "source-reef-survey",
            ),
            SeedRecord::new(
                NodeKind::Claim,
                "Bleaching is now recurrent",
                "Severe bleaching events recur faster than reefs recover",
                "claim-recurrent",
            ),
            SeedRecord::new(
                NodeKind::Claim,
                "Upper-ocean heat is rising",
                "Heat content in the upper 2000 m increases decade over decade",
                "claim-heat-content",
            ),
            SeedRecord::new(
                NodeKind::Expert,
                "Dr. A. Reyes",
                "Coral physiology, thermal tolerance",
                "expert-reyes",
            ),
            SeedRecord::new(
                NodeKind::Event,
                "2016 mass bleaching",
                "Basin-scale bleaching across the tropical Pacific",
                "event-2016-bleaching",
            ),
        ]);
        seed_connections(&mut ctrl);
        Self { ctrl }
    }
}

/// Starter edges so the demo opens with one connection of each kind.
fn seed_connections(ctrl: &mut MapController) {
    let pairs = [
        ("Bleaching is now recurrent", "Reef survey 2017", ConnectionKind::Cites, 0.9, None),
        ("IPCC AR6 WG1", "Upper-ocean heat is rising", ConnectionKind::Supports, 0.8, None),
        (
            "Coral bleaching",
            "Ocean warming",
            ConnectionKind::Relates,
            0.7,
            Some("Driven by".to_string()),
        ),
        (
            "2016 mass bleaching",
            "Upper-ocean heat is rising",
            ConnectionKind::Contradicts,
            0.4,
            Some("Local anomaly".to_string()),
        ),
    ];
    for (source_title, target_title, kind, strength, label) in pairs {
        let (Some(source), Some(target)) = (id_of(ctrl, source_title), id_of(ctrl, target_title))
        else {
            continue;
        };
        ctrl.graph_mut()
            .add_connection(Connection::new(source, target, kind, strength, label));
    }
}

fn id_of(ctrl: &MapController, title: &str) -> Option<String> {
    ctrl.graph()
        .nodes()
        .iter()
        .find(|n| n.title == title)
        .map(|n| n.id.clone())
}

impl eframe::App for ResearchMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("map_controls")
            .default_width(260.0)
            .show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            MapView::new().show(ui, &mut self.ctrl);
        });
    }
}

impl ResearchMapApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Research Map");
        ui.separator();

        let connect_label = if self.ctrl.anchor_node().is_some() {
            "Connect mode (pick a target)"
        } else {
            "Connect mode"
        };
        if ui
            .selectable_label(self.ctrl.connect_mode(), connect_label)
            .clicked()
        {
            self.ctrl.toggle_connect_mode();
        }

        ui.horizontal(|ui| {
            if ui.button("-").clicked() {
                self.ctrl.zoom_out();
            }
            ui.label(format!("{:.0}%", self.ctrl.viewport().zoom() * 100.0));
            if ui.button("+").clicked() {
                self.ctrl.zoom_in();
            }
        });

        ui.separator();
        self.selected_node_detail(ui);

        ui.separator();
        if ui.button("Log JSON snapshot").clicked() {
            match self.ctrl.graph().to_json() {
                Ok(json) => info!("snapshot:\n{json}"),
                Err(err) => error!("snapshot export failed: {err:#}"),
            }
        }
    }

    fn selected_node_detail(&mut self, ui: &mut egui::Ui) {
        let Some(selected) = self.ctrl.selected_node().map(str::to_string) else {
            ui.label("Click a node to inspect it.");
            return;
        };
        let Some(node) = self.ctrl.graph().node(&selected) else {
            return;
        };

        ui.heading(&node.title);
        ui.label(node.kind.label());
        if !node.description.is_empty() {
            ui.label(&node.description);
        }
        ui.small(format!("item: {}", node.item_id));

        // Collect rows first; the delete buttons below need the controller.
        let rows: Vec<(String, String)> = self
            .ctrl
            .graph()
            .connections_of(&selected)
            .map(|c| {
                let other = if c.source_id == selected {
                    &c.target_id
                } else {
                    &c.source_id
                };
                let other_title = self
                    .ctrl
                    .graph()
                    .node(other)
                    .map_or("?", |n| n.title.as_str());
                (
                    c.id.clone(),
                    format!("{} {} ({:.1})", c.kind.label(), other_title, c.strength),
                )
            })
            .collect();

        if !rows.is_empty() {
            ui.add_space(4.0);
            ui.label("Connections:");
        }
        let mut pending_remove = None;
        for (connection_id, text) in rows {
            ui.horizontal(|ui| {
                ui.label(text);
                if ui.small_button("x").clicked() {
                    pending_remove = Some(connection_id);
                }
            });
        }
        if let Some(connection_id) = pending_remove {
            self.ctrl.remove_connection(&connection_id);
        }

        ui.add_space(4.0);
        if ui.button("Delete node").clicked() {
            self.ctrl.delete_selected_node();
        }
    }
}
