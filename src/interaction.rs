//! Pointer-interaction states.
//!
//! The four states are an explicit enum so every transition in
//! [`MapController`](crate::controller::MapController) is an exhaustive
//! match; there is no flag combination that encodes an unreachable or
//! contradictory state. The only auxiliary flag is the controller's
//! connect-mode flag, which covers "connect mode armed, no anchor chosen
//! yet" while the selection (if any) is still showing.

use egui::Pos2;

/// Current pointer-interaction state of one editing session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// Nothing selected, no gesture in progress.
    #[default]
    Idle,
    /// A node is selected and highlighted. No graph mutation has happened.
    NodeSelected(String),
    /// Connect mode with an anchor armed, waiting for a target node click.
    ConnectingAwaitingTarget(String),
    /// The canvas is being dragged. Holds the last pointer position in
    /// screen space so move events can accumulate deltas.
    Panning(Pos2),
}

impl InteractionState {
    /// The selected node id, if any.
    pub fn selected_node(&self) -> Option<&str> {
        match self {
            InteractionState::NodeSelected(id) => Some(id),
            _ => None,
        }
    }

    /// The armed connection anchor, if any.
    pub fn anchor_node(&self) -> Option<&str> {
        match self {
            InteractionState::ConnectingAwaitingTarget(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, InteractionState::Panning(_))
    }
}
