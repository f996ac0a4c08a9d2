//! Pointer routing for one mounted scene.
//!
//! The system owns the pointer state and one state machine per interactive
//! node. Nodes read their state during a tick; only pointer events write it.

use ahash::AHashMap;
use folio_ids::NodeID;
use folio_input::{PointerEvent, PointerState};
use folio_nodes::{InteractionMachine, InteractionProfile, InteractionState, Node, Transition};

use crate::camera::Ray;

#[derive(Default)]
pub struct InteractionSystem {
    pub pointer: PointerState,
    machines: AHashMap<NodeID, InteractionMachine>,
    hovered: Option<NodeID>,
}

impl InteractionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, node: NodeID, profile: &InteractionProfile) {
        self.machines.insert(node, profile.machine());
    }

    pub fn is_registered(&self, node: NodeID) -> bool {
        self.machines.contains_key(&node)
    }

    pub fn state(&self, node: NodeID) -> InteractionState {
        self.machines
            .get(&node)
            .map(InteractionMachine::state)
            .unwrap_or_default()
    }

    pub fn hovered(&self) -> Option<NodeID> {
        self.hovered
    }

    /// Delivers a node-scoped event. Unregistered nodes ignore everything.
    pub fn dispatch(&mut self, node: NodeID, event: PointerEvent) -> Option<Transition> {
        let machine = self.machines.get_mut(&node)?;
        match event {
            PointerEvent::Enter => self.hovered = Some(node),
            PointerEvent::Leave if self.hovered == Some(node) => self.hovered = None,
            _ => {}
        }
        machine.handle(event)
    }

    /// Moves hover to `hit`, raising `Leave` on the old node then `Enter` on
    /// the new one. Returns the transitions in the order they happened.
    pub fn hover(&mut self, hit: Option<NodeID>) -> Vec<(NodeID, Transition)> {
        let mut out = Vec::new();
        if hit == self.hovered {
            return out;
        }
        if let Some(old) = self.hovered {
            if let Some(t) = self.dispatch(old, PointerEvent::Leave) {
                out.push((old, t));
            }
        }
        self.hovered = None;
        if let Some(new) = hit {
            if let Some(t) = self.dispatch(new, PointerEvent::Enter) {
                out.push((new, t));
            }
        }
        if hit.is_some_and(|id| self.is_registered(id)) {
            self.hovered = hit;
        }
        out
    }

    /// Click on whatever is under the pointer.
    pub fn click(&mut self) -> Option<(NodeID, Transition)> {
        let node = self.hovered?;
        self.dispatch(node, PointerEvent::Click).map(|t| (node, t))
    }
}

/// Nearest interactive node whose world bounding sphere `ray` hits.
pub fn pick<'a>(ray: &Ray, nodes: impl IntoIterator<Item = &'a Node>) -> Option<NodeID> {
    nodes
        .into_iter()
        .filter(|node| node.is_interactive())
        .filter_map(|node| {
            let (center, radius) = node.bounding_sphere()?;
            ray.intersect_sphere(center.to_glam(), radius)
                .map(|distance| (distance, node.id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}
