//! Layout engine selection.
//!
//! This module owns the two placement algorithms and the builder that
//! configures them. [`EngineBuilder::compute`] is the layout selector: it
//! honours a radial hint directly, and otherwise tries the hierarchical
//! engine, falling back to the radial engine when a cycle is detected.

pub mod hierarchical;
pub mod radial;

use log::{debug, info};

use lumo_core::{
    geometry::Size,
    graph::{Edge, LayoutEngine, Node},
};

use crate::{
    config::LayoutConfig,
    layout::{H_GAP, Layout, MIN_RADIUS, NODE_SIZE, RADIUS_PER_NODE, V_GAP},
};

/// Builder for configuring and running layout engines.
///
/// Holds only geometry settings, so one builder can lay out any number of
/// graphs, from any number of threads.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    node_size: Size,
    horizontal_gap: f32,
    vertical_gap: f32,
    min_radius: f32,
    radius_per_node: f32,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a new engine builder with the default geometry
    pub fn new() -> Self {
        Self {
            node_size: NODE_SIZE,
            horizontal_gap: H_GAP,
            vertical_gap: V_GAP,
            min_radius: MIN_RADIUS,
            radius_per_node: RADIUS_PER_NODE,
        }
    }

    /// Create an engine builder from a [`LayoutConfig`]
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new()
            .with_node_size(config.node_size())
            .with_horizontal_gap(config.horizontal_gap())
            .with_vertical_gap(config.vertical_gap())
            .with_min_radius(config.radial().min_radius())
            .with_radius_per_node(config.radial().radius_per_node())
    }

    /// Set the size of every node box
    pub fn with_node_size(mut self, size: Size) -> Self {
        self.node_size = size;
        self
    }

    /// Set the horizontal gap between nodes of the same row
    pub fn with_horizontal_gap(mut self, gap: f32) -> Self {
        self.horizontal_gap = gap;
        self
    }

    /// Set the vertical gap between rows
    pub fn with_vertical_gap(mut self, gap: f32) -> Self {
        self.vertical_gap = gap;
        self
    }

    /// Set the smallest radius used by the radial engine
    pub fn with_min_radius(mut self, radius: f32) -> Self {
        self.min_radius = radius;
        self
    }

    /// Set how much the radial radius grows per node
    pub fn with_radius_per_node(mut self, growth: f32) -> Self {
        self.radius_per_node = growth;
        self
    }

    /// The configured node box size
    pub fn node_size(&self) -> Size {
        self.node_size
    }

    /// Get a hierarchical engine with the configured options
    pub fn hierarchical_engine(&self) -> hierarchical::Engine {
        let mut engine = hierarchical::Engine::new();
        engine
            .set_node_size(self.node_size)
            .set_horizontal_gap(self.horizontal_gap)
            .set_vertical_gap(self.vertical_gap);
        engine
    }

    /// Get a radial engine with the configured options
    pub fn radial_engine(&self) -> radial::Engine {
        let mut engine = radial::Engine::new();
        engine
            .set_min_radius(self.min_radius)
            .set_radius_per_node(self.radius_per_node);
        engine
    }

    /// Lay out `nodes` and `edges`, choosing the engine from `hint`.
    ///
    /// `None` and `Some(Hierarchical)` run the hierarchical engine; if the
    /// edges contain a cycle the radial engine is used instead and the result
    /// is marked as a fallback. `Some(Radial)` runs the radial engine
    /// directly. This never fails.
    pub fn compute(&self, nodes: &[Node], edges: &[Edge], hint: Option<LayoutEngine>) -> Layout {
        let requested = hint.unwrap_or_default();
        debug!(
            engine:% = requested,
            nodes = nodes.len(),
            edges = edges.len();
            "Computing layout"
        );

        match requested {
            LayoutEngine::Radial => {
                Layout::radial(self.radial_engine().calculate(nodes), self.node_size, false)
            }
            LayoutEngine::Hierarchical => {
                match self.hierarchical_engine().calculate(nodes, edges) {
                    Ok(layering) => Layout::hierarchical(layering, self.node_size),
                    Err(cycle) => {
                        info!(
                            unplaced = cycle.unplaced(),
                            total = cycle.total();
                            "Graph contains a cycle, falling back to radial layout"
                        );
                        Layout::radial(self.radial_engine().calculate(nodes), self.node_size, true)
                    }
                }
            }
        }
    }
}
