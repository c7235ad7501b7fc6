//! JSON layout report written by the CLI.
//!
//! The report carries everything a renderer needs to draw the diagram
//! without running layout itself or re-reading the input: every node with its
//! label, type, and position; every edge with its label and anchors; and the
//! padded viewport.

use serde::Serialize;

use lumo::{
    Layout, LumoError, Positions,
    geometry::{Bounds, Point, Size},
    graph::{Diagram, LayoutEngine, NodeType},
    layout::Levels,
};

/// A node together with its placed position.
#[derive(Debug, Serialize)]
struct NodeReport<'a> {
    id: &'a str,
    label: &'a str,
    #[serde(rename = "type")]
    node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    position: Point,
}

/// An edge with both anchors resolved.
#[derive(Debug, Serialize)]
struct EdgeReport<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    animated: bool,
    source: Point,
    target: Point,
}

/// Serializable summary of a [`Layout`].
#[derive(Debug, Serialize)]
pub struct LayoutReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    engine: LayoutEngine,
    fallback: bool,
    node_size: Size,
    nodes: Vec<NodeReport<'a>>,
    positions: &'a Positions,
    #[serde(skip_serializing_if = "Option::is_none")]
    levels: Option<&'a Levels>,
    edges: Vec<EdgeReport<'a>>,
    bounds: Bounds,
    viewport: Bounds,
    view_box: String,
}

impl<'a> LayoutReport<'a> {
    /// Build a report for `diagram` laid out as `layout`.
    ///
    /// Edges with an endpoint that is not a placed node are left out.
    pub fn new(diagram: &'a Diagram, layout: &'a Layout, padding: f32) -> Self {
        let nodes = diagram
            .nodes()
            .iter()
            .filter_map(|node| {
                let position = *layout.positions().get(node.id())?;
                Some(NodeReport {
                    id: node.id(),
                    label: node.label(),
                    node_type: node.node_type(),
                    description: node.description(),
                    position,
                })
            })
            .collect();

        let edges = diagram
            .edges()
            .iter()
            .filter_map(|edge| {
                let anchors = layout.edge_anchors(edge)?;
                Some(EdgeReport {
                    from: edge.from(),
                    to: edge.to(),
                    label: edge.label(),
                    animated: edge.is_animated(),
                    source: anchors.source(),
                    target: anchors.target(),
                })
            })
            .collect();

        let viewport = layout.viewport(padding);

        Self {
            title: diagram.title(),
            engine: layout.engine(),
            fallback: layout.is_fallback(),
            node_size: layout.node_size(),
            nodes,
            positions: layout.positions(),
            levels: layout.levels(),
            edges,
            bounds: layout.bounds(),
            viewport,
            view_box: viewport.to_view_box(),
        }
    }

    /// Number of nodes in the report.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges that made it into the report.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LumoError::Export`] if serialization fails.
    pub fn to_json(&self) -> Result<String, LumoError> {
        serde_json::to_string_pretty(self).map_err(|err| LumoError::Export(Box::new(err)))
    }
}
