//! Node placement, edge anchoring and viewport bounds.
//!
//! The entry point is [`compute_layout`] (or [`EngineBuilder::compute`] for
//! non-default geometry). It runs the hierarchical engine and silently falls
//! back to the radial engine when the graph has a cycle, so a [`Layout`] is
//! always produced. Positions are the top-left corners of fixed-size node
//! boxes.
//!
//! [`rect_edge`] clips an edge to a node border and [`svg_bounds`] computes
//! the box enclosing every node.

mod anchor;
mod bounds;
mod engines;

pub use anchor::border_point;
pub use bounds::{DEFAULT_BOUNDS, bounds_of};
pub use engines::{
    EngineBuilder,
    hierarchical::{self, CycleDetected, Layering, Levels},
    radial,
};

use indexmap::IndexMap;
use serde::Serialize;

use lumo_core::{
    geometry::{Bounds, Insets, Point, Size},
    graph::{Edge, LayoutEngine, Node},
};

/// Default node box width.
pub const NODE_WIDTH: f32 = 130.0;
/// Default node box height.
pub const NODE_HEIGHT: f32 = 46.0;
/// Default horizontal gap between nodes in a row.
pub const H_GAP: f32 = 28.0;
/// Default vertical gap between rows.
pub const V_GAP: f32 = 80.0;
/// Default viewport padding.
pub const PADDING: f32 = 24.0;
/// Default radius floor for radial layouts.
pub const MIN_RADIUS: f32 = 110.0;
/// Default radius growth per node for radial layouts.
pub const RADIUS_PER_NODE: f32 = 28.0;

/// Default node box size.
pub const NODE_SIZE: Size = Size::new(NODE_WIDTH, NODE_HEIGHT);

/// Node id to top-left position, in input node order.
pub type Positions = IndexMap<String, Point>;

/// The pair of border points where an edge meets its two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeAnchors {
    source: Point,
    target: Point,
}

impl EdgeAnchors {
    /// Anchor on the source node border.
    pub fn source(self) -> Point {
        self.source
    }

    /// Anchor on the target node border.
    pub fn target(self) -> Point {
        self.target
    }
}

/// A complete placement of every node of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    engine: LayoutEngine,
    fallback: bool,
    positions: Positions,
    levels: Option<Levels>,
    node_size: Size,
}

impl Layout {
    pub(crate) fn hierarchical(layering: Layering, node_size: Size) -> Self {
        let (levels, positions) = layering.into_parts();
        Self {
            engine: LayoutEngine::Hierarchical,
            fallback: false,
            positions,
            levels: Some(levels),
            node_size,
        }
    }

    pub(crate) fn radial(positions: Positions, node_size: Size, fallback: bool) -> Self {
        Self {
            engine: LayoutEngine::Radial,
            fallback,
            positions,
            levels: None,
            node_size,
        }
    }

    /// The engine that produced these positions.
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// True when the hierarchical engine detected a cycle and the radial
    /// engine was used instead.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// All node positions, in input order.
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Top-left position of a single node.
    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// Level assignment, present only for hierarchical layouts.
    pub fn levels(&self) -> Option<&Levels> {
        self.levels.as_ref()
    }

    /// The node box size these positions were computed for.
    pub fn node_size(&self) -> Size {
        self.node_size
    }

    /// Unpadded bounds over every node box.
    pub fn bounds(&self) -> Bounds {
        bounds_of(&self.positions, self.node_size)
    }

    /// Bounds grown by `padding` on every side, ready to become a viewport.
    pub fn viewport(&self, padding: f32) -> Bounds {
        self.bounds().add_padding(Insets::uniform(padding))
    }

    /// Border anchors for an edge, or `None` when either endpoint is not a
    /// placed node. Callers skip drawing edges without anchors.
    pub fn edge_anchors(&self, edge: &Edge) -> Option<EdgeAnchors> {
        let source = self.position(edge.from())?;
        let target = self.position(edge.to())?;
        Some(EdgeAnchors {
            source: border_point(source, target, self.node_size),
            target: border_point(target, source, self.node_size),
        })
    }
}

/// Positions from the hierarchical engine with default geometry,
/// or [`CycleDetected`] when the edges form a cycle.
pub fn hierarchical_layout(nodes: &[Node], edges: &[Edge]) -> Result<Positions, CycleDetected> {
    EngineBuilder::new()
        .hierarchical_engine()
        .calculate(nodes, edges)
        .map(Layering::into_positions)
}

/// Radial positions with the default radius policy.
pub fn radial_layout(nodes: &[Node]) -> Positions {
    EngineBuilder::new().radial_engine().calculate(nodes)
}

/// Lays out a graph with default geometry. See [`EngineBuilder::compute`].
pub fn compute_layout(nodes: &[Node], edges: &[Edge], hint: Option<LayoutEngine>) -> Layout {
    EngineBuilder::new().compute(nodes, edges, hint)
}

/// Border point of a default-size node at `source` facing a node at `target`.
pub fn rect_edge(source: Point, target: Point) -> Point {
    border_point(source, target, NODE_SIZE)
}

/// Bounds over default-size node boxes.
pub fn svg_bounds(positions: &Positions) -> Bounds {
    bounds_of(positions, NODE_SIZE)
}
