//! Hierarchical layout engine
//!
//! Places the nodes of a directed acyclic graph in horizontal rows, one row
//! per level, with every edge pointing to a strictly lower row. Levels come
//! from Kahn's topological processing with longest-path leveling: a node's
//! level is one more than the highest level among its predecessors, so in a
//! diamond `a→b, a→c, b→d, c→d` the node `d` always lands below both `b` and
//! `c`.
//!
//! Rows are centered against the widest row. Within a row, nodes keep their
//! relative input order.
//!
//! A cyclic graph cannot be leveled; [`Engine::calculate`] then returns
//! [`CycleDetected`] instead of positions.

use std::collections::{HashMap, VecDeque};

use indexmap::IndexMap;
use log::{debug, trace};
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};
use thiserror::Error;

use lumo_core::{
    geometry::{Point, Size},
    graph::{Edge, Node},
};

use crate::layout::{H_GAP, NODE_SIZE, Positions, V_GAP};

/// Node id to level (row index, 0 at the top), in input node order.
pub type Levels = IndexMap<String, usize>;

/// The edges of the graph form at least one cycle.
///
/// This is the "not applicable" outcome of hierarchical layout; the layout
/// selector answers it by using the radial engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("graph contains a cycle: {unplaced} of {total} nodes could not be leveled")]
pub struct CycleDetected {
    unplaced: usize,
    total: usize,
}

impl CycleDetected {
    /// Number of nodes that never reached in-degree zero.
    pub fn unplaced(self) -> usize {
        self.unplaced
    }

    /// Number of distinct nodes in the graph.
    pub fn total(self) -> usize {
        self.total
    }
}

/// Levels and positions produced by a successful hierarchical layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Layering {
    levels: Levels,
    positions: Positions,
}

impl Layering {
    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn into_positions(self) -> Positions {
        self.positions
    }

    pub fn into_parts(self) -> (Levels, Positions) {
        (self.levels, self.positions)
    }
}

/// Hierarchical layout engine
#[derive(Debug, Clone)]
pub struct Engine {
    node_size: Size,
    horizontal_gap: f32,
    vertical_gap: f32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new hierarchical layout engine with default geometry
    pub fn new() -> Self {
        Self {
            node_size: NODE_SIZE,
            horizontal_gap: H_GAP,
            vertical_gap: V_GAP,
        }
    }

    /// Set the node box size
    pub fn set_node_size(&mut self, size: Size) -> &mut Self {
        self.node_size = size;
        self
    }

    /// Set the gap between neighbouring nodes of a row
    pub fn set_horizontal_gap(&mut self, gap: f32) -> &mut Self {
        self.horizontal_gap = gap;
        self
    }

    /// Set the gap between rows
    pub fn set_vertical_gap(&mut self, gap: f32) -> &mut Self {
        self.vertical_gap = gap;
        self
    }

    /// Calculate levels and positions for a graph.
    ///
    /// Edges whose endpoints are not both in `nodes` are ignored. Returns
    /// [`CycleDetected`] when the remaining edges contain a cycle (including
    /// a self-loop).
    pub fn calculate(&self, nodes: &[Node], edges: &[Edge]) -> Result<Layering, CycleDetected> {
        let graph = Self::build_graph(nodes, edges);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "Calculating hierarchical layout"
        );

        let levels = Self::assign_levels(&graph)?;
        let rows = Self::group_rows(&graph, &levels);
        let placed = self.position_rows(&rows, graph.node_count());

        let layering = Layering {
            levels: graph
                .node_indices()
                .map(|idx| (graph[idx].to_string(), levels[idx.index()]))
                .collect(),
            positions: graph
                .node_indices()
                .map(|idx| (graph[idx].to_string(), placed[idx.index()]))
                .collect(),
        };
        trace!(rows = rows.len(); "Hierarchical layout complete");

        Ok(layering)
    }

    /// Build a petgraph view of the input, one graph node per distinct id in
    /// input order.
    fn build_graph<'a>(nodes: &'a [Node], edges: &[Edge]) -> DiGraph<&'a str, ()> {
        let mut graph = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut node_map = HashMap::with_capacity(nodes.len());

        for node in nodes {
            node_map
                .entry(node.id())
                .or_insert_with(|| graph.add_node(node.id()));
        }

        for edge in edges {
            if let (Some(&source), Some(&target)) =
                (node_map.get(edge.from()), node_map.get(edge.to()))
            {
                if edge.is_self_loop() {
                    debug!(node = edge.from(); "Self-loop makes the graph cyclic");
                }
                graph.add_edge(source, target, ());
            } else {
                debug!(from = edge.from(), to = edge.to(); "Ignoring edge with unknown endpoint");
            }
        }

        graph
    }

    /// Kahn's algorithm with longest-path leveling.
    ///
    /// Returns one level per graph node, indexed by `NodeIndex::index()`.
    fn assign_levels(graph: &DiGraph<&str, ()>) -> Result<Vec<usize>, CycleDetected> {
        let total = graph.node_count();

        // Parallel edges are counted once per edge, and decremented once per
        // edge below.
        let mut in_degree: Vec<usize> = graph
            .node_indices()
            .map(|idx| graph.neighbors_directed(idx, Direction::Incoming).count())
            .collect();
        let mut levels = vec![0; total];

        let mut queue: VecDeque<NodeIndex> = graph
            .node_indices()
            .filter(|idx| in_degree[idx.index()] == 0)
            .collect();

        let mut processed = 0;
        while let Some(idx) = queue.pop_front() {
            processed += 1;
            let next_level = levels[idx.index()] + 1;

            for next in graph.neighbors_directed(idx, Direction::Outgoing) {
                let slot = next.index();
                in_degree[slot] -= 1;
                levels[slot] = levels[slot].max(next_level);
                if in_degree[slot] == 0 {
                    queue.push_back(next);
                }
            }
        }

        if processed < total {
            return Err(CycleDetected {
                unplaced: total - processed,
                total,
            });
        }

        Ok(levels)
    }

    /// Group graph nodes by level, keeping input order within each row.
    fn group_rows(graph: &DiGraph<&str, ()>, levels: &[usize]) -> Vec<Vec<NodeIndex>> {
        let row_count = levels.iter().max().map_or(0, |&max| max + 1);
        let mut rows = vec![Vec::new(); row_count];

        for idx in graph.node_indices() {
            rows[levels[idx.index()]].push(idx);
        }

        rows
    }

    /// Width of a row holding `count` nodes.
    fn row_width(&self, count: usize) -> f32 {
        count as f32 * (self.node_size.width() + self.horizontal_gap) - self.horizontal_gap
    }

    /// Top-left position for every graph node, indexed by `NodeIndex::index()`.
    fn position_rows(&self, rows: &[Vec<NodeIndex>], node_count: usize) -> Vec<Point> {
        let mut placed = vec![Point::default(); node_count];

        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        let total_width = self.row_width(widest);
        let column_step = self.node_size.width() + self.horizontal_gap;
        let row_step = self.node_size.height() + self.vertical_gap;

        for (level, row) in rows.iter().enumerate() {
            let offset = (total_width - self.row_width(row.len())) / 2.0;
            let y = level as f32 * row_step;

            for (column, &idx) in row.iter().enumerate() {
                placed[idx.index()] = Point::new(offset + column as f32 * column_step, y);
            }
        }

        placed
    }
}
