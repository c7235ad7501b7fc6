//! Radial layout engine
//!
//! Places nodes evenly on a circle, in input order, starting at 12 o'clock
//! and going clockwise in screen coordinates. Edges are ignored, so this
//! engine accepts any graph, cyclic or not.

use std::f32::consts::{FRAC_PI_2, TAU};

use log::debug;

use lumo_core::{geometry::Point, graph::Node};

use crate::layout::{MIN_RADIUS, Positions, RADIUS_PER_NODE};

/// Radial layout engine
#[derive(Debug, Clone)]
pub struct Engine {
    min_radius: f32,
    radius_per_node: f32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new radial layout engine with the default radius policy
    pub fn new() -> Self {
        Self {
            min_radius: MIN_RADIUS,
            radius_per_node: RADIUS_PER_NODE,
        }
    }

    /// Set the smallest circle radius
    pub fn set_min_radius(&mut self, radius: f32) -> &mut Self {
        self.min_radius = radius;
        self
    }

    /// Set the radius growth per node
    pub fn set_radius_per_node(&mut self, growth: f32) -> &mut Self {
        self.radius_per_node = growth;
        self
    }

    /// Circle radius for `count` nodes: grows linearly with the node count,
    /// but never drops below the configured minimum.
    pub fn radius(&self, count: usize) -> f32 {
        self.min_radius.max(count as f32 * self.radius_per_node)
    }

    /// Calculate positions for `nodes` around a circle centered at
    /// `(radius, radius)`.
    ///
    /// Node `i` of `n` sits at angle `2πi/n − π/2`. Duplicate ids keep their
    /// first slot.
    pub fn calculate(&self, nodes: &[Node]) -> Positions {
        let count = nodes.len();
        let radius = self.radius(count);
        debug!(nodes = count, radius = radius; "Calculating radial layout");

        let mut positions = Positions::with_capacity(count);
        for (i, node) in nodes.iter().enumerate() {
            let angle = TAU * i as f32 / count as f32 - FRAC_PI_2;
            let point = Point::new(radius + radius * angle.cos(), radius + radius * angle.sin());
            positions.entry(node.id().to_string()).or_insert(point);
        }

        positions
    }
}
