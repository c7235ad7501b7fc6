//! Configuration types for Lumo layout.
//!
//! This module provides the configuration structures that control node box
//! dimensions, spacing, and the default layout engine. All types implement
//! [`serde::Deserialize`] so they can be loaded from external sources, and
//! every field falls back to its default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`LayoutConfig`] - Node size, gaps, viewport padding and default [`LayoutEngine`].
//! - [`RadialConfig`] - Radius floor and per-node growth for the radial engine.
//!
//! # Example
//!
//! ```
//! # use lumo::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().node_size().width(), 130.0);
//! assert!(config.layout().validate().is_ok());
//! ```

use serde::Deserialize;

use lumo_core::{geometry::Size, graph::LayoutEngine};

use crate::layout::{
    H_GAP, MIN_RADIUS, NODE_HEIGHT, NODE_WIDTH, PADDING, RADIUS_PER_NODE, V_GAP,
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Geometry and engine selection for layouts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of every node box.
    node_width: f32,

    /// Height of every node box.
    node_height: f32,

    /// Horizontal space between neighbouring nodes in a row.
    horizontal_gap: f32,

    /// Vertical space between rows.
    vertical_gap: f32,

    /// Padding added around the bounds when building a viewport.
    padding: f32,

    /// Engine used when the diagram carries no hint.
    engine: LayoutEngine,

    /// Radial engine settings.
    radial: RadialConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            horizontal_gap: H_GAP,
            vertical_gap: V_GAP,
            padding: PADDING,
            engine: LayoutEngine::default(),
            radial: RadialConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Returns the node box size.
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    pub fn horizontal_gap(&self) -> f32 {
        self.horizontal_gap
    }

    pub fn vertical_gap(&self) -> f32 {
        self.vertical_gap
    }

    /// Returns the viewport padding.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the default [`LayoutEngine`].
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Returns the radial engine settings.
    pub fn radial(&self) -> &RadialConfig {
        &self.radial
    }

    /// Returns a copy with the default engine replaced.
    pub fn with_engine(mut self, engine: LayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Returns a copy with the node box size replaced.
    pub fn with_node_size(mut self, size: Size) -> Self {
        self.node_width = size.width();
        self.node_height = size.height();
        self
    }

    /// Checks that every dimension is finite, node sizes are positive, and
    /// gaps, padding and radii are not negative.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("layout.node_width", self.node_width),
            ("layout.node_height", self.node_height),
        ];
        let non_negative = [
            ("layout.horizontal_gap", self.horizontal_gap),
            ("layout.vertical_gap", self.vertical_gap),
            ("layout.padding", self.padding),
            ("layout.radial.min_radius", self.radial.min_radius),
            ("layout.radial.radius_per_node", self.radial.radius_per_node),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must not be negative, got {value}"));
            }
        }
        Ok(())
    }
}

/// Radius policy for the radial engine: `max(min_radius, n * radius_per_node)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RadialConfig {
    min_radius: f32,
    radius_per_node: f32,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            min_radius: MIN_RADIUS,
            radius_per_node: RADIUS_PER_NODE,
        }
    }
}

impl RadialConfig {
    pub fn new(min_radius: f32, radius_per_node: f32) -> Self {
        Self {
            min_radius,
            radius_per_node,
        }
    }

    pub fn min_radius(&self) -> f32 {
        self.min_radius
    }

    pub fn radius_per_node(&self) -> f32 {
        self.radius_per_node
    }
}
