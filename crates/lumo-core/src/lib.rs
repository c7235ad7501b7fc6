//! Lumo Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Lumo layout
//! engine and its callers. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Graph**: The node/edge model handed to the layout engine ([`graph`] module)

pub mod geometry;
pub mod graph;
