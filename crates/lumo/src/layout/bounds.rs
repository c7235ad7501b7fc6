//! Bounding box over placed node boxes.

use lumo_core::geometry::{Bounds, Size};

use super::Positions;

/// Bounds reported for an empty layout, so renderers never get a degenerate
/// viewport.
pub const DEFAULT_BOUNDS: Bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);

/// Smallest box containing every node box of `size` placed at `positions`.
///
/// Returns [`DEFAULT_BOUNDS`] when `positions` is empty. Padding is left to
/// the caller (see [`Bounds::add_padding`]).
pub fn bounds_of(positions: &Positions, size: Size) -> Bounds {
    positions
        .values()
        .map(|&top_left| Bounds::new_from_top_left(top_left, size))
        .reduce(|acc, bounds| acc.merge(&bounds))
        .unwrap_or(DEFAULT_BOUNDS)
}
