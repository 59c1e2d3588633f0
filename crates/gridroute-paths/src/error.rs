use gridroute_core::{Coord, GridError};
use thiserror::Error;

/// Failure modes of a route query.
///
/// Only malformed input is an error. "No path exists", blocked endpoints,
/// and empty grids are ordinary outcomes encoded as an empty path in
/// [`PathResult`](crate::PathResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Start or end coordinate lies outside the grid.
    #[error("coordinate {coord} out of range for a {rows}x{cols} grid")]
    OutOfRange {
        coord: Coord,
        rows: usize,
        cols: usize,
    },

    /// The supplied occupancy rows do not form a rectangular grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}
