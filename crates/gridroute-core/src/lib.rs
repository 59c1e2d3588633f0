//! **gridroute-core** — Occupancy-grid core types.
//!
//! This crate provides the foundational types used across the *gridroute*
//! workspace: the binary occupancy [`Cell`], the row/column [`Coord`], and
//! the rectangular [`Grid`] with bounds-checked access.

pub mod cell;
pub mod coord;
pub mod grid;

pub use cell::Cell;
pub use coord::Coord;
pub use grid::{Grid, GridError};
