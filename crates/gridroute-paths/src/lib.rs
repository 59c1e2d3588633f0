//! **gridroute-paths** — shortest-path search on binary occupancy grids.
//!
//! This crate implements the route-optimization core of the portfolio
//! backend:
//!
//! - **A\*** shortest-path search ([`find_path`]) — 4-directional movement,
//!   unit edge cost, Manhattan heuristic
//! - the [`PathError`] taxonomy separating contract violations from ordinary
//!   "no path" outcomes
//! - the JSON request/response model ([`wire`]) a network layer or CLI wraps
//!
//! The search is a pure function over one grid snapshot: no shared state, no
//! I/O beyond `log` diagnostics, nothing outliving a call.

mod astar;
mod distance;
mod error;
pub mod wire;

pub use astar::{PathResult, find_path};
pub use distance::manhattan;
pub use error::PathError;
