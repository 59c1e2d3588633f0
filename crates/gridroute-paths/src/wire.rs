//! JSON request/response model for the route-optimization endpoint.
//!
//! These shapes are the externally observable contract a network layer (or
//! the CLI) wraps around [`find_path`]: a grid of `0`/`1` occupancy values
//! plus `[row, col]` start and end coordinates in, an ordered list of
//! `[row, col]` path cells plus the exploration count out. Routing, CORS and
//! HTTP status mapping live with the wrapping layer, not here.

use gridroute_core::{Coord, Grid};
use serde::{Deserialize, Serialize};

use crate::astar::{PathResult, find_path};
use crate::error::PathError;

/// A route-optimization request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Occupancy rows, `0` free, nonzero blocked. Must be rectangular.
    pub grid: Vec<Vec<u8>>,
    /// Start cell as `[row, col]`.
    pub start: [i32; 2],
    /// End cell as `[row, col]`.
    pub end: [i32; 2],
}

/// A route-optimization response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Path cells as `[row, col]` pairs, start to end inclusive. Empty when
    /// no route exists.
    pub path: Vec<[i32; 2]>,
    /// Cells popped from the search frontier.
    pub nodes_explored: usize,
}

impl From<PathResult> for RouteResponse {
    fn from(result: PathResult) -> Self {
        Self {
            path: result.path.iter().map(|c| [c.row, c.col]).collect(),
            nodes_explored: result.nodes_explored,
        }
    }
}

/// Validate a wire request, run the search, and shape the response.
///
/// Fails with [`PathError::Grid`] when the occupancy rows are ragged and
/// [`PathError::OutOfRange`] when an endpoint lies outside the grid; both
/// belong in a client-error response, never a crash.
pub fn optimize_route(request: &RouteRequest) -> Result<RouteResponse, PathError> {
    let grid = Grid::from_occupancy(&request.grid)?;
    let start = Coord::new(request.start[0], request.start[1]);
    let end = Coord::new(request.end[0], request.end[1]);
    let result = find_path(&grid, start, end)?;
    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use gridroute_core::GridError;

    use super::*;

    #[test]
    fn request_json_shape() {
        let json = r#"{
            "grid": [[0,0,0],[0,1,0],[0,0,0]],
            "start": [0, 0],
            "end": [2, 2]
        }"#;
        let req: RouteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.grid.len(), 3);
        assert_eq!(req.start, [0, 0]);
        assert_eq!(req.end, [2, 2]);
    }

    #[test]
    fn response_json_shape() {
        let resp = RouteResponse {
            path: vec![[0, 0], [1, 0]],
            nodes_explored: 4,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"path":[[0,0],[1,0]],"nodes_explored":4}"#);
    }

    #[test]
    fn optimize_route_end_to_end() {
        let req = RouteRequest {
            grid: vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]],
            start: [0, 0],
            end: [2, 2],
        };
        let resp = optimize_route(&req).unwrap();
        assert_eq!(resp.path.len(), 5);
        assert_eq!(resp.path.first(), Some(&[0, 0]));
        assert_eq!(resp.path.last(), Some(&[2, 2]));
        assert!(resp.nodes_explored > 0);
    }

    #[test]
    fn ragged_grid_is_rejected() {
        let req = RouteRequest {
            grid: vec![vec![0, 0], vec![0]],
            start: [0, 0],
            end: [1, 0],
        };
        let err = optimize_route(&req).unwrap_err();
        assert_eq!(
            err,
            PathError::Grid(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn out_of_range_request() {
        let req = RouteRequest {
            grid: vec![vec![0; 3]; 3],
            start: [5, 5],
            end: [0, 0],
        };
        assert!(matches!(
            optimize_route(&req).unwrap_err(),
            PathError::OutOfRange { .. }
        ));
    }

    #[test]
    fn no_route_is_not_an_error() {
        let req = RouteRequest {
            grid: vec![vec![0, 1], vec![1, 0]],
            start: [0, 0],
            end: [1, 1],
        };
        let resp = optimize_route(&req).unwrap();
        assert!(resp.path.is_empty());
    }
}
