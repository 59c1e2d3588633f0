use std::collections::BinaryHeap;

use gridroute_core::{Coord, Grid};
use log::{debug, trace};

use crate::distance::manhattan;
use crate::error::PathError;

/// Outcome of a route query.
///
/// An empty `path` means no route exists (unreachable end, blocked endpoint,
/// or empty grid). `nodes_explored` counts every cell popped from the search
/// frontier, stale duplicates included, so identical inputs always report
/// identical counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Start-to-end path, both endpoints inclusive. Empty if no path exists.
    pub path: Vec<Coord>,
    /// Number of frontier pops performed during the search.
    pub nodes_explored: usize,
}

impl PathResult {
    #[inline]
    fn empty(nodes_explored: usize) -> Self {
        Self {
            path: Vec::new(),
            nodes_explored,
        }
    }

    /// Whether a route was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Internal search bookkeeping
// ---------------------------------------------------------------------------

/// Per-cell search record: best known cost from start and predecessor link.
#[derive(Clone)]
struct Node {
    g: i32,
    parent: usize,
    discovered: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            discovered: false,
        }
    }
}

/// Frontier entry, min-ordered by `f` for use in `BinaryHeap`.
///
/// Equal-`f` entries pop in insertion order (`seq` is monotonically
/// increasing), keeping the search fully deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    f: i32,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, earliest
        // insertion winning ties.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// A* search
// ---------------------------------------------------------------------------

/// Compute the shortest 4-connected path from `start` to `end` using A*.
///
/// Unit edge cost, Manhattan heuristic. Returns the full path including both
/// endpoints together with the frontier-pop count. Ordinary "no route"
/// outcomes (empty grid, blocked endpoint, unreachable end) come back as an
/// empty path; only out-of-range coordinates are an error.
pub fn find_path(grid: &Grid, start: Coord, end: Coord) -> Result<PathResult, PathError> {
    trace!(
        "find_path: start={start} end={end} grid={}x{}",
        grid.rows(),
        grid.cols()
    );

    if grid.is_empty() {
        return Ok(PathResult::empty(0));
    }

    let out_of_range = |coord: Coord| PathError::OutOfRange {
        coord,
        rows: grid.rows(),
        cols: grid.cols(),
    };
    let Some(start_idx) = grid.index_of(start) else {
        debug!("rejected out-of-range start {start}");
        return Err(out_of_range(start));
    };
    let Some(end_idx) = grid.index_of(end) else {
        debug!("rejected out-of-range end {end}");
        return Err(out_of_range(end));
    };

    if !grid.is_free(start) || !grid.is_free(end) {
        debug!("start or end blocked, no search attempted");
        return Ok(PathResult::empty(0));
    }

    let mut nodes = vec![Node::default(); grid.len()];
    nodes[start_idx] = Node {
        g: 0,
        parent: usize::MAX,
        discovered: true,
    };

    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    open.push(Entry {
        f: manhattan(start, end),
        seq: 0,
        idx: start_idx,
    });
    let mut next_seq: u64 = 1;

    let mut nodes_explored: usize = 0;
    let mut found = false;

    while let Some(current) = open.pop() {
        // Every pop counts, stale duplicates included.
        nodes_explored += 1;

        if current.idx == end_idx {
            found = true;
            break;
        }

        let current_g = nodes[current.idx].g;
        let current_coord = grid.coord_of(current.idx);

        for neighbor in current_coord.neighbors_4() {
            if !grid.is_free(neighbor) {
                continue;
            }
            let Some(ni) = grid.index_of(neighbor) else {
                continue;
            };

            let tentative_g = current_g + 1;
            let node = &mut nodes[ni];
            if node.discovered && tentative_g >= node.g {
                continue;
            }
            node.discovered = true;
            node.g = tentative_g;
            node.parent = current.idx;

            open.push(Entry {
                f: tentative_g + manhattan(neighbor, end),
                seq: next_seq,
                idx: ni,
            });
            next_seq += 1;
        }
    }

    if !found {
        debug!("frontier exhausted after {nodes_explored} pops, no route");
        return Ok(PathResult::empty(nodes_explored));
    }

    // Reconstruct by walking predecessor links back from the end.
    let mut path = Vec::new();
    let mut ci = end_idx;
    while ci != usize::MAX {
        path.push(grid.coord_of(ci));
        ci = nodes[ci].parent;
    }
    path.reverse();

    trace!(
        "route found: {} cells, {} pops",
        path.len(),
        nodes_explored
    );
    Ok(PathResult {
        path,
        nodes_explored,
    })
}
