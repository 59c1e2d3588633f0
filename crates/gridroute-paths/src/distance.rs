use gridroute_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Admissible and consistent for unit-cost 4-connected grids, so A* pops the
/// end cell with an optimal cost the first time.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
