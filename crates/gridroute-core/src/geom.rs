//! Geometry primitives: [`Point3`] and the adjacency predicates used when
//! turning a cell grid into a graph.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Point3
// ---------------------------------------------------------------------------

/// A 3D integer cell position. `z` is the floor index.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return the point shifted by (dx, dy, dz), or `None` if any
    /// coordinate would leave the `i32` range.
    #[inline]
    pub fn checked_shift(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }

    /// Component-wise sum, `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.checked_shift(rhs.x, rhs.y, rhs.z)
    }

    /// Component-wise difference, `None` on overflow.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_sub(rhs.x)?,
            y: self.y.checked_sub(rhs.y)?,
            z: self.z.checked_sub(rhs.z)?,
        })
    }

    /// Whether both points lie on the same floor.
    #[inline]
    pub const fn same_floor(self, other: Self) -> bool {
        self.z == other.z
    }

    /// Whether `other` is within Chebyshev distance 1 of `self` on the same
    /// floor, diagonals excluded.
    ///
    /// This is the four orthogonal neighbours plus the point itself; cells
    /// of different colours stacked on one position are adjacent too.
    #[inline]
    pub fn is_floor_adjacent(self, other: Self) -> bool {
        if !self.same_floor(other) {
            return false;
        }
        chebyshev(self, other) <= 1 && (self.x == other.x || self.y == other.y)
    }

    /// The positions [`is_floor_adjacent`](Self::is_floor_adjacent) accepts:
    /// the point itself, then up, right, down, left. Positions outside the
    /// `i32` range are left out.
    pub fn floor_adjacent(self) -> impl Iterator<Item = Point3> {
        const DIRS: [(i32, i32); 5] = [(0, 0), (0, -1), (1, 0), (0, 1), (-1, 0)];
        DIRS.into_iter()
            .filter_map(move |(dx, dy)| self.checked_shift(dx, dy, 0))
    }

    /// The positions directly below and above, where they exist.
    pub fn vertical_neighbors(self) -> impl Iterator<Item = Point3> {
        [-1, 1]
            .into_iter()
            .filter_map(move |dz| self.checked_shift(0, 0, dz))
    }

    /// Whether `other` sits directly above or below `self` (same x and y,
    /// floors one apart).
    #[inline]
    pub fn is_vertical_neighbor(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y && self.z.abs_diff(other.z) == 1
    }
}

impl PartialOrd for Point3 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point3 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z
            .cmp(&other.z)
            .then(self.y.cmp(&other.y))
            .then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Chebyshev (L∞) distance between two points, ignoring the floor.
#[inline]
pub fn chebyshev(a: Point3, b: Point3) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point3::new(1, 2, 0);
        let b = Point3::new(3, 4, 1);
        assert_eq!(a.checked_add(b), Some(Point3::new(4, 6, 1)));
        assert_eq!(b.checked_sub(a), Some(Point3::new(2, 2, 1)));
        assert_eq!(a.checked_shift(-1, 0, 2), Some(Point3::new(0, 2, 2)));
    }

    #[test]
    fn arithmetic_at_i32_limits() {
        let max = Point3::new(i32::MAX, 0, i32::MAX);
        let min = Point3::new(i32::MIN, 0, i32::MIN);
        assert_eq!(max.checked_shift(1, 0, 0), None);
        assert_eq!(min.checked_shift(-1, 0, 0), None);
        assert_eq!(max.checked_sub(min), None);
        assert_eq!(max.checked_add(Point3::new(0, 0, 1)), None);
        assert_eq!(max.checked_shift(-1, 0, 0), Some(Point3::new(i32::MAX - 1, 0, i32::MAX)));

        // Out-of-range neighbours are dropped, not wrapped.
        let right: Vec<_> = max.floor_adjacent().collect();
        assert_eq!(right.len(), 4);
        assert!(!right.contains(&Point3::new(i32::MIN, 0, i32::MAX)));
        assert_eq!(max.vertical_neighbors().collect::<Vec<_>>(), vec![Point3::new(i32::MAX, 0, i32::MAX - 1)]);
        assert_eq!(min.vertical_neighbors().collect::<Vec<_>>(), vec![Point3::new(i32::MIN, 0, i32::MIN + 1)]);

        assert!(!max.is_floor_adjacent(Point3::new(i32::MIN, 0, i32::MAX)));
        assert!(!Point3::new(0, 0, i32::MAX).is_vertical_neighbor(Point3::new(0, 0, i32::MIN)));
        assert_eq!(chebyshev(max, min), u32::MAX);
    }

    #[test]
    fn floor_adjacency_excludes_diagonals() {
        let p = Point3::new(5, 5, 0);
        assert!(p.is_floor_adjacent(Point3::new(5, 4, 0)));
        assert!(p.is_floor_adjacent(Point3::new(6, 5, 0)));
        assert!(p.is_floor_adjacent(p));
        assert!(!p.is_floor_adjacent(Point3::new(6, 6, 0)));
        assert!(!p.is_floor_adjacent(Point3::new(4, 4, 0)));
        assert!(!p.is_floor_adjacent(Point3::new(7, 5, 0)));
        // Same (x, y) offset but a different floor.
        assert!(!p.is_floor_adjacent(Point3::new(5, 4, 1)));
    }

    #[test]
    fn floor_adjacent_positions_agree_with_predicate() {
        let p = Point3::new(-2, 3, 4);
        assert_eq!(p.floor_adjacent().count(), 5);
        for q in p.floor_adjacent() {
            assert!(p.is_floor_adjacent(q));
        }
    }

    #[test]
    fn vertical_neighbors() {
        let p = Point3::new(2, 3, 1);
        assert!(p.is_vertical_neighbor(Point3::new(2, 3, 0)));
        assert!(p.is_vertical_neighbor(Point3::new(2, 3, 2)));
        assert!(!p.is_vertical_neighbor(Point3::new(2, 3, 3)));
        assert!(!p.is_vertical_neighbor(Point3::new(2, 4, 2)));
        assert!(!p.is_vertical_neighbor(p));
    }

    #[test]
    fn ordering_is_floor_major() {
        let mut pts = vec![
            Point3::new(1, 0, 1),
            Point3::new(0, 1, 0),
            Point3::new(1, 0, 0),
        ];
        pts.sort();
        assert_eq!(
            pts,
            vec![
                Point3::new(1, 0, 0),
                Point3::new(0, 1, 0),
                Point3::new(1, 0, 1),
            ]
        );
    }

    #[test]
    fn chebyshev_ignores_floor() {
        assert_eq!(chebyshev(Point3::new(0, 0, 0), Point3::new(3, -2, 5)), 3);
    }
}
