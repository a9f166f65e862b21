//! The [`Node`] type: a cell position plus its colour label.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geom::Point3;

/// A graph vertex: one extracted cell.
///
/// Identity is structural over position and colour, so the same position
/// with two different colours yields two distinct nodes. Ordering is by
/// position (floor, row, column) and then colour, which gives the search
/// engine a reproducible tie-break.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32, i32, Color)", into = "(i32, i32, i32, Color)")]
pub struct Node {
    pub pos: Point3,
    pub color: Color,
}

impl Node {
    /// Create a node from raw coordinates and a colour.
    #[inline]
    pub fn new(x: i32, y: i32, z: i32, color: impl Into<Color>) -> Self {
        Self {
            pos: Point3::new(x, y, z),
            color: color.into(),
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.pos.z
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.color)
    }
}

impl<C: Into<Color>> From<(i32, i32, i32, C)> for Node {
    fn from((x, y, z, color): (i32, i32, i32, C)) -> Self {
        Self::new(x, y, z, color)
    }
}

impl From<Node> for (i32, i32, i32, Color) {
    fn from(n: Node) -> Self {
        (n.pos.x, n.pos.y, n.pos.z, n.color)
    }
}
