use serde::{Deserialize, Serialize};

use crate::{Contains, Point, Size};

/// An axis-aligned rectangle with its origin at the bottom left, y pointing up.
///
/// Meant to be sorted: `left < right` and `bottom < top`.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// One of the four boundary lines of [`Bounds`], in candidate generation order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, derive_more::Display)]
pub enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Bottom, Edge::Top];
}

impl Bounds {
    /// The 1024x768 screen.
    pub const SCREEN: Self = Self {
        left: 0.0,
        right: 1024.0,
        bottom: 0.0,
        top: 768.0,
    };

    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn from_size(size: impl Into<Size>) -> Self {
        let size = size.into();
        Self::new(0.0, size.width, 0.0, size.height)
    }

    pub fn is_valid(&self) -> bool {
        // Written positively so that NaN edges are rejected.
        self.left < self.right && self.bottom < self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// The first edge in [`Edge::ALL`] order the point lies exactly on.
    pub fn edge_of(&self, p: Point) -> Option<Edge> {
        if !self.contains(p) {
            return None;
        }
        Edge::ALL.into_iter().find(|edge| match edge {
            Edge::Left => p.x == self.left,
            Edge::Right => p.x == self.right,
            Edge::Bottom => p.y == self.bottom,
            Edge::Top => p.y == self.top,
        })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::SCREEN
    }
}

impl From<Size> for Bounds {
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

impl Contains<Point> for Bounds {
    fn contains(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

/// Inclusive on all four edges.
impl Contains<&Point> for Bounds {
    fn contains(&self, p: &Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }
}
