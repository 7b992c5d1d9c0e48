use std::fmt;
use std::num::NonZeroU32;

/// Number of coordinate axes of a [`Point`].
pub const AXES: usize = 2;

/// Point on the integer grid
///
/// The point is stored as `[x, y]` where:
/// - `[0]` is x
/// - `[1]` is y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point(pub [i32; AXES]);

/// Stable handle of a point: its position in the caller's input list.
///
/// Two points with equal coordinates still have distinct handles.
pub type PointId = usize;

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Identifier of a cluster; the first cluster found is 1.
pub type ClusterId = NonZeroU32;

/// One cluster found by DBSCAN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Cluster ID
    pub id: ClusterId,
    /// Handles of points belonging to this cluster, in input order
    pub points: Vec<PointId>,
}

impl Point {
    /// Creates a point from its two coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self([x, y])
    }

    /// Horizontal coordinate
    pub const fn x(&self) -> i32 {
        self.0[0]
    }

    /// Vertical coordinate
    pub const fn y(&self) -> i32 {
        self.0[1]
    }

    /// Coordinate on `axis` (0 for x, 1 for y).
    pub const fn coord(&self, axis: usize) -> i32 {
        self.0[axis]
    }

    /// Returns true when `other` lies within `eps` of this point on every axis.
    ///
    /// Computed in `i64`, so no combination of `i32` coordinates overflows.
    pub fn within(&self, other: &Point, eps: i64) -> bool {
        (0..AXES).all(|axis| {
            (i64::from(self.coord(axis)) - i64::from(other.coord(axis))).abs() <= eps
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x(), self.y())
    }
}

impl Cluster {
    /// Calculates the bounding box of the cluster
    ///
    /// Returns `(min, max)` corners, or `None` for a cluster without points.
    pub fn bounds(&self, points: &[Point]) -> Option<(Point, Point)> {
        let mut members = self.points.iter().filter_map(|&i| points.get(i));
        let first = *members.next()?;
        let (mut min, mut max) = (first, first);

        for pt in members {
            for axis in 0..AXES {
                min.0[axis] = min.0[axis].min(pt.0[axis]);
                max.0[axis] = max.0[axis].max(pt.0[axis]);
            }
        }

        Some((min, max))
    }
}
