//! Epsilon-neighborhood queries over a [`SpatialIndex`].

use bitvec::prelude::*;

use super::index::SpatialIndex;
use super::point::{Point, PointId};

/// Axis-aligned range query against a sorted-axis index
///
/// The x-band around the center is collected first and marked in a bit set;
/// the y-band scan then keeps only marked handles. The scratch state is
/// reused across calls, so a query costs the size of the two bands rather
/// than the number of indexed points.
pub struct RangeQuery<'i, 'p> {
    index: &'i SpatialIndex<'p>,
    eps: i64,
    in_band: BitVec,
    band: Vec<PointId>,
}

impl<'i, 'p> RangeQuery<'i, 'p> {
    /// Creates a query with radius `eps` on every axis.
    pub fn new(index: &'i SpatialIndex<'p>, eps: u32) -> Self {
        RangeQuery {
            index,
            eps: i64::from(eps),
            in_band: bitvec![0; index.len()],
            band: Vec::new(),
        }
    }

    /// Finds all points within `eps` of `center` on both axes
    ///
    /// `center` itself is never part of the result. Points that merely share
    /// its coordinates are. To avoid allocation, the `nodes` vector can be
    /// pre-allocated and re-used across calls; it is cleared first.
    ///
    /// # Panics
    ///
    /// Panics if `center` is not a handle of the indexed set.
    pub fn neighbors(&mut self, center: PointId, mut nodes: Vec<PointId>) -> Vec<PointId> {
        nodes.clear();
        let index = self.index;
        let eps = self.eps;
        let origin = index.point(center);

        for id in band(index, 0, center, origin, eps) {
            self.in_band.set(id, true);
            self.band.push(id);
        }

        nodes.extend(band(index, 1, center, origin, eps).filter(|&id| self.in_band[id]));

        for &id in &self.band {
            self.in_band.set(id, false);
        }
        self.band.clear();

        nodes
    }
}

/// Handles whose coordinate on `axis` lies within `eps` of `origin`
///
/// Scans outward from the slot of `center`, leftward first, stopping on each
/// side at the first coordinate outside the range.
fn band<'a>(
    index: &'a SpatialIndex<'_>,
    axis: usize,
    center: PointId,
    origin: Point,
    eps: i64,
) -> impl Iterator<Item = PointId> + 'a {
    let sorted = index.sorted(axis);
    let slot = index.position(axis, center);
    let low = i64::from(origin.coord(axis)) - eps;
    let high = i64::from(origin.coord(axis)) + eps;
    let coord = move |id: PointId| i64::from(index.point(id).coord(axis));

    let left = sorted[..slot]
        .iter()
        .rev()
        .copied()
        .take_while(move |&id| coord(id) >= low);
    let right = sorted[slot + 1..]
        .iter()
        .copied()
        .take_while(move |&id| coord(id) <= high);

    left.chain(right)
}

/// Simple O(N) way to find points in neighbourhood
///
/// This returns the same set as [`RangeQuery::neighbors`], in input order.
///
/// # Panics
///
/// Panics if `center` is not a handle into `points`.
pub fn region_query(points: &[Point], center: PointId, eps: u32) -> Vec<PointId> {
    let eps = i64::from(eps);
    let origin = match points.get(center) {
        Some(&p) => p,
        None => panic!("point {center} is not in the list of {} points", points.len()),
    };

    points
        .iter()
        .enumerate()
        .filter(|&(id, p)| id != center && p.within(&origin, eps))
        .map(|(id, _)| id)
        .collect()
}
