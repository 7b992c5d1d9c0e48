//! Sorted-axis spatial index.
//!
//! Holds one ordering of the point handles per axis plus the reverse lookup
//! from a handle to its slot in each ordering. The position of a handle in
//! the caller's input list is the handle itself, so labels can be written
//! straight back without a third table.

use super::point::{AXES, Point, PointId};

/// Points pre-sorted on each axis
///
/// Built once per clustering call and never modified afterwards.
#[derive(Debug)]
pub struct SpatialIndex<'a> {
    points: &'a [Point],
    /// Handles sorted ascending by coordinate, one ordering per axis
    sorted: [Vec<PointId>; AXES],
    /// `pos[axis][id]` is the slot of `id` within `sorted[axis]`
    pos: [Vec<usize>; AXES],
}

impl<'a> SpatialIndex<'a> {
    /// Builds the index over `points`.
    ///
    /// Ties on an axis keep input order (the sort is stable), so the layout
    /// is fully determined by the input.
    pub fn new(points: &'a [Point]) -> Self {
        let sorted: [Vec<PointId>; AXES] = std::array::from_fn(|axis| {
            let mut ids: Vec<PointId> = (0..points.len()).collect();
            ids.sort_by_key(|&id| points[id].coord(axis));
            ids
        });

        let pos = std::array::from_fn(|axis| {
            let mut slots = vec![0; points.len()];
            for (slot, &id) in sorted[axis].iter().enumerate() {
                slots[id] = slot;
            }
            slots
        });

        SpatialIndex {
            points,
            sorted,
            pos,
        }
    }

    /// Number of indexed points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the index holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point behind a handle
    ///
    /// # Panics
    ///
    /// Panics if `id` was not part of the indexed set.
    pub fn point(&self, id: PointId) -> Point {
        match self.points.get(id) {
            Some(&p) => p,
            None => panic!("point {id} is not in the index of {} points", self.len()),
        }
    }

    /// Slot of `id` within the ordering of `axis`
    ///
    /// # Panics
    ///
    /// Panics if `id` was not part of the indexed set.
    pub fn position(&self, axis: usize, id: PointId) -> usize {
        match self.pos[axis].get(id) {
            Some(&slot) => slot,
            None => panic!("point {id} is not in the index of {} points", self.len()),
        }
    }

    /// Handles sorted by the coordinate on `axis`
    pub fn sorted(&self, axis: usize) -> &[PointId] {
        &self.sorted[axis]
    }
}
