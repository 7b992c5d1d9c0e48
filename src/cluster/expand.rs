use bitvec::prelude::*;

use super::point::PointId;
use super::query::RangeQuery;

/// Density-reachable hull produced by [`expand`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hull {
    /// Handles in the hull, in discovery order
    pub members: Vec<PointId>,
    /// Number of neighborhood queries issued while growing the hull
    pub iterations: usize,
}

/// Grows the hull reachable from `seeds`
///
/// Every seed enters the hull and the work stack. Each popped handle has its
/// neighborhood queried, and neighbors not yet in the hull are added to both.
/// Core status is not re-checked for intermediate points. Each handle is
/// pushed at most once, so the loop runs at most once per indexed point.
///
/// `in_hull` must be all zeros and as long as the index; it is left all zeros.
pub fn expand(
    query: &mut RangeQuery<'_, '_>,
    seeds: &[PointId],
    in_hull: &mut BitSlice,
) -> Hull {
    let mut hull = Hull::default();
    let mut stack = Vec::with_capacity(seeds.len());

    for &id in seeds {
        if !in_hull[id] {
            in_hull.set(id, true);
            hull.members.push(id);
            stack.push(id);
        }
    }

    let mut neighbors = Vec::new();
    while let Some(reachable) = stack.pop() {
        hull.iterations += 1;
        neighbors = query.neighbors(reachable, neighbors);
        for &p in &neighbors {
            if !in_hull[p] {
                in_hull.set(p, true);
                hull.members.push(p);
                stack.push(p);
            }
        }
    }

    for &id in &hull.members {
        in_hull.set(id, false);
    }

    hull
}
