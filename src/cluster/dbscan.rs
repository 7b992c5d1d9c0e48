use std::fmt;

use bitvec::prelude::*;
use tracing::{debug, instrument, trace};

use super::error::ClusterError;
use super::expand::expand;
use super::index::SpatialIndex;
use super::point::{Cluster, ClusterId, Point, PointId};
use super::query::RangeQuery;

// DBSCAN on the integer grid:
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    while some point of D is unclassified
//       take an unclassified point P and mark it classified
//       NeighborPts = rangeQuery(P, eps)
//       if sizeof(NeighborPts) >= MinPts
//          C = next cluster
//          add P to cluster C
//          for each point P' in hull(NeighborPts)
//             add P' to cluster C (even if it was NOISE)
//             mark P' classified
//       else
//          mark P as NOISE
//
// hull(S)
//    closure of S under rangeQuery, core status of members is not checked
//
// rangeQuery(P, eps)
//    all other points with |dx| <= eps and |dy| <= eps

/// Final (or in-progress) classification of one point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Label {
    /// Not classified yet; never present in a finished [`Clustering`]
    #[default]
    Unassigned,
    /// Not density-reachable from any core point
    Noise,
    /// Member of the given cluster
    Cluster(ClusterId),
}

impl Label {
    /// Integer code: `0` unassigned, `-1` noise, `k` for cluster `k`.
    pub fn code(self) -> i64 {
        match self {
            Label::Unassigned => 0,
            Label::Noise => -1,
            Label::Cluster(id) => i64::from(id.get()),
        }
    }

    /// Cluster of the point, if any
    pub fn cluster(self) -> Option<ClusterId> {
        match self {
            Label::Cluster(id) => Some(id),
            _ => None,
        }
    }

    /// Returns true for [`Label::Noise`]
    pub fn is_noise(self) -> bool {
        self == Label::Noise
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Result of one clustering run
///
/// `labels()[i]` is the label of the i-th input point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clustering {
    labels: Vec<Label>,
    cluster_count: u32,
}

impl Clustering {
    /// Per-point labels, in input order
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Consumes the result, returning the labels
    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }

    /// Per-point integer codes, see [`Label::code`]
    pub fn codes(&self) -> Vec<i64> {
        self.labels.iter().map(|l| l.code()).collect()
    }

    /// Number of clusters found
    pub fn cluster_count(&self) -> usize {
        self.cluster_count as usize
    }

    /// Handles of the noise points, in input order
    pub fn noise(&self) -> Vec<PointId> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_noise())
            .map(|(i, _)| i)
            .collect()
    }

    /// Clusters ordered by id, members in input order
    pub fn clusters(&self) -> Vec<Cluster> {
        let mut clusters: Vec<Cluster> = (1..=self.cluster_count)
            .filter_map(ClusterId::new)
            .map(|id| Cluster {
                id,
                points: Vec::new(),
            })
            .collect();

        for (i, label) in self.labels.iter().enumerate() {
            if let Some(id) = label.cluster() {
                if let Some(cluster) = clusters.get_mut(id.get() as usize - 1) {
                    cluster.points.push(i);
                }
            }
        }

        clusters
    }
}

/// DBSCAN clusterer for integer grid points
///
/// A point is a core point iff its `epsilon`-neighborhood (excluding the
/// point itself) holds at least `min_points` points. The neighborhood is the
/// square `[x - epsilon, x + epsilon] x [y - epsilon, y + epsilon]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dbscan {
    eps: u32,
    min_points: usize,
}

impl Dbscan {
    /// Validates the parameters and creates a clusterer
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError`] if `epsilon` or `min_points` is not positive.
    pub fn new(epsilon: i32, min_points: i32) -> Result<Self, ClusterError> {
        let eps = u32::try_from(epsilon)
            .ok()
            .filter(|&e| e > 0)
            .ok_or(ClusterError::InvalidEpsilon { epsilon })?;
        let min = usize::try_from(min_points)
            .ok()
            .filter(|&m| m > 0)
            .ok_or(ClusterError::InvalidMinPoints { min_points })?;

        Ok(Dbscan {
            eps,
            min_points: min,
        })
    }

    /// Neighborhood radius
    pub fn epsilon(&self) -> u32 {
        self.eps
    }

    /// Core-point threshold
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Clusters `points`, taking unclassified points in input order
    ///
    /// Cluster ids are therefore deterministic for a given input.
    pub fn cluster(&self, points: &[Point]) -> Clustering {
        self.cluster_in_order(points, 0..points.len())
    }

    /// Clusters `points`, taking unclassified points in the given order
    ///
    /// Handles that are out of range or already classified are skipped.
    /// Points `order` never names are taken afterwards in input order. The
    /// partition does not depend on the order; only the numbering does.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` clusters are formed.
    #[instrument(
        level = "debug",
        skip_all,
        fields(points = points.len(), eps = self.eps, min_points = self.min_points)
    )]
    pub fn cluster_in_order<I>(&self, points: &[Point], order: I) -> Clustering
    where
        I: IntoIterator<Item = PointId>,
    {
        let n = points.len();
        let index = SpatialIndex::new(points);
        let mut query = RangeQuery::new(&index, self.eps);

        let mut labels = vec![Label::Unassigned; n];
        let mut unclassified = bitvec![1; n];
        let mut remaining = n;
        let mut in_hull = bitvec![0; n];
        let mut neighbors = Vec::new();
        let mut cluster_count = 0u32;

        let picks = order.into_iter().filter(|&id| id < n).chain(0..n);
        for p in picks {
            if remaining == 0 {
                break;
            }
            if !unclassified[p] {
                continue;
            }
            unclassified.set(p, false);
            remaining -= 1;

            neighbors = query.neighbors(p, neighbors);
            if neighbors.len() < self.min_points {
                // may still be absorbed by a later cluster
                labels[p] = Label::Noise;
                trace!(point = p, neighbors = neighbors.len(), "provisional noise");
                continue;
            }

            let id = next_cluster_id(cluster_count);
            cluster_count = id.get();
            labels[p] = Label::Cluster(id);

            let hull = expand(&mut query, &neighbors, &mut in_hull);
            for &q in &hull.members {
                debug_assert!(
                    !matches!(labels[q], Label::Cluster(other) if other != id),
                    "point {q} reached from two clusters"
                );
                labels[q] = Label::Cluster(id);
                if unclassified[q] {
                    unclassified.set(q, false);
                    remaining -= 1;
                }
            }
            debug!(
                cluster = id.get(),
                seed = p,
                size = hull.members.len(),
                queries = hull.iterations,
                "cluster formed"
            );
        }

        debug_assert!(labels.iter().all(|&l| l != Label::Unassigned));

        let clustering = Clustering {
            labels,
            cluster_count,
        };
        debug!(
            clusters = clustering.cluster_count(),
            noise = clustering.labels.iter().filter(|l| l.is_noise()).count(),
            "clustering finished"
        );
        clustering
    }
}

fn next_cluster_id(formed: u32) -> ClusterId {
    match formed.checked_add(1).and_then(ClusterId::new) {
        Some(id) => id,
        None => panic!("cluster id space exhausted after {formed} clusters"),
    }
}

/// Clusters incoming points using DBSCAN algorithm
///
/// # Arguments
///
/// * `points` - List of points to cluster
/// * `epsilon` - Neighborhood radius, applied per axis
/// * `min_points` - Minimum number of neighbors of a core point
///
/// # Returns
///
/// One label per input point, `labels[i]` belonging to `points[i]`.
///
/// # Errors
///
/// Returns [`ClusterError`] if either parameter is not positive.
pub fn db_scan(points: &[Point], epsilon: i32, min_points: i32) -> Result<Vec<Label>, ClusterError> {
    Ok(Dbscan::new(epsilon, min_points)?.cluster(points).into_labels())
}
