//! Module cluster implements DBSCAN clustering on integer (x, y) points using
//! two coordinate-sorted orderings instead of a spatial tree
pub mod dbscan;
pub mod error;
pub mod expand;
pub mod index;
pub mod point;
pub mod query;

#[cfg(test)]
mod index_test;
#[cfg(test)]
mod point_test;
#[cfg(test)]
mod test_support;

pub use dbscan::{Clustering, Dbscan, Label, db_scan};
pub use error::ClusterError;
pub use expand::{Hull, expand};
pub use index::SpatialIndex;
pub use point::{AXES, Cluster, ClusterId, Point, PointId, PointList};
pub use query::{RangeQuery, region_query};
