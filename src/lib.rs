//! DBSCAN clustering for points on an integer 2D grid.
//!
//! Neighborhoods are axis-aligned squares of radius `epsilon`, answered by
//! intersecting two coordinate-sorted orderings of the input instead of a
//! pairwise distance scan. Only integer arithmetic is used.
//!
//! ```
//! use grid_dbscan::{Dbscan, Label, Point};
//!
//! let points = vec![Point([1, 1]), Point([2, 1]), Point([1, 2]), Point([9, 9])];
//! let clustering = Dbscan::new(1, 2)?.cluster(&points);
//! assert_eq!(clustering.cluster_count(), 1);
//! assert_eq!(clustering.labels()[3], Label::Noise);
//! # Ok::<(), grid_dbscan::ClusterError>(())
//! ```

pub mod cluster;

pub use cluster::{
    Cluster, ClusterError, ClusterId, Clustering, Dbscan, Label, Point, PointId, PointList,
    db_scan,
};
