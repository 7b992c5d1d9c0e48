//! Generators and brute-force oracles shared by the cluster tests.

use quickcheck::{Arbitrary, Gen};

use super::{Label, Point, PointId, region_query};

const MAX_POINTS: usize = 48;
const SPAN: i32 = 12;

/// Small random point cloud, dense enough to produce clusters and duplicates
#[derive(Debug, Clone)]
pub struct Cloud(pub Vec<Point>);

impl Arbitrary for Cloud {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % (g.size().min(MAX_POINTS) + 1);
        let coord = |g: &mut Gen| i32::arbitrary(g).rem_euclid(2 * SPAN + 1) - SPAN;
        Cloud((0..n).map(|_| Point([coord(g), coord(g)])).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let raw: Vec<(i32, i32)> = self.0.iter().map(|p| (p.x(), p.y())).collect();
        Box::new(
            raw.shrink()
                .map(|v| Cloud(v.into_iter().map(|(x, y)| Point([x, y])).collect())),
        )
    }
}

/// Valid clustering parameters in a range that matters for [`Cloud`]
#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub eps: i32,
    pub min_points: i32,
}

impl Arbitrary for Params {
    fn arbitrary(g: &mut Gen) -> Self {
        Params {
            eps: 1 + i32::arbitrary(g).rem_euclid(4),
            min_points: 1 + i32::arbitrary(g).rem_euclid(5),
        }
    }
}

/// Cluster label rewritten as the smallest handle of its cluster
///
/// Two labelings induce the same partition iff their canonical forms match.
pub fn canonical(labels: &[Label]) -> Vec<Option<PointId>> {
    labels
        .iter()
        .map(|&label| match label {
            Label::Cluster(id) => labels.iter().position(|&l| l == Label::Cluster(id)),
            _ => None,
        })
        .collect()
}

/// Expected partition, computed by brute force
///
/// Clusters are the connected components of the neighbor graph that contain
/// at least one core point; every other point is noise.
pub fn oracle(points: &[Point], eps: u32, min_points: usize) -> Vec<Option<PointId>> {
    let n = points.len();
    let neighbors: Vec<Vec<PointId>> = (0..n).map(|i| region_query(points, i, eps)).collect();

    let mut component = vec![usize::MAX; n];
    for start in 0..n {
        if component[start] != usize::MAX {
            continue;
        }
        component[start] = start;
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            for &q in &neighbors[p] {
                if component[q] == usize::MAX {
                    component[q] = start;
                    stack.push(q);
                }
            }
        }
    }

    let has_core = |c: usize| (0..n).any(|i| component[i] == c && neighbors[i].len() >= min_points);
    (0..n)
        .map(|i| Some(component[i]).filter(|&c| has_core(c)))
        .collect()
}

/// Visiting order derived from arbitrary sort keys
pub fn order_from_keys(n: usize, keys: &[u32]) -> Vec<PointId> {
    let mut order: Vec<PointId> = (0..n).collect();
    if !keys.is_empty() {
        order.sort_by_key(|&i| (keys[i % keys.len()], i));
    }
    order
}
