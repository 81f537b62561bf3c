//! Reference nodes for the exchange.

use std::f64::consts::PI;
use std::ops::Deref;

use crate::utils::Interval;

/// Computes `count` Chebyshev nodes of the first kind over the interval.
///
/// Node `k` (for `k = 1..=count`) sits at the midpoint plus the radius times
/// `cos((2k - 1)π / 2count)`, so the nodes come out in *descending* order.
pub fn chebyshev_nodes(interval: &Interval, count: usize) -> Vec<f64> {
    let mid = interval.midpoint();
    let rad = interval.radius();
    let n = count as f64;

    (1..=count)
        .map(|k| {
            let theta = (2 * k - 1) as f64 * PI / (2.0 * n);
            mid + rad * theta.cos()
        })
        .collect()
}

/// An ascending sequence of nodes together with its alternating sign
/// pattern.
///
/// The sign attached to each node depends only on its rank, so the nodes are
/// sorted on construction and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSet {
    nodes: Vec<f64>,
}

impl NodeSet {
    /// Sorts `nodes` into ascending order.
    pub fn new(mut nodes: Vec<f64>) -> NodeSet {
        nodes.sort_by(f64::total_cmp);

        NodeSet { nodes }
    }

    /// The initial node set: `count` Chebyshev nodes, sorted.
    pub fn chebyshev(interval: &Interval, count: usize) -> NodeSet {
        NodeSet::new(chebyshev_nodes(interval, count))
    }

    /// The node set for the next exchange: interior extrema of the error
    /// curve together with both interval endpoints.
    pub fn from_extrema(interval: &Interval, extrema: &[f64]) -> NodeSet {
        let mut nodes = Vec::with_capacity(extrema.len() + 2);

        nodes.push(interval.inf);
        nodes.extend_from_slice(extrema);
        nodes.push(interval.sup);

        NodeSet::new(nodes)
    }

    /// Iterates over the nodes paired with their sign in the design matrix,
    /// starting from `-1` at the smallest node.
    pub fn signed(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().enumerate().map(|(i, &x)| (x, sign(i)))
    }

    /// Largest coordinate-wise distance to another node set of equal length.
    pub fn max_shift(&self, other: &NodeSet) -> f64 {
        self.nodes
            .iter()
            .zip(&other.nodes)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Deref for NodeSet {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.nodes
    }
}

fn sign(rank: usize) -> f64 {
    if rank % 2 == 0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_nodes_lie_inside() {
        for (inf, sup) in [(0.0, 1.0), (-3.0, 2.5), (1e-3, 2e-3)] {
            let interval = Interval::new(inf, sup).unwrap();

            for count in 1..=12 {
                let nodes = NodeSet::chebyshev(&interval, count);

                assert_eq!(nodes.len(), count);
                assert!(nodes.iter().all(|&x| inf < x && x < sup));
                assert!(nodes.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn chebyshev_nodes_are_descending() {
        let interval = Interval::new(-1.0, 1.0).unwrap();
        let nodes = chebyshev_nodes(&interval, 3);

        assert!(nodes.windows(2).all(|w| w[0] > w[1]));
        assert!((nodes[0] - (PI / 6.0).cos()).abs() < 1e-15);
        assert!(nodes[1].abs() < 1e-15);
    }

    #[test]
    fn single_node_is_midpoint() {
        let interval = Interval::new(2.0, 4.0).unwrap();
        let nodes = chebyshev_nodes(&interval, 1);

        assert_eq!(nodes.len(), 1);
        assert!((nodes[0] - 3.0).abs() < 1e-15);
    }

    #[test]
    fn signs_follow_rank() {
        let nodes = NodeSet::new(vec![0.5, -1.0, 0.25, 1.0]);
        let signed: Vec<_> = nodes.signed().collect();

        assert_eq!(
            signed,
            [(-1.0, -1.0), (0.25, 1.0), (0.5, -1.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn extrema_are_bracketed_by_endpoints() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let nodes = NodeSet::from_extrema(&interval, &[1.5, 0.5]);

        assert_eq!(&*nodes, [0.0, 0.5, 1.5, 2.0]);
    }
}
