//! Deterministic tie-break orderings over edges and nodes.
//!
//! Both comparators are strict total orders, so sorting with them gives the same
//! sequence on every platform and for every input permutation.

use std::cmp::Ordering;

use crate::{
    graph::{Node, WeightedEdge},
    sets::candidates::TotalF64,
};

/// Orders edges by weight, ascending.
///
/// Edges of equal weight fall back to source id, then target id. The weight itself is
/// compared with [`f64::total_cmp`], which also places an infinite (absent) cost last.
pub fn edge_weight_order<N: Node>(a: &WeightedEdge<N>, b: &WeightedEdge<N>) -> Ordering {
    TotalF64(a.cost)
        .cmp(&TotalF64(b.cost))
        .then_with(|| a.from.id().cmp(&b.from.id()))
        .then_with(|| a.to.id().cmp(&b.to.id()))
}

/// Orders nodes by identifier, ascending.
pub fn node_id_order<N: Node>(a: &N, b: &N) -> Ordering {
    a.id().cmp(&b.id())
}

/// Sorts `edges` in place by [`edge_weight_order`].
///
/// # Examples
/// ```
/// use waypoint::graph::{NodeId, WeightedEdge, ordering::sort_edges_by_weight};
///
/// let mut edges = vec![
///     WeightedEdge::new(NodeId::from(0), NodeId::from(1), 3.0),
///     WeightedEdge::new(NodeId::from(1), NodeId::from(2), 1.0),
/// ];
/// sort_edges_by_weight(&mut edges);
/// assert_eq!(edges[0].cost, 1.0);
/// ```
pub fn sort_edges_by_weight<N: Node>(edges: &mut [WeightedEdge<N>]) {
    edges.sort_by(|a, b| edge_weight_order(a, b));
}

/// Sorts `nodes` in place by [`node_id_order`].
pub fn sort_nodes_by_id<N: Node>(nodes: &mut [N]) {
    nodes.sort_by(|a, b| node_id_order(a, b));
}
