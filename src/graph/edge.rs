use crate::graph::Node;

/// A relation between two nodes.
///
/// For directed graphs `source` is where the edge leaves from. Undirected graphs
/// may return either orientation from `edge_between`.
pub trait Edge {
    type Node: Node;

    fn source(&self) -> &Self::Node;
    fn target(&self) -> &Self::Node;
}

/// An edge carrying an explicit weight.
///
/// This is the edge value graphs hand out when they store weights inline; the
/// tie-break orderings in [`crate::graph::ordering`] sort sequences of these.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEdge<N> {
    pub from: N,
    pub to: N,
    pub cost: f64,
}

impl<N> WeightedEdge<N> {
    pub fn new(from: N, to: N, cost: f64) -> Self {
        WeightedEdge { from, to, cost }
    }
}

impl<N: Node> Edge for WeightedEdge<N> {
    type Node = N;

    fn source(&self) -> &N {
        &self.from
    }

    fn target(&self) -> &N {
        &self.to
    }
}
