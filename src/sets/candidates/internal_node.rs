use crate::{
    graph::{Node, NodeId},
    sets::candidates::TotalF64,
};

/// A node waiting in the open set, together with its scores.
///
/// Entries are ordered by f-score (ascending) for use in the relaxable queue. Two
/// entries with the same f-score fall back to their node identifier, so extraction
/// order never depends on insertion history.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalNode<N> {
    /// The caller's node.
    pub node: N,

    /// Cost of the best known path from the start to this node.
    pub gscore: f64,

    /// `gscore` plus the heuristic estimate from this node to the goal.
    pub fscore: f64,
}

impl<N: Node> InternalNode<N> {
    pub fn new(node: N, gscore: f64, fscore: f64) -> Self {
        InternalNode {
            node,
            gscore,
            fscore,
        }
    }

    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    /// The key the queue orders on: smaller comes out first.
    pub fn priority(&self) -> (TotalF64, NodeId) {
        (TotalF64(self.fscore), self.id())
    }
}
