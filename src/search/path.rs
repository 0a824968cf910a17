use hashbrown::HashMap;

use crate::{
    graph::{Node, NodeId},
    sets::candidates::InternalNode,
};

/// Maps each reached node to the node it was reached from on its best known path.
pub type PredecessorMap<P> = HashMap<NodeId, P>;

/// Anything that stands for a caller-visible node.
///
/// Predecessor maps and goals may hold either plain nodes or the queue's scored
/// [`InternalNode`] entries; path reconstruction unwraps both the same way.
pub trait AsNode<N> {
    fn as_node(&self) -> &N;
}

impl<N: Node> AsNode<N> for N {
    fn as_node(&self) -> &N {
        self
    }
}

impl<N: Node> AsNode<N> for InternalNode<N> {
    fn as_node(&self) -> &N {
        &self.node
    }
}

/// Rebuilds the path ending at `goal` by following `predecessors` backwards.
///
/// The walk stops at the first node without a predecessor, which is taken to be the
/// start. The result runs from start to goal, both included; a goal with no entry
/// yields `[goal]`.
///
/// The map must be acyclic. A correct relaxation never records a node as its own
/// ancestor, and no cycle detection is performed here.
///
/// # Examples
/// ```
/// use waypoint::{graph::NodeId, search::{PredecessorMap, rebuild_path}};
///
/// let (a, b, c) = (NodeId::from(0), NodeId::from(1), NodeId::from(2));
/// let mut predecessors = PredecessorMap::new();
/// predecessors.insert(c, b);
/// predecessors.insert(b, a);
///
/// let path: Vec<NodeId> = rebuild_path(&predecessors, &c);
/// assert_eq!(path, vec![a, b, c]);
/// ```
pub fn rebuild_path<N, P, G>(predecessors: &PredecessorMap<P>, goal: &G) -> Vec<N>
where
    N: Node,
    P: AsNode<N>,
    G: AsNode<N>,
{
    let goal = goal.as_node();
    let mut path = vec![goal.clone()];

    let mut current = goal.id();
    while let Some(prev) = predecessors.get(&current) {
        let prev = prev.as_node();
        path.push(prev.clone());
        current = prev.id();
    }

    path.reverse();
    path
}
