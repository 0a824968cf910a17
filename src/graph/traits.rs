use crate::graph::{Edge, Node};

/// The minimal capability a graph must offer to be searched.
///
/// Everything beyond neighbor listing and an undirected edge lookup is optional and
/// advertised through the `as_*` probes. A graph that can report direction, store
/// weights or estimate distances returns `Some(self)` from the matching probe; the
/// default implementations report the capability as absent.
///
/// Implementing [`DirectedGraph`], [`Coster`] or [`HeuristicCoster`] is not enough on
/// its own: the implementor must also return `Some(self)` from `as_directed`,
/// `as_coster` or `as_heuristic_coster`. Otherwise the graph is adapted as undirected,
/// with uniform costs and no heuristic.
///
/// Probes are consulted once, when [`crate::search::SearchFuncs`] is built, never
/// inside the traversal loop.
pub trait Graph {
    type Node: Node;
    type Edge: Edge<Node = Self::Node>;

    /// Every node sharing an edge with `node`, regardless of direction.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// An edge joining `a` and `b` in either direction, if any.
    fn edge_between(&self, a: &Self::Node, b: &Self::Node) -> Option<Self::Edge>;

    fn as_directed(&self) -> Option<&dyn DirectedGraph<Node = Self::Node, Edge = Self::Edge>> {
        None
    }

    fn as_coster(&self) -> Option<&dyn Coster<Edge = Self::Edge>> {
        None
    }

    fn as_heuristic_coster(&self) -> Option<&dyn HeuristicCoster<Node = Self::Node>> {
        None
    }
}

/// A graph whose edges have a direction.
pub trait DirectedGraph: Graph {
    /// Nodes reachable from `node` through one outgoing edge.
    fn successors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Nodes that reach `node` through one outgoing edge of theirs.
    fn predecessors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// The edge going from `from` to `to`, if any.
    fn edge_to(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Edge>;
}

/// A graph able to price its own edges.
pub trait Coster {
    type Edge;

    fn cost(&self, edge: &Self::Edge) -> f64;
}

/// A graph able to estimate the remaining cost between two nodes.
///
/// For A* to return optimal paths the estimate must never exceed the true cost.
pub trait HeuristicCoster {
    type Node;

    fn heuristic_cost(&self, from: &Self::Node, to: &Self::Node) -> f64;
}
