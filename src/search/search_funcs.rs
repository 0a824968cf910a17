use crate::{
    costs::{null_heuristic, uniform_cost},
    graph::{DirectedGraph, Edge, Graph, Node},
};

/// Lists nodes adjacent to a node.
pub type NodeListFn<'g, N> = Box<dyn Fn(&N) -> Vec<N> + 'g>;
/// Tests whether two nodes are adjacent in some role.
pub type AdjacencyFn<'g, N> = Box<dyn Fn(&N, &N) -> bool + 'g>;
/// Looks up the edge a search would step along between two nodes.
pub type EdgeFn<'g, N, E> = Box<dyn Fn(&N, &N) -> Option<E> + 'g>;
/// Prices an edge; `None` stands for an absent edge.
pub type CostFn<'g, E> = Box<dyn Fn(Option<&E>) -> f64 + 'g>;
/// Estimates the remaining cost between two nodes.
pub type HeuristicFn<'g, N> = Box<dyn Fn(&N, &N) -> f64 + 'g>;

/// Whether a graph was adapted through its directed accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Directed,
    Undirected,
}

/// Which source a scoring function was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Supplied by the caller through [`SearchOverrides`].
    Override,
    /// Provided by the graph's own capability.
    Graph,
    /// Neither was available, the stateless default from [`crate::costs`] is used.
    Default,
}

/// Caller-supplied replacements for the graph's scoring capabilities.
///
/// Anything left unset falls back to the graph, then to the defaults in
/// [`crate::costs`].
pub struct SearchOverrides<'g, N, E> {
    pub cost: Option<CostFn<'g, E>>,
    pub heuristic: Option<HeuristicFn<'g, N>>,
}

impl<'g, N, E> SearchOverrides<'g, N, E> {
    pub fn with_cost(mut self, cost: impl Fn(Option<&E>) -> f64 + 'g) -> Self {
        self.cost = Some(Box::new(cost));
        self
    }

    pub fn with_heuristic(mut self, heuristic: impl Fn(&N, &N) -> f64 + 'g) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }
}

impl<N, E> Default for SearchOverrides<'_, N, E> {
    fn default() -> Self {
        SearchOverrides {
            cost: None,
            heuristic: None,
        }
    }
}

/// The traversal half of a [`SearchFuncs`], picked by graph orientation.
struct Accessors<'g, N, E> {
    orientation: Orientation,
    successors: NodeListFn<'g, N>,
    predecessors: NodeListFn<'g, N>,
    is_successor: AdjacencyFn<'g, N>,
    is_predecessor: AdjacencyFn<'g, N>,
    is_neighbor: AdjacencyFn<'g, N>,
    edge: EdgeFn<'g, N, E>,
}

impl<'g, N, E> Accessors<'g, N, E>
where
    N: Node + 'g,
    E: Edge<Node = N> + 'g,
{
    fn directed(graph: &'g dyn DirectedGraph<Node = N, Edge = E>) -> Self {
        Accessors {
            orientation: Orientation::Directed,
            successors: Box::new(move |node: &N| graph.successors(node)),
            predecessors: Box::new(move |node: &N| graph.predecessors(node)),
            is_successor: Box::new(move |node: &N, succ: &N| graph.edge_to(node, succ).is_some()),
            is_predecessor: Box::new(move |node: &N, pred: &N| {
                graph.edge_to(pred, node).is_some()
            }),
            is_neighbor: Box::new(move |node: &N, other: &N| {
                graph.edge_between(other, node).is_some()
            }),
            edge: Box::new(move |from: &N, to: &N| graph.edge_to(from, to)),
        }
    }

    /// All three roles collapse onto neighbor listing and the symmetric edge test.
    fn undirected<G>(graph: &'g G) -> Self
    where
        G: Graph<Node = N, Edge = E>,
    {
        Accessors {
            orientation: Orientation::Undirected,
            successors: Box::new(move |node: &N| graph.neighbors(node)),
            predecessors: Box::new(move |node: &N| graph.neighbors(node)),
            is_successor: Box::new(move |node: &N, other: &N| {
                graph.edge_between(other, node).is_some()
            }),
            is_predecessor: Box::new(move |node: &N, other: &N| {
                graph.edge_between(other, node).is_some()
            }),
            is_neighbor: Box::new(move |node: &N, other: &N| {
                graph.edge_between(other, node).is_some()
            }),
            edge: Box::new(move |from: &N, to: &N| graph.edge_between(from, to)),
        }
    }
}

/// Everything a search loop needs to walk a graph, resolved once.
///
/// Building a `SearchFuncs` probes the graph's capabilities a single time and wires
/// each role to a fixed closure, so the traversal loop never asks the graph what it
/// can do:
///
/// - **Directed graphs** (`as_directed` returns `Some`): successors and
///   predecessors come from the directed accessors, and the adjacency tests follow
///   edge direction.
/// - **Undirected graphs**: successors, predecessors and neighbors all list
///   neighbors, and all three adjacency tests ask whether an edge exists between the
///   two nodes.
///
/// Edge cost resolves to the override, else the graph's `Coster`, else
/// [`uniform_cost`]. The heuristic resolves to the override, else the graph's
/// `HeuristicCoster`, else [`null_heuristic`].
///
/// The bundle borrows the graph for `'g` and is never mutated after construction.
pub struct SearchFuncs<'g, N, E> {
    successors: NodeListFn<'g, N>,
    predecessors: NodeListFn<'g, N>,
    neighbors: NodeListFn<'g, N>,
    is_successor: AdjacencyFn<'g, N>,
    is_predecessor: AdjacencyFn<'g, N>,
    is_neighbor: AdjacencyFn<'g, N>,
    edge: EdgeFn<'g, N, E>,
    cost: CostFn<'g, E>,
    heuristic_cost: HeuristicFn<'g, N>,
    orientation: Orientation,
    cost_source: Resolution,
    heuristic_source: Resolution,
}

impl<'g, N, E> SearchFuncs<'g, N, E>
where
    N: Node + 'g,
    E: Edge<Node = N> + 'g,
{
    /// Adapts `graph` with no overrides.
    pub fn for_graph<G>(graph: &'g G) -> Self
    where
        G: Graph<Node = N, Edge = E>,
    {
        Self::new(graph, SearchOverrides::default())
    }

    pub fn new<G>(graph: &'g G, overrides: SearchOverrides<'g, N, E>) -> Self
    where
        G: Graph<Node = N, Edge = E>,
    {
        let Accessors {
            orientation,
            successors,
            predecessors,
            is_successor,
            is_predecessor,
            is_neighbor,
            edge,
        } = match graph.as_directed() {
            Some(directed) => Accessors::directed(directed),
            None => Accessors::undirected(graph),
        };
        let neighbors: NodeListFn<'g, N> = Box::new(move |node: &N| graph.neighbors(node));

        let (heuristic_source, heuristic_cost): (Resolution, HeuristicFn<'g, N>) =
            match (overrides.heuristic, graph.as_heuristic_coster()) {
                (Some(heuristic), _) => (Resolution::Override, heuristic),
                (None, Some(coster)) => {
                    let heuristic: HeuristicFn<'g, N> =
                        Box::new(move |from: &N, to: &N| coster.heuristic_cost(from, to));
                    (Resolution::Graph, heuristic)
                }
                (None, None) => {
                    let heuristic: HeuristicFn<'g, N> = Box::new(null_heuristic::<N>);
                    (Resolution::Default, heuristic)
                }
            };

        let (cost_source, cost): (Resolution, CostFn<'g, E>) =
            match (overrides.cost, graph.as_coster()) {
                (Some(cost), _) => (Resolution::Override, cost),
                (None, Some(coster)) => {
                    // an absent edge stays unreachable whatever the graph charges
                    let cost: CostFn<'g, E> = Box::new(move |edge: Option<&E>| {
                        edge.map_or(f64::INFINITY, |edge| coster.cost(edge))
                    });
                    (Resolution::Graph, cost)
                }
                (None, None) => {
                    let cost: CostFn<'g, E> = Box::new(uniform_cost::<E>);
                    (Resolution::Default, cost)
                }
            };

        tracing::debug!(
            orientation = ?orientation,
            cost = ?cost_source,
            heuristic = ?heuristic_source,
            "resolved search functions"
        );

        SearchFuncs {
            successors,
            predecessors,
            neighbors,
            is_successor,
            is_predecessor,
            is_neighbor,
            edge,
            cost,
            heuristic_cost,
            orientation,
            cost_source,
            heuristic_source,
        }
    }
}

impl<N, E> SearchFuncs<'_, N, E> {
    pub fn successors(&self, node: &N) -> Vec<N> {
        (self.successors)(node)
    }

    pub fn predecessors(&self, node: &N) -> Vec<N> {
        (self.predecessors)(node)
    }

    pub fn neighbors(&self, node: &N) -> Vec<N> {
        (self.neighbors)(node)
    }

    /// Whether `succ` can be reached from `node` in one step.
    pub fn is_successor(&self, node: &N, succ: &N) -> bool {
        (self.is_successor)(node, succ)
    }

    /// Whether `node` can be reached from `pred` in one step.
    pub fn is_predecessor(&self, node: &N, pred: &N) -> bool {
        (self.is_predecessor)(node, pred)
    }

    pub fn is_neighbor(&self, node: &N, other: &N) -> bool {
        (self.is_neighbor)(node, other)
    }

    /// The edge a search steps along from `from` to `to`: the directed edge for
    /// directed graphs, any joining edge otherwise.
    pub fn edge(&self, from: &N, to: &N) -> Option<E> {
        (self.edge)(from, to)
    }

    pub fn cost(&self, edge: Option<&E>) -> f64 {
        (self.cost)(edge)
    }

    /// Cost of stepping from `from` to `to`; positive infinity when no edge exists.
    pub fn cost_between(&self, from: &N, to: &N) -> f64 {
        let edge = self.edge(from, to);
        self.cost(edge.as_ref())
    }

    pub fn heuristic_cost(&self, from: &N, to: &N) -> f64 {
        (self.heuristic_cost)(from, to)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cost_source(&self) -> Resolution {
        self.cost_source
    }

    pub fn heuristic_source(&self) -> Resolution {
        self.heuristic_source
    }
}
