//! Test fixtures: a small map-backed graph and a reference A* loop built on the kernel.

use std::cell::Cell;

use hashbrown::{HashMap, HashSet};

use crate::{
    graph::{Coster, DirectedGraph, Graph, HeuristicCoster, Node, NodeId, WeightedEdge},
    search::{PredecessorMap, SearchFuncs, rebuild_path},
    sets::candidates::RelaxableQueue,
};

/// An in-memory graph whose optional capabilities are switched on per test.
///
/// The heuristic, when enabled, is the distance between node ids.
pub struct MapGraph {
    directed: bool,
    costs: bool,
    heuristic: bool,
    outgoing: HashMap<NodeId, Vec<WeightedEdge<NodeId>>>,
    incoming: HashMap<NodeId, Vec<WeightedEdge<NodeId>>>,
    probes: Cell<usize>,
}

impl MapGraph {
    pub fn new(directed: bool) -> Self {
        MapGraph {
            directed,
            costs: false,
            heuristic: false,
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            probes: Cell::new(0),
        }
    }

    pub fn with_costs(mut self) -> Self {
        self.costs = true;
        self
    }

    pub fn with_heuristic(mut self) -> Self {
        self.heuristic = true;
        self
    }

    pub fn add_edge(&mut self, from: usize, to: usize, cost: f64) {
        let edge = WeightedEdge::new(NodeId::from(from), NodeId::from(to), cost);
        self.outgoing.entry(edge.from).or_default().push(edge.clone());
        self.incoming.entry(edge.to).or_default().push(edge);
    }

    /// How many capability probes have been answered so far.
    pub fn probe_count(&self) -> usize {
        self.probes.get()
    }

    fn probe(&self) {
        self.probes.set(self.probes.get() + 1);
    }

    fn targets(&self, node: &NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing.get(node).into_iter().flatten().map(|e| e.to)
    }

    fn sources(&self, node: &NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming.get(node).into_iter().flatten().map(|e| e.from)
    }
}

impl Graph for MapGraph {
    type Node = NodeId;
    type Edge = WeightedEdge<NodeId>;

    fn neighbors(&self, node: &NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<NodeId> = Vec::new();
        for other in self.targets(node).chain(self.sources(node)) {
            if !neighbors.contains(&other) {
                neighbors.push(other);
            }
        }
        neighbors
    }

    fn edge_between(&self, a: &NodeId, b: &NodeId) -> Option<WeightedEdge<NodeId>> {
        self.edge_to(a, b).or_else(|| self.edge_to(b, a))
    }

    fn as_directed(
        &self,
    ) -> Option<&dyn DirectedGraph<Node = NodeId, Edge = WeightedEdge<NodeId>>> {
        self.probe();
        if self.directed { Some(self) } else { None }
    }

    fn as_coster(&self) -> Option<&dyn Coster<Edge = WeightedEdge<NodeId>>> {
        self.probe();
        if self.costs { Some(self) } else { None }
    }

    fn as_heuristic_coster(&self) -> Option<&dyn HeuristicCoster<Node = NodeId>> {
        self.probe();
        if self.heuristic { Some(self) } else { None }
    }
}

impl DirectedGraph for MapGraph {
    fn successors(&self, node: &NodeId) -> Vec<NodeId> {
        self.targets(node).collect()
    }

    fn predecessors(&self, node: &NodeId) -> Vec<NodeId> {
        self.sources(node).collect()
    }

    fn edge_to(&self, from: &NodeId, to: &NodeId) -> Option<WeightedEdge<NodeId>> {
        self.outgoing
            .get(from)?
            .iter()
            .find(|edge| edge.to == *to)
            .cloned()
    }
}

impl Coster for MapGraph {
    type Edge = WeightedEdge<NodeId>;

    fn cost(&self, edge: &WeightedEdge<NodeId>) -> f64 {
        edge.cost
    }
}

impl HeuristicCoster for MapGraph {
    type Node = NodeId;

    fn heuristic_cost(&self, from: &NodeId, to: &NodeId) -> f64 {
        from.internal.abs_diff(to.internal) as f64
    }
}

/// Plain A* over a prepared bundle. Returns the path and its cost.
pub fn shortest_path<N: Node, E>(
    funcs: &SearchFuncs<'_, N, E>,
    start: N,
    goal: N,
) -> Option<(Vec<N>, f64)> {
    let mut open = RelaxableQueue::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut predecessors: PredecessorMap<N> = PredecessorMap::new();

    let estimate = funcs.heuristic_cost(&start, &goal);
    open.insert(start, 0.0, estimate);

    while !open.is_empty() {
        let current = open.extract_min();
        if current.id() == goal.id() {
            return Some((rebuild_path(&predecessors, &current), current.gscore));
        }
        closed.insert(current.id());

        for succ in funcs.successors(&current.node) {
            if closed.contains(&succ.id()) {
                continue;
            }
            let gscore = current.gscore + funcs.cost_between(&current.node, &succ);
            if gscore.is_infinite() {
                continue;
            }
            let fscore = gscore + funcs.heuristic_cost(&succ, &goal);

            match open.find(succ.id()).map(|known| known.gscore) {
                Some(known) if known <= gscore => continue,
                Some(_) => {
                    open.relax(succ.id(), gscore, fscore);
                }
                None => {
                    open.insert(succ.clone(), gscore, fscore);
                }
            }
            predecessors.insert(succ.id(), current.node.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: NodeId = NodeId { internal: 0 };
    const B: NodeId = NodeId { internal: 1 };
    const C: NodeId = NodeId { internal: 2 };

    fn chain() -> MapGraph {
        let mut graph = MapGraph::new(true);
        graph.add_edge(0, 1, 2.0);
        graph.add_edge(1, 2, 3.0);
        graph
    }

    #[test]
    fn weighted_chain_costs_five() {
        let graph = chain().with_costs();
        let funcs = SearchFuncs::for_graph(&graph);

        let (path, cost) = shortest_path(&funcs, A, C).unwrap();
        assert_eq!(path, vec![A, B, C]);
        assert_eq!(cost, 5.0);
    }

    #[test]
    fn unweighted_chain_counts_hops() {
        let graph = chain();
        let funcs = SearchFuncs::for_graph(&graph);

        let (path, cost) = shortest_path(&funcs, A, C).unwrap();
        assert_eq!(path, vec![A, B, C]);
        assert_eq!(cost, 2.0);
    }

    #[test]
    fn direction_is_respected() {
        let graph = chain().with_costs();
        let funcs = SearchFuncs::for_graph(&graph);

        assert!(shortest_path(&funcs, C, A).is_none());
    }

    #[test]
    fn relaxation_finds_the_cheaper_detour() {
        // 0 -> 3 directly costs 10, the detour 0 -> 1 -> 2 -> 3 costs 3
        let mut graph = MapGraph::new(true).with_costs().with_heuristic();
        graph.add_edge(0, 3, 10.0);
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 3, 1.0);
        let funcs = SearchFuncs::for_graph(&graph);

        let (path, cost) = shortest_path(&funcs, A, NodeId::from(3)).unwrap();
        assert_eq!(path, vec![A, B, C, NodeId::from(3)]);
        assert_eq!(cost, 3.0);
    }

    #[test]
    fn start_equals_goal() {
        let graph = chain();
        let funcs = SearchFuncs::for_graph(&graph);

        let (path, cost) = shortest_path(&funcs, B, B).unwrap();
        assert_eq!(path, vec![B]);
        assert_eq!(cost, 0.0);
    }
}
