/// Counters a search loop keeps about its own work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    searches: usize,
    paths_found: usize,
    nodes_expanded: usize,
    relaxations: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            searches: 0,
            paths_found: 0,
            nodes_expanded: 0,
            relaxations: 0,
        }
    }

    /// Record that a search has been run, and whether it reached its goal
    pub fn bump_searches(&mut self, found: bool) {
        self.searches += 1;
        if found {
            self.paths_found += 1;
        }
    }

    /// Record that a node was taken out of the open set and expanded
    pub fn bump_expanded(&mut self) {
        self.nodes_expanded += 1
    }

    /// Record that an open node's scores were lowered
    pub fn bump_relaxations(&mut self) {
        self.relaxations += 1
    }

    pub fn get_searches(&self) -> usize {
        self.searches
    }

    pub fn get_paths_found(&self) -> usize {
        self.paths_found
    }

    pub fn get_nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn get_relaxations(&self) -> usize {
        self.relaxations
    }

    /// Sums two sets of counters, e.g. from separate batches of searches.
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            searches: self.searches + other.searches,
            paths_found: self.paths_found + other.paths_found,
            nodes_expanded: self.nodes_expanded + other.nodes_expanded,
            relaxations: self.relaxations + other.relaxations,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
