use clap::{Parser, ValueEnum};
use hashbrown::HashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use waypoint::{
    costs::null_heuristic,
    graph::{Coster, DirectedGraph, Graph, HeuristicCoster, NodeId, WeightedEdge},
    search::{PredecessorMap, SearchFuncs, SearchOverrides, rebuild_path},
    sets::candidates::RelaxableQueue,
    statistics::Stats,
};

/// Shortest-path benchmark over random weighted grids
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Runs best-first searches over a random weighted grid", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 256)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 256)]
    height: usize,

    /// Number of random start/goal pairs to search
    #[arg(short, long, default_value_t = 1000)]
    queries: usize,

    /// Largest cell weight; weights are drawn uniformly from 1..=max_weight
    #[arg(long, default_value_t = 9)]
    max_weight: u32,

    /// Share of cells that are walls
    #[arg(long, default_value_t = 0.15)]
    wall_ratio: f64,

    /// Whether stepping into a cell costs that cell's weight (directed), or the
    /// average of both cells (undirected)
    #[arg(short, long)]
    directed: bool,

    /// Search modes to compare (comma-separated list, e.g., "dijkstra,astar")
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [SearchMode::Dijkstra, SearchMode::Astar]
    )]
    modes: Vec<SearchMode>,

    /// Seed for grid generation and query selection
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SearchMode {
    /// Ignore the grid's distance estimate
    Dijkstra,
    /// Use the grid's Manhattan estimate
    Astar,
}

/// A 4-connected grid with weighted cells and impassable walls.
struct Grid {
    width: usize,
    height: usize,
    directed: bool,
    // None marks a wall
    weights: Vec<Option<f64>>,
}

impl Grid {
    fn random(
        width: usize,
        height: usize,
        max_weight: u32,
        wall_ratio: f64,
        directed: bool,
        rng: &mut StdRng,
    ) -> Self {
        let weights = (0..width * height)
            .map(|_| {
                if rng.random_bool(wall_ratio) {
                    None
                } else {
                    Some(f64::from(rng.random_range(1..=max_weight)))
                }
            })
            .collect();
        Grid {
            width,
            height,
            directed,
            weights,
        }
    }

    fn len(&self) -> usize {
        self.weights.len()
    }

    fn is_open(&self, node: &NodeId) -> bool {
        self.weights[node.internal].is_some()
    }

    fn coords(&self, node: &NodeId) -> (usize, usize) {
        (node.internal % self.width, node.internal / self.width)
    }

    fn adjacent(&self, node: &NodeId) -> Vec<NodeId> {
        if !self.is_open(node) {
            return Vec::new();
        }
        let (x, y) = self.coords(node);
        let mut cells = Vec::with_capacity(4);
        if x > 0 {
            cells.push(node.internal - 1);
        }
        if x + 1 < self.width {
            cells.push(node.internal + 1);
        }
        if y > 0 {
            cells.push(node.internal - self.width);
        }
        if y + 1 < self.height {
            cells.push(node.internal + self.width);
        }
        cells
            .into_iter()
            .map(NodeId::from)
            .filter(|cell| self.is_open(cell))
            .collect()
    }

    fn touches(&self, a: &NodeId, b: &NodeId) -> bool {
        let ((ax, ay), (bx, by)) = (self.coords(a), self.coords(b));
        ax.abs_diff(bx) + ay.abs_diff(by) == 1 && self.is_open(a) && self.is_open(b)
    }
}

impl Graph for Grid {
    type Node = NodeId;
    type Edge = WeightedEdge<NodeId>;

    fn neighbors(&self, node: &NodeId) -> Vec<NodeId> {
        self.adjacent(node)
    }

    fn edge_between(&self, a: &NodeId, b: &NodeId) -> Option<WeightedEdge<NodeId>> {
        if !self.touches(a, b) {
            return None;
        }
        let (wa, wb) = (self.weights[a.internal]?, self.weights[b.internal]?);
        Some(WeightedEdge::new(*a, *b, (wa + wb) / 2.0))
    }

    fn as_directed(
        &self,
    ) -> Option<&dyn DirectedGraph<Node = NodeId, Edge = WeightedEdge<NodeId>>> {
        if self.directed { Some(self) } else { None }
    }

    fn as_coster(&self) -> Option<&dyn Coster<Edge = WeightedEdge<NodeId>>> {
        Some(self)
    }

    fn as_heuristic_coster(&self) -> Option<&dyn HeuristicCoster<Node = NodeId>> {
        Some(self)
    }
}

impl DirectedGraph for Grid {
    fn successors(&self, node: &NodeId) -> Vec<NodeId> {
        self.adjacent(node)
    }

    fn predecessors(&self, node: &NodeId) -> Vec<NodeId> {
        self.adjacent(node)
    }

    fn edge_to(&self, from: &NodeId, to: &NodeId) -> Option<WeightedEdge<NodeId>> {
        if !self.touches(from, to) {
            return None;
        }
        Some(WeightedEdge::new(*from, *to, self.weights[to.internal]?))
    }
}

impl Coster for Grid {
    type Edge = WeightedEdge<NodeId>;

    fn cost(&self, edge: &WeightedEdge<NodeId>) -> f64 {
        edge.cost
    }
}

impl HeuristicCoster for Grid {
    type Node = NodeId;

    // every step costs at least 1, so Manhattan distance never overestimates
    fn heuristic_cost(&self, from: &NodeId, to: &NodeId) -> f64 {
        let ((fx, fy), (tx, ty)) = (self.coords(from), self.coords(to));
        (fx.abs_diff(tx) + fy.abs_diff(ty)) as f64
    }
}

fn a_star(
    funcs: &SearchFuncs<'_, NodeId, WeightedEdge<NodeId>>,
    start: NodeId,
    goal: NodeId,
    stats: &mut Stats,
) -> Option<(Vec<NodeId>, f64)> {
    let mut open = RelaxableQueue::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut predecessors: PredecessorMap<NodeId> = PredecessorMap::new();

    open.insert(start, 0.0, funcs.heuristic_cost(&start, &goal));

    while !open.is_empty() {
        let current = open.extract_min();
        stats.bump_expanded();
        if current.node == goal {
            return Some((rebuild_path(&predecessors, &current), current.gscore));
        }
        closed.insert(current.node);

        for succ in funcs.successors(&current.node) {
            if closed.contains(&succ) {
                continue;
            }
            let gscore = current.gscore + funcs.cost_between(&current.node, &succ);
            let fscore = gscore + funcs.heuristic_cost(&succ, &goal);

            match open.find(succ).map(|known| known.gscore) {
                Some(known) if known <= gscore => continue,
                Some(_) => {
                    open.relax(succ, gscore, fscore);
                    stats.bump_relaxations();
                }
                None => {
                    open.insert(succ, gscore, fscore);
                }
            }
            predecessors.insert(succ, current.node);
        }
    }
    None
}

fn run_search_job(grid: &Grid, pairs: &[(NodeId, NodeId)], mode: SearchMode) -> Stats {
    println!("\n==========");
    println!("Running mode={:?} over {} queries", mode, pairs.len());
    println!("==========");

    let overrides = match mode {
        SearchMode::Dijkstra => {
            SearchOverrides::default().with_heuristic(null_heuristic::<NodeId>)
        }
        SearchMode::Astar => SearchOverrides::default(),
    };
    let funcs = SearchFuncs::new(grid, overrides);

    let start_time = Instant::now();
    let mut stats = Stats::new();
    let mut checksum = 0.0;
    let mut hops = 0;

    for &(start, goal) in pairs {
        let result = a_star(&funcs, start, goal, &mut stats);
        stats.bump_searches(result.is_some());
        if let Some((path, cost)) = result {
            checksum += cost;
            hops += path.len() - 1;
        }
    }

    let elapsed = start_time.elapsed();
    let searches = stats.get_searches().max(1) as f64;
    println!(
        "Found {}/{} paths, {} hops in total",
        stats.get_paths_found(),
        stats.get_searches(),
        hops
    );
    println!(
        "  Avg per search: {:.2} nodes expanded, {:.2} relaxations",
        stats.get_nodes_expanded() as f64 / searches,
        stats.get_relaxations() as f64 / searches
    );
    println!("Checksum: {checksum:.1}");
    println!(
        "Completed {} searches in {:.2}s ({:.2} QPS)",
        stats.get_searches(),
        elapsed.as_secs_f64(),
        stats.get_searches() as f64 / elapsed.as_secs_f64()
    );
    stats
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    assert!(args.width > 0 && args.height > 0, "grid must not be empty");
    assert!(
        args.width.checked_mul(args.height).is_some(),
        "a {}x{} grid has more cells than can be addressed",
        args.width,
        args.height
    );
    assert!(args.max_weight > 0, "cell weights start at 1");
    assert!(
        (0.0..1.0).contains(&args.wall_ratio),
        "wall ratio must be in [0, 1)"
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    println!("Generating {}x{} grid...", args.width, args.height);
    let grid = Grid::random(
        args.width,
        args.height,
        args.max_weight,
        args.wall_ratio,
        args.directed,
        &mut rng,
    );

    let open_cells: Vec<NodeId> = (0..grid.len())
        .map(NodeId::from)
        .filter(|cell| grid.is_open(cell))
        .collect();
    assert!(!open_cells.is_empty(), "grid has no open cells");
    println!("Grid generated with {} open cells", open_cells.len());

    let pairs: Vec<(NodeId, NodeId)> = (0..args.queries)
        .map(|_| {
            let start = open_cells[rng.random_range(0..open_cells.len())];
            let goal = open_cells[rng.random_range(0..open_cells.len())];
            (start, goal)
        })
        .collect();

    let mut total = Stats::new();
    for &mode in &args.modes {
        let stats = run_search_job(&grid, &pairs, mode);
        total = total.merge(&stats);
    }

    println!("\n==========");
    println!("All jobs completed!");
    println!(
        "  {} searches, {} paths found, {} nodes expanded, {} relaxations",
        total.get_searches(),
        total.get_paths_found(),
        total.get_nodes_expanded(),
        total.get_relaxations()
    );
    println!("==========");
}
