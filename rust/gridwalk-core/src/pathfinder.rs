use tracing::{debug, trace};

use crate::cost::CostModel;
use crate::errors::{PathError, Result};
use crate::models::{Coord, PathSummary};
use crate::node::{NodeId, SearchNode};
use crate::options::{PathfinderOptions, DEFAULT_HEURISTIC_WEIGHT};
use crate::queue::{MinQueue, Prioritized};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Start or end has not been set.
    Unconfigured,
    /// Ready to search, or reset since the last search.
    Configured,
    /// Last search ended on the configured end.
    Found,
    /// Last search drained the queue without reaching the end.
    Exhausted,
}

#[derive(Clone, Copy, Debug)]
struct Queued {
    id: NodeId,
    key: f32,
}

impl Prioritized for Queued {
    fn priority(&self) -> f32 {
        self.key
    }
}

/// Best-first search over a square grid with first-write-wins cell claims.
///
/// A cell is claimed by the first node that references it and is never
/// offered to the queue again, so a cheaper route discovered later is
/// dropped rather than relaxed. On uniform-cost grids with a consistent
/// heuristic this still returns shortest paths.
///
/// Ties between equal keys resolve first-in first-out; neighbors are
/// generated row-1, row+1, col-1, col+1.
pub struct Pathfinder<'a, C: CostModel> {
    cost: &'a C,
    size: usize,
    start: Option<Coord>,
    end: Option<Coord>,
    heuristic: f32,
    path_cost: f32,
    found_path: bool,
    search_size: u64,
    nodes: Vec<SearchNode>,
    grid: Vec<Option<NodeId>>,
    path_solution: Vec<Coord>,
}

impl<'a, C: CostModel> Pathfinder<'a, C> {
    pub fn new(cost: &'a C) -> Self {
        let size = cost.size();
        let mut pf = Self {
            cost,
            size,
            start: None,
            end: None,
            heuristic: DEFAULT_HEURISTIC_WEIGHT,
            path_cost: 0.0,
            found_path: false,
            search_size: 0,
            nodes: Vec::new(),
            grid: Vec::new(),
            path_solution: Vec::new(),
        };
        pf.reset_path();
        pf
    }

    pub fn with_options(cost: &'a C, options: &PathfinderOptions) -> Result<Self> {
        options.validate()?;
        let mut pf = Self::new(cost);
        pf.set_heuristic(options.heuristic_weight);
        Ok(pf)
    }

    pub fn set_path_start(&mut self, loc: Coord) {
        self.start = Some(loc);
    }

    pub fn path_start(&self) -> Option<Coord> {
        self.start
    }

    pub fn set_path_end(&mut self, loc: Coord) {
        self.end = Some(loc);
    }

    pub fn path_end(&self) -> Option<Coord> {
        self.end
    }

    pub fn set_heuristic(&mut self, weight: f32) {
        self.heuristic = weight;
    }

    pub fn heuristic(&self) -> f32 {
        self.heuristic
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Clear the search grid, nodes, counters and path. Configuration is kept.
    pub fn reset_path(&mut self) {
        self.nodes.clear();
        self.grid.clear();
        self.grid.resize(self.size * self.size, None);
        self.search_size = 0;
        self.path_solution.clear();
        self.found_path = false;
        self.path_cost = 0.0;
    }

    /// Run the search from start to end and rebuild the path.
    ///
    /// Claims from a previous search survive until [`reset_path`](Self::reset_path)
    /// is called, and `search_size` keeps counting across searches.
    pub fn compute_path(&mut self) -> Result<()> {
        let start = self.start.ok_or(PathError::NotConfigured { missing: "start" })?;
        let end = self.end.ok_or(PathError::NotConfigured { missing: "end" })?;
        let cost = self.cost;
        let weight = self.heuristic;

        let mut open: MinQueue<Queued> = MinQueue::new();
        let root = self.alloc(SearchNode::start(start, cost, end));
        open.push(Queued { id: root, key: self.nodes[root.0].priority_key(weight) });

        let mut current: Option<NodeId> = None;
        while let Some(Queued { id, .. }) = open.pop() {
            current = Some(id);
            let loc = self.nodes[id.0].location();
            if let Some(slot) = loc.index(self.size) {
                self.grid[slot] = Some(id);
            }

            let node = &self.nodes[id.0];
            if node.is_expanded() || !node.is_valid() {
                continue;
            }
            self.search_size += 1;
            self.nodes[id.0].mark_expanded();
            trace!(loc=%loc, g=self.nodes[id.0].cost_so_far(), "expand");

            if loc == end {
                break;
            }

            for n in self.nodes[id.0].neighbors(id, cost, end) {
                let Some(slot) = n.location().index(self.size) else { continue };
                if self.grid[slot].is_some() {
                    continue;
                }
                let key = n.priority_key(weight);
                let nid = self.alloc(n);
                self.grid[slot] = Some(nid);
                open.push(Queued { id: nid, key });
            }
        }

        self.path_solution.clear();
        if let Some(last) = current {
            self.path_cost = self.nodes[last.0].priority_key(weight);
            let mut cursor = Some(last);
            while let Some(id) = cursor {
                let node = &self.nodes[id.0];
                self.path_solution.push(node.location());
                cursor = node.predecessor();
            }
            self.path_solution.reverse();
        }
        // Set even when the queue ran dry; see `reached_end`.
        self.found_path = true;

        debug!(
            start=%start,
            end=%end,
            search_size=self.search_size,
            path_len=self.path_solution.len(),
            path_cost=self.path_cost,
            reached=self.reached_end(),
            "compute_path done"
        );
        Ok(())
    }

    /// True once any search has finished, whether or not it reached the end.
    pub fn found_path(&self) -> bool {
        self.found_path
    }

    /// Whether the computed path actually ends on the configured end.
    pub fn reached_end(&self) -> bool {
        self.found_path && self.end.is_some() && self.path_solution.last().copied() == self.end
    }

    pub fn path_cost(&self) -> f32 {
        self.path_cost
    }

    /// Number of nodes expanded.
    pub fn search_size(&self) -> u64 {
        self.search_size
    }

    /// Start-to-end coordinates of the last computed path.
    pub fn path_solution(&self) -> &[Coord] {
        &self.path_solution
    }

    pub fn was_searched(&self, loc: Coord) -> bool {
        self.slot(loc).is_some()
    }

    /// The node currently recorded in the grid slot for `loc`.
    pub fn node_at(&self, loc: Coord) -> Option<&SearchNode> {
        self.slot(loc).map(|id| &self.nodes[id.0])
    }

    pub fn state(&self) -> SearchState {
        if self.start.is_none() || self.end.is_none() {
            SearchState::Unconfigured
        } else if !self.found_path {
            SearchState::Configured
        } else if self.reached_end() {
            SearchState::Found
        } else {
            SearchState::Exhausted
        }
    }

    pub fn summary(&self) -> PathSummary {
        PathSummary {
            path: self.path_solution.clone(),
            cost: self.path_cost,
            search_size: self.search_size,
            found: self.found_path,
            reached_end: self.reached_end(),
        }
    }

    fn slot(&self, loc: Coord) -> Option<NodeId> {
        loc.index(self.size).and_then(|i| self.grid[i])
    }

    fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
