use crate::cost::CostModel;
use crate::models::Coord;

/// Index of a [`SearchNode`] in the pathfinder's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One visit to a cell during a search.
///
/// `predecessor` points back into the arena at a node created strictly
/// earlier, so following it always ends at the start node.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode {
    location: Coord,
    predecessor: Option<NodeId>,
    cost_so_far: f32,
    heuristic_estimate: f32,
    valid: bool,
    expanded: bool,
}

impl SearchNode {
    /// Root node of a search: no predecessor and zero accumulated cost.
    pub fn start<C: CostModel>(location: Coord, cost: &C, goal: Coord) -> Self {
        Self {
            location,
            predecessor: None,
            cost_so_far: 0.0,
            heuristic_estimate: cost.heuristic_distance(location, goal),
            valid: true,
            expanded: false,
        }
    }

    fn reached_from<C: CostModel>(
        location: Coord,
        pred_id: NodeId,
        pred_location: Coord,
        pred_cost: f32,
        cost: &C,
        goal: Coord,
    ) -> Self {
        Self {
            location,
            predecessor: Some(pred_id),
            cost_so_far: pred_cost + cost.travel_cost(pred_location, location),
            heuristic_estimate: cost.heuristic_distance(location, goal),
            valid: true,
            expanded: false,
        }
    }

    pub fn location(&self) -> Coord {
        self.location
    }

    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    pub fn cost_so_far(&self) -> f32 {
        self.cost_so_far
    }

    pub fn heuristic_estimate(&self) -> f32 {
        self.heuristic_estimate
    }

    /// `g + weight * h`, the key the search orders nodes by.
    pub fn priority_key(&self, heuristic_weight: f32) -> f32 {
        self.cost_so_far + heuristic_weight * self.heuristic_estimate
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn mark_expanded(&mut self) {
        self.expanded = true;
    }

    /// Nodes for the in-bounds 4-neighbors of this node, each with `id` as predecessor.
    ///
    /// Emission order is fixed: row-1, row+1, col-1, col+1. A node that lies
    /// off the grid has no neighbors.
    pub fn neighbors<'a, C: CostModel + 'a>(
        &self,
        id: NodeId,
        cost: &'a C,
        goal: Coord,
    ) -> impl Iterator<Item = SearchNode> + 'a {
        let here = self.location;
        let g = self.cost_so_far;
        let size = cost.size();
        let inside = here.in_bounds(size);
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(move |(dr, dc)| Coord::new(here.row + dr, here.col + dc))
            .filter(move |c| inside && c.in_bounds(size))
            .map(move |c| SearchNode::reached_from(c, id, here, g, cost, goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::GridTerrain;

    #[test]
    fn start_node_has_zero_cost_and_fresh_flags() {
        let t = GridTerrain::uniform(3, 1.0).unwrap();
        let n = SearchNode::start(Coord::new(0, 0), &t, Coord::new(2, 2));
        assert_eq!(n.cost_so_far(), 0.0);
        assert_eq!(n.heuristic_estimate(), 4.0);
        assert!(n.predecessor().is_none());
        assert!(n.is_valid());
        assert!(!n.is_expanded());
        assert_eq!(n.priority_key(0.0), 0.0);
        assert_eq!(n.priority_key(2.0), 8.0);
    }

    #[test]
    fn corner_has_two_neighbors_in_fixed_order() {
        let t = GridTerrain::uniform(3, 1.0).unwrap();
        let n = SearchNode::start(Coord::new(0, 0), &t, Coord::new(2, 2));
        let locs: Vec<Coord> = n
            .neighbors(NodeId(0), &t, Coord::new(2, 2))
            .map(|m| m.location())
            .collect();
        assert_eq!(locs, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn off_grid_node_has_no_neighbors() {
        let t = GridTerrain::uniform(3, 1.0).unwrap();
        for loc in [Coord::new(-1, 0), Coord::new(0, 3), Coord::new(3, 3)] {
            let n = SearchNode::start(loc, &t, Coord::new(2, 2));
            assert_eq!(n.neighbors(NodeId(0), &t, Coord::new(2, 2)).count(), 0, "{}", loc);
        }
    }

    #[test]
    fn center_neighbors_accumulate_cost_and_link_back() {
        let t = GridTerrain::from_fn(3, |c| if c.row == 0 { 4.0 } else { 1.0 }).unwrap();
        let n = SearchNode::start(Coord::new(1, 1), &t, Coord::new(2, 2));
        let ns: Vec<SearchNode> = n.neighbors(NodeId(7), &t, Coord::new(2, 2)).collect();
        let locs: Vec<Coord> = ns.iter().map(|m| m.location()).collect();
        assert_eq!(
            locs,
            vec![Coord::new(0, 1), Coord::new(2, 1), Coord::new(1, 0), Coord::new(1, 2)]
        );
        assert_eq!(ns[0].cost_so_far(), 4.0);
        assert_eq!(ns[1].cost_so_far(), 1.0);
        assert!(ns.iter().all(|m| m.predecessor() == Some(NodeId(7))));
    }

    #[test]
    fn invalidate_clears_valid_flag() {
        let t = GridTerrain::uniform(2, 1.0).unwrap();
        let mut n = SearchNode::start(Coord::new(0, 0), &t, Coord::new(1, 1));
        n.invalidate();
        assert!(!n.is_valid());
    }
}
