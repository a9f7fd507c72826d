use tracing::trace;

use crate::cost::CostModel;
use crate::errors::{PathError, Result};
use crate::models::Coord;

/// Moves an agent along a fixed sequence of coordinates.
///
/// The first coordinate is where the walker starts; it is consumed on
/// construction and never counts as a step.
pub struct Walker<'a, C: CostModel> {
    cost: &'a C,
    path: Vec<Coord>,
    cursor: usize,
    location: Coord,
}

impl<'a, C: CostModel> Walker<'a, C> {
    pub fn new<I>(cost: &'a C, path: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let path: Vec<Coord> = path.into_iter().collect();
        let location = *path.first().ok_or(PathError::EmptyPath)?;
        Ok(Self { cost, path, cursor: 1, location })
    }

    pub fn location(&self) -> Coord {
        self.location
    }

    pub fn done_walking(&self) -> bool {
        self.cursor >= self.path.len()
    }

    /// Coordinates still ahead of the walker.
    pub fn remaining(&self) -> usize {
        self.path.len().saturating_sub(self.cursor)
    }

    /// Step along the path for `by_time` units.
    ///
    /// The time left after a step is the cost of that step rather than the
    /// budget minus that cost, so any step with a positive cost ends the
    /// call no matter how large `by_time` was. Zero-cost steps are free and
    /// the walk continues through them.
    pub fn advance(&mut self, by_time: f32) {
        let mut budget = by_time;
        while budget > 0.0 {
            let Some(&next) = self.path.get(self.cursor) else { break };
            self.cursor += 1;
            let step_cost = self.cost.travel_cost(self.location, next);
            trace!(from=%self.location, to=%next, step_cost, "walker step");
            self.location = next;
            if step_cost > 0.0 {
                budget = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::GridTerrain;

    fn line(n: i32) -> Vec<Coord> {
        (0..n).map(|c| Coord::new(0, c)).collect()
    }

    #[test]
    fn empty_path_is_rejected() {
        let t = GridTerrain::uniform(3, 1.0).unwrap();
        assert!(matches!(Walker::new(&t, Vec::<Coord>::new()), Err(PathError::EmptyPath)));
    }

    #[test]
    fn starts_on_first_coordinate() {
        let t = GridTerrain::uniform(3, 1.0).unwrap();
        let w = Walker::new(&t, line(3)).unwrap();
        assert_eq!(w.location(), Coord::new(0, 0));
        assert_eq!(w.remaining(), 2);
        assert!(!w.done_walking());
    }

    #[test]
    fn single_coordinate_is_already_done() {
        let t = GridTerrain::uniform(3, 1.0).unwrap();
        let mut w = Walker::new(&t, line(1)).unwrap();
        assert!(w.done_walking());
        w.advance(10.0);
        assert_eq!(w.location(), Coord::new(0, 0));
    }

    #[test]
    fn large_budget_still_takes_one_step() {
        let t = GridTerrain::uniform(5, 1.0).unwrap();
        let mut w = Walker::new(&t, line(5)).unwrap();
        w.advance(100.0);
        assert_eq!(w.location(), Coord::new(0, 1));
        assert_eq!(w.remaining(), 3);
    }

    #[test]
    fn non_positive_budget_does_not_move() {
        let t = GridTerrain::uniform(3, 1.0).unwrap();
        let mut w = Walker::new(&t, line(3)).unwrap();
        w.advance(0.0);
        w.advance(-1.0);
        assert_eq!(w.location(), Coord::new(0, 0));
    }

    #[test]
    fn zero_cost_steps_are_free() {
        // Entering column 1 costs nothing, column 2 costs 1
        let t = GridTerrain::from_fn(4, |c| if c.col == 1 { 0.0 } else { 1.0 }).unwrap();
        let mut w = Walker::new(&t, line(4)).unwrap();
        w.advance(1.0);
        assert_eq!(w.location(), Coord::new(0, 2));
        w.advance(1.0);
        assert_eq!(w.location(), Coord::new(0, 3));
        assert!(w.done_walking());
    }
}
