use crate::errors::{PathError, Result};
use crate::models::Coord;

pub const DEFAULT_STEP_COST: f32 = 1.0;

/// Source of distances for the search and the walker.
pub trait CostModel {
    /// Grid dimension; valid coordinates lie in `[0, size)` on both axes.
    fn size(&self) -> usize;

    /// Non-negative estimate of the cost from `from` to `to`.
    fn heuristic_distance(&self, from: Coord, to: Coord) -> f32;

    /// Non-negative cost of stepping from `from` to the adjacent `to`.
    fn travel_cost(&self, from: Coord, to: Coord) -> f32;
}

impl<C: CostModel + ?Sized> CostModel for &C {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn heuristic_distance(&self, from: Coord, to: Coord) -> f32 {
        (**self).heuristic_distance(from, to)
    }

    fn travel_cost(&self, from: Coord, to: Coord) -> f32 {
        (**self).travel_cost(from, to)
    }
}

/// Square terrain where each cell carries the cost of entering it.
#[derive(Clone, Debug, PartialEq)]
pub struct GridTerrain {
    size: usize,
    weights: Vec<f32>,
    min_weight: f32,
}

impl Default for GridTerrain {
    fn default() -> Self {
        Self { size: 0, weights: Vec::new(), min_weight: DEFAULT_STEP_COST }
    }
}

impl GridTerrain {
    pub fn uniform(size: usize, cost: f32) -> Result<Self> {
        let cells = Self::cell_count(size)?;
        Self::check_weight(0, cost)?;
        Ok(Self { size, weights: vec![cost; cells], min_weight: cost })
    }

    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(Coord) -> f32,
    {
        let cells = Self::cell_count(size)?;
        let side = size as i32;
        let mut weights = Vec::with_capacity(cells);
        for row in 0..side {
            for col in 0..side {
                weights.push(f(Coord::new(row, col)));
            }
        }
        Self::from_weights(size, weights)
    }

    /// Build from a row-major table; every weight must be finite and non-negative.
    pub fn from_weights(size: usize, weights: Vec<f32>) -> Result<Self> {
        let expected = Self::cell_count(size)?;
        if weights.len() != expected {
            return Err(PathError::TerrainShape { expected, actual: weights.len() });
        }
        for (index, &weight) in weights.iter().enumerate() {
            Self::check_weight(index, weight)?;
        }
        let min_weight = Self::min_of(&weights);
        Ok(Self { size, weights, min_weight })
    }

    /// Weight of entering `c`; out-of-range cells cost the cheapest weight.
    pub fn weight(&self, c: Coord) -> f32 {
        c.index(self.size).map(|i| self.weights[i]).unwrap_or(self.min_weight)
    }

    /// `size²`, provided every coordinate on the grid fits in an `i32`.
    fn cell_count(size: usize) -> Result<usize> {
        match size.checked_mul(size) {
            Some(cells) if i32::try_from(size).is_ok() => Ok(cells),
            _ => Err(PathError::GridTooLarge { size }),
        }
    }

    fn check_weight(index: usize, weight: f32) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(PathError::InvalidWeight { index, weight });
        }
        Ok(())
    }

    fn min_of(weights: &[f32]) -> f32 {
        weights.iter().copied().reduce(f32::min).unwrap_or(DEFAULT_STEP_COST)
    }
}

impl CostModel for GridTerrain {
    fn size(&self) -> usize {
        self.size
    }

    fn heuristic_distance(&self, from: Coord, to: Coord) -> f32 {
        from.manhattan(&to) as f32 * self.min_weight
    }

    fn travel_cost(&self, _from: Coord, to: Coord) -> f32 {
        self.weight(to)
    }
}
