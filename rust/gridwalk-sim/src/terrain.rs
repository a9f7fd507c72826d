use clap::ValueEnum;
use gridwalk_core::{Coord, GridTerrain, PathError};

pub const RIDGE_COST: f32 = 9.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TerrainKind {
    /// Every cell costs the same
    Uniform,
    /// Expensive wall down the middle column with a gap on the last row
    Ridge,
}

pub fn generate(kind: TerrainKind, size: usize, step_cost: f32) -> Result<GridTerrain, PathError> {
    match kind {
        TerrainKind::Uniform => GridTerrain::uniform(size, step_cost),
        TerrainKind::Ridge => {
            let side = i32::try_from(size).map_err(|_| PathError::GridTooLarge { size })?;
            let wall = side / 2;
            let gap = side - 1;
            GridTerrain::from_fn(size, |c: Coord| {
                if c.col == wall && c.row != gap { RIDGE_COST * step_cost } else { step_cost }
            })
        }
    }
}
