use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("pathfinder not configured: missing {missing}")]
    NotConfigured { missing: &'static str },
    #[error("cannot walk an empty path")]
    EmptyPath,
    #[error("invalid heuristic weight: {0}")]
    InvalidHeuristic(f32),
    #[error("terrain expects {expected} weights, got {actual}")]
    TerrainShape { expected: usize, actual: usize },
    #[error("grid size {size} is too large")]
    GridTooLarge { size: usize },
    #[error("invalid weight {weight} at cell {index}")]
    InvalidWeight { index: usize, weight: f32 },
}

pub type Result<T> = std::result::Result<T, PathError>;
