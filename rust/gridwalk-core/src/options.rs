use serde::{Deserialize, Serialize};

use crate::errors::{PathError, Result};

pub const DEFAULT_HEURISTIC_WEIGHT: f32 = 1.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathfinderOptions {
    /// 0 searches like Dijkstra, 1 is plain A*, above 1 trades optimality for speed.
    pub heuristic_weight: f32,
}

impl Default for PathfinderOptions {
    fn default() -> Self {
        Self { heuristic_weight: DEFAULT_HEURISTIC_WEIGHT }
    }
}

impl PathfinderOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.heuristic_weight.is_finite() || self.heuristic_weight < 0.0 {
            return Err(PathError::InvalidHeuristic(self.heuristic_weight));
        }
        Ok(())
    }
}
