pub mod cost;
pub mod errors;
pub mod models;
pub mod node;
pub mod options;
pub mod pathfinder;
pub mod queue;
pub mod walker;

pub use cost::{CostModel, GridTerrain};
pub use errors::PathError;
pub use models::{Coord, PathSummary};
pub use node::{NodeId, SearchNode};
pub use options::PathfinderOptions;
pub use pathfinder::{Pathfinder, SearchState};
pub use queue::{MinQueue, Prioritized};
pub use walker::Walker;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
