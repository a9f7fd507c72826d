use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use gridwalk_core::{Coord, PathSummary, Pathfinder, PathfinderOptions, Walker};

mod config;
mod terrain;

use config::SimConfig;
use terrain::TerrainKind;

/// Largest grid side the simulator will allocate.
const MAX_GRID_SIZE: u64 = 4096;

#[derive(Parser, Debug)]
#[command(
    name = "gridwalk-sim",
    version,
    about = "Search a generated grid and walk the resulting path"
)]
struct Args {
    /// Grid dimension (cells per side)
    #[arg(
        long,
        default_value_t = 16,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_GRID_SIZE)
    )]
    size: usize,

    /// Start cell as ROW,COL
    #[arg(long, value_parser = parse_coord, default_value = "0,0")]
    start: Coord,

    /// End cell as ROW,COL (defaults to the opposite corner)
    #[arg(long, value_parser = parse_coord)]
    end: Option<Coord>,

    /// Heuristic weight: 0 = Dijkstra, 1 = A*, >1 = greedy
    #[arg(long, default_value_t = 1.0)]
    heuristic: f32,

    #[arg(long, value_enum, default_value_t = TerrainKind::Uniform)]
    terrain: TerrainKind,

    /// Base cost of entering a cell
    #[arg(long, default_value_t = 1.0)]
    step_cost: f32,

    /// Time budget handed to the walker on every tick
    #[arg(long, default_value_t = 1.0)]
    step_time: f32,
}

#[derive(Serialize)]
struct Report {
    version: &'static str,
    search: PathSummary,
    ticks: u64,
    location: Coord,
    done_walking: bool,
}

fn parse_coord(s: &str) -> std::result::Result<Coord, String> {
    let (r, c) = s.split_once(',').ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = r.trim().parse::<i32>().map_err(|e| format!("bad row {r:?}: {e}"))?;
    let col = c.trim().parse::<i32>().map_err(|e| format!("bad col {c:?}: {e}"))?;
    Ok(Coord::new(row, col))
}

fn init_tracing(cfg: &SimConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if cfg.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cfg = SimConfig::from_env();
    init_tracing(&cfg);

    let args = Args::parse();
    info!(?args, core_version = %gridwalk_core::version(), "starting simulation");

    let terrain = terrain::generate(args.terrain, args.size, args.step_cost)
        .context("invalid terrain")?;
    let end = match args.end {
        Some(end) => end,
        None => {
            let far = i32::try_from(args.size.saturating_sub(1)).context("grid size out of range")?;
            Coord::new(far, far)
        }
    };

    let options = PathfinderOptions { heuristic_weight: args.heuristic };
    let mut pathfinder =
        Pathfinder::with_options(&terrain, &options).context("invalid search options")?;
    pathfinder.set_path_start(args.start);
    pathfinder.set_path_end(end);
    pathfinder.compute_path().context("search failed")?;

    let search = pathfinder.summary();
    info!(
        search_size = search.search_size,
        path_len = search.path.len(),
        path_cost = search.cost,
        reached = search.reached_end,
        "search done"
    );
    if !search.reached_end {
        warn!(end = %end, "search exhausted before reaching end; walking partial path");
    }

    let mut walker =
        Walker::new(&terrain, search.path.iter().copied()).context("cannot walk search result")?;
    let mut ticks = 0u64;
    while !walker.done_walking() && ticks < cfg.max_ticks {
        walker.advance(args.step_time);
        ticks += 1;
        debug!(tick = ticks, location = %walker.location(), "tick");
    }
    if !walker.done_walking() {
        warn!(ticks, max_ticks = cfg.max_ticks, "tick limit hit before end of path");
    }

    let report = Report {
        version: gridwalk_core::version(),
        search,
        ticks,
        location: walker.location(),
        done_walking: walker.done_walking(),
    };
    println!("{}", serde_json::to_string_pretty(&report).context("serialize report")?);
    Ok(())
}
