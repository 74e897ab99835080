//! Shared pieces of the `roadgrid` command-line demo: argument parsing,
//! dispatcher setup and text frames.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use roadgrid_core::{Coord, DEFAULT_COLS, DEFAULT_ROWS, MapText, Terrain, TerrainGrid};
use roadgrid_dispatch::{Dispatcher, Mode};
use roadgrid_paths::SearchOptions;

/// Glyph drawn for the vehicle while it moves.
pub const TOKEN_GLYPH: char = '@';

/// Route a vehicle across a road grid and watch it drive.
#[derive(Debug, Parser)]
#[command(name = "roadgrid", version, about)]
pub struct Cli {
    /// Map file (`.` open, `=` road, `#` blocked, `S` start, `E` end).
    /// Without one, an empty 6x15 grid is used.
    pub map: Option<PathBuf>,

    /// Start cell as `row,col`; overrides the map's `S`.
    #[arg(long, value_parser = parse_coord)]
    pub start: Option<Coord>,

    /// End cell as `row,col`; overrides the map's `E`.
    #[arg(long, value_parser = parse_coord)]
    pub end: Option<Coord>,

    /// Mark a cell as road. Repeatable.
    #[arg(long = "road", value_parser = parse_coord)]
    pub roads: Vec<Coord>,

    /// Block a cell. Repeatable.
    #[arg(long = "block", value_parser = parse_coord)]
    pub blocks: Vec<Coord>,

    /// Delay between playback steps, in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Stop searching once the end is settled.
    #[arg(long)]
    pub early_exit: bool,
}

/// Parse `row,col`.
pub fn parse_coord(s: &str) -> anyhow::Result<Coord> {
    let Some((row, col)) = s.split_once(',') else {
        bail!("expected `row,col`, got `{s}`");
    };
    let row = row.trim().parse().with_context(|| format!("bad row in `{s}`"))?;
    let col = col.trim().parse().with_context(|| format!("bad column in `{s}`"))?;
    Ok(Coord::new(row, col))
}

/// Build a dispatcher from the command line, applying the same operations
/// a user would perform by clicking.
pub fn build_dispatcher(cli: &Cli) -> anyhow::Result<Dispatcher> {
    let mut d = match &cli.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let map = MapText::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
            Dispatcher::from_map(map)
        }
        None => Dispatcher::new(TerrainGrid::new(DEFAULT_ROWS, DEFAULT_COLS)),
    }
    .with_interval(Duration::from_millis(cli.interval_ms))
    .with_options(SearchOptions {
        early_exit: cli.early_exit,
        ..Default::default()
    });

    for &c in &cli.roads {
        d.mark_road(c)?;
    }
    if !cli.blocks.is_empty() {
        d.set_mode(Mode::Delete);
        for &c in &cli.blocks {
            d.click(c)?;
        }
    }
    if let Some(c) = cli.start {
        d.set_mode(Mode::SetStart);
        d.click(c)?;
    }
    if let Some(c) = cli.end {
        d.set_mode(Mode::SetEnd);
        d.click(c)?;
    }
    Ok(d)
}

/// Draw the grid with the vehicle at `token` and the end marker.
pub fn frame(grid: &TerrainGrid, token: Coord, end: Option<Coord>) -> String {
    let mut out = String::new();
    for (c, t) in grid.iter() {
        if c.col == 0 && c.row > 0 {
            out.push('\n');
        }
        let ch = if c == token {
            TOKEN_GLYPH
        } else if Some(c) == end {
            'E'
        } else {
            t.glyph()
        };
        out.push(ch);
    }
    out
}

/// Count how many cells of each terrain a grid holds, for the summary line.
pub fn terrain_summary(grid: &TerrainGrid) -> String {
    format!(
        "{} road, {} open, {} blocked",
        grid.count(Terrain::Road),
        grid.count(Terrain::Open),
        grid.count(Terrain::Blocked)
    )
}
