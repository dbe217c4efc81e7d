use std::num::NonZeroUsize;
use std::time::Duration;

use clap::Parser;
use clap::value_parser;

/// Everything the host can tune.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about = "Conway's Game of Life in the terminal")]
pub struct Config {
    /// Grid width in cells. Fits the screen when unset
    #[arg(long)]
    pub width: Option<NonZeroUsize>,

    /// Grid height in cells. Fits the screen when unset
    #[arg(long)]
    pub height: Option<NonZeroUsize>,

    /// Time between generations, in milliseconds
    #[arg(long, value_name = "MS", default_value = "20", value_parser = parse_tick)]
    pub tick: Duration,

    /// Side length of a cell, in braille dots
    #[arg(long, value_name = "DOTS", default_value_t = NonZeroUsize::MIN)]
    pub cell_size: NonZeroUsize,

    /// Seed for the initial grid. Random when unset
    #[arg(long, value_parser = value_parser!(u64))]
    pub seed: Option<u64>,
}

impl Config {
    /// Grid dimensions in cells for a screen of `dots_w` by `dots_h` dots. Unset dimensions take
    /// as many cells as fit on the screen.
    pub fn grid_size(&self, dots_w: usize, dots_h: usize) -> (usize, usize) {
        let cell_size = self.cell_size.get();

        let width = self.width.map_or(dots_w / cell_size, NonZeroUsize::get);
        let height = self.height.map_or(dots_h / cell_size, NonZeroUsize::get);

        (width, height)
    }
}

fn parse_tick(s: &str) -> Result<Duration, String> {
    let ms: u64 = s.parse().map_err(|e| format!("{e}"))?;

    if ms == 0 {
        return Err("tick must be positive".to_string());
    }

    Ok(Duration::from_millis(ms))
}
