use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing::trace;

use crate::grid::Grid;
use crate::grid::GridError;
use crate::rules::B3S23;
use crate::rules::Rule;

/// Owns the current generation and steps it forward.
#[derive(Debug, Clone)]
pub struct Automaton {
    grid: Grid,
    rule: Rule,

    /// How many times [`Automaton::advance`] has completed
    generation: u64,
}

impl Automaton {
    /// Create an automaton over a `width` by `height` grid of random cells drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self, GridError> {
        let grid = Grid::random(width, height, rng)?;

        Ok(Self::from_grid(grid))
    }

    /// Like [`Automaton::new`], but seeds its own generator. Without a seed the generator is
    /// seeded from the operating system.
    pub fn with_seed(width: usize, height: usize, seed: Option<u64>) -> Result<Self, GridError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        debug!(?seed, "Seeding automaton");

        Self::new(width, height, &mut rng)
    }

    /// Start from a known generation.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            rule: B3S23,
            generation: 0,
        }
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute the next generation, make it the current one, and return it.
    ///
    /// Every cell of the new generation is computed from the previous one, which is only dropped
    /// once the new one is complete.
    pub fn advance(&mut self) -> &Grid {
        let next = self.next_grid();

        self.grid = next;
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "Advanced"
        );

        &self.grid
    }

    fn next_grid(&self) -> Grid {
        let grid = &self.grid;

        let cells = grid
            .iter()
            .map(|(x, y, state)| self.rule.next_state(state, grid.neighbor_count(x, y)))
            .collect();

        Grid::from_cells(grid.width(), grid.height(), cells)
    }
}
