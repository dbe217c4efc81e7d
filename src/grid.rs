use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::CellOffset;
use crate::cell::CellState;

/// Offsets of the Moore neighborhood around a cell.
const NEIGHBORHOOD: [(CellOffset, CellOffset); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height}, both must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("Cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfRange {
        x: CellOffset,
        y: CellOffset,
        width: usize,
        height: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern is empty")]
    Empty,

    #[error("Row {row} has {got} cells, expected {exp}")]
    RaggedRow { row: usize, exp: usize, got: usize },

    #[error("Unexpected character '{got}' at row {row}, column {col}")]
    UnexpectedChar { got: char, row: usize, col: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// One generation of the automaton.
///
/// Cells are stored row by row, so cell `(x, y)` lives at index `y * width + x`. Everything past
/// the edges is considered dead; the grid does not wrap around.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid where every cell is dead.
    pub fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        let len = Self::checked_len(width, height)?;

        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Create a grid where every cell is independently picked dead or alive.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let len = Self::checked_len(width, height)?;
        let cells = (0..len).map(|_| CellState::random(&mut *rng)).collect();

        debug!(width, height, "Created random grid");

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from row-major cells. The caller guarantees `cells.len() == width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        assert_eq!(cells.len(), width * height, "cell buffer does not match grid size");

        Self {
            width,
            height,
            cells,
        }
    }

    fn checked_len(width: usize, height: usize) -> Result<usize, GridError> {
        let invalid = GridError::InvalidDimension { width, height };

        if width == 0 || height == 0 {
            return Err(invalid);
        }

        // Every coordinate must also fit in a `CellOffset`, one past the edge included
        if CellOffset::try_from(width).is_err() || CellOffset::try_from(height).is_err() {
            return Err(invalid);
        }

        width.checked_mul(height).ok_or(invalid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` names a cell of this grid.
    pub fn in_bounds(&self, x: CellOffset, y: CellOffset) -> bool {
        // Dimensions were checked to fit in a `CellOffset` on construction
        (0..self.width as CellOffset).contains(&x) && (0..self.height as CellOffset).contains(&y)
    }

    pub fn state_at(&self, x: CellOffset, y: CellOffset) -> Result<CellState, GridError> {
        let i = self.index(x, y)?;

        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: CellOffset, y: CellOffset, state: CellState) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = state;

        Ok(())
    }

    /// Number of live cells among the 8 neighbors of `(x, y)`. Neighbors past the edge of the
    /// grid count as dead.
    pub fn neighbor_count(&self, x: CellOffset, y: CellOffset) -> u8 {
        let mut total = 0;

        for (dx, dy) in NEIGHBORHOOD {
            let (nx, ny) = (x.saturating_add(dx), y.saturating_add(dy));

            if !self.in_bounds(nx, ny) {
                continue;
            }

            if self.cells[self.xy_from(nx, ny)].is_alive() {
                total += 1;
            }
        }

        total
    }

    /// Iterate over every cell as `(x, y, state)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (CellOffset, CellOffset, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(n, &state)| {
            let (x, y) = self.xy_to(n);
            (x, y, state)
        })
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn index(&self, x: CellOffset, y: CellOffset) -> Result<usize, GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.xy_from(x, y))
    }

    fn xy_to(&self, n: usize) -> (CellOffset, CellOffset) {
        ((n % self.width) as CellOffset, (n / self.width) as CellOffset)
    }

    fn xy_from(&self, x: CellOffset, y: CellOffset) -> usize {
        y as usize * self.width + x as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }

            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        write!(f, "{self}")
    }
}

/// Parse the plaintext pattern format, one row per line, `.` for dead and `O` for alive. Lines
/// starting with `!` are comments.
///
/// See: https://conwaylife.com/wiki/Plaintext
impl FromStr for Grid {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('!'))
            .collect();

        let Some(first) = rows.first() else {
            return Err(PatternError::Empty);
        };

        let width = first.chars().count();
        let mut grid = Grid::dead(width, rows.len())?;

        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(PatternError::RaggedRow {
                    row,
                    exp: width,
                    got,
                });
            }

            for (col, c) in line.chars().enumerate() {
                let Some(state) = CellState::from_char(c) else {
                    return Err(PatternError::UnexpectedChar { got: c, row, col });
                };

                grid.cells[row * width + col] = state;
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::Grid;
    use super::GridError;
    use super::PatternError;
    use crate::cell::CellState;

    fn alive(width: usize, height: usize) -> Grid {
        let cells = vec![CellState::Alive; width * height];
        Grid::from_cells(width, height, cells)
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let err = Grid::dead(w, h).unwrap_err();
            assert_eq!(err, GridError::InvalidDimension { width: w, height: h });
        }
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = Grid::dead(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimension { .. }));
    }

    #[test]
    fn in_bounds_edges() {
        let grid = Grid::dead(4, 3).unwrap();

        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(0, 3));

        for y in 0..3 {
            for x in 0..4 {
                assert!(grid.in_bounds(x, y), "({x}, {y}) should be in bounds");
            }
        }
    }

    #[test]
    fn neighbor_count_all_alive() {
        let grid = alive(4, 5);

        // corners
        for (x, y) in [(0, 0), (3, 0), (0, 4), (3, 4)] {
            assert_eq!(grid.neighbor_count(x, y), 3, "corner ({x}, {y})");
        }

        // edges
        for (x, y) in [(1, 0), (2, 0), (0, 2), (3, 2), (1, 4)] {
            assert_eq!(grid.neighbor_count(x, y), 5, "edge ({x}, {y})");
        }

        // interior
        for (x, y) in [(1, 1), (2, 2), (2, 3)] {
            assert_eq!(grid.neighbor_count(x, y), 8, "interior ({x}, {y})");
        }
    }

    #[test]
    fn neighbor_count_ignores_self() {
        let mut grid = Grid::dead(3, 3).unwrap();
        grid.set(1, 1, CellState::Alive).unwrap();

        assert_eq!(grid.neighbor_count(1, 1), 0);
        assert_eq!(grid.neighbor_count(0, 0), 1);
    }

    #[test]
    fn neighbor_count_single_row() {
        let grid = alive(5, 1);

        assert_eq!(grid.neighbor_count(0, 0), 1);
        assert_eq!(grid.neighbor_count(2, 0), 2);
    }

    #[test]
    fn state_at_out_of_range() {
        let grid = Grid::dead(2, 2).unwrap();

        for (x, y) in [(-1, 0), (2, 0), (0, -1), (0, 2)] {
            let err = grid.state_at(x, y).unwrap_err();
            assert_eq!(
                err,
                GridError::OutOfRange {
                    x,
                    y,
                    width: 2,
                    height: 2
                }
            );
        }
    }

    #[test]
    fn set_out_of_range() {
        let mut grid = Grid::dead(2, 2).unwrap();

        assert!(grid.set(2, 2, CellState::Alive).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn iter_is_row_major() {
        let grid: Grid = "O.\n.O\nOO".parse().unwrap();
        let cells: Vec<_> = grid.iter().collect();

        assert_eq!(
            cells,
            [
                (0, 0, CellState::Alive),
                (1, 0, CellState::Dead),
                (0, 1, CellState::Dead),
                (1, 1, CellState::Alive),
                (0, 2, CellState::Alive),
                (1, 2, CellState::Alive),
            ]
        );
    }

    #[test]
    fn random_is_reproducible() {
        let a = Grid::random(16, 9, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(16, 9, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
        assert!(a.population() > 0 && a.population() < 16 * 9);
    }

    #[test]
    fn parse_and_display() {
        let text = "..O\nO..";
        let grid: Grid = text.parse().unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.state_at(2, 0), Ok(CellState::Alive));
        assert_eq!(grid.state_at(0, 1), Ok(CellState::Alive));
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn parse_skips_comments() {
        let grid: Grid = "!Name: Block\nOO\n!\nOO".parse().unwrap();

        assert_eq!(grid.to_string(), "OO\nOO");
        assert_eq!("!Name: Empty".parse::<Grid>(), Err(PatternError::Empty));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(PatternError::Empty));
        assert_eq!(
            "...\n..".parse::<Grid>(),
            Err(PatternError::RaggedRow {
                row: 1,
                exp: 3,
                got: 2
            })
        );
        assert_eq!(
            ".x".parse::<Grid>(),
            Err(PatternError::UnexpectedChar {
                got: 'x',
                row: 0,
                col: 1
            })
        );
    }
}
