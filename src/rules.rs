use crate::cell::CellState;

/// Rules of Conway's Game of Life.
pub const B3S23: Rule = Rule::new(0b1000, 0b1100);

/// # Representation
/// A rule is a pair of bitmasks over neighbor counts. If bit `i` of `births` is on, a dead cell
/// with `i` live neighbors comes alive. If bit `i` of `survivals` is on, a live cell with `i`
/// live neighbors stays alive.
///
/// ```notrust
/// b3s23: births    = 0b0_0000_1000
///        survivals = 0b0_0000_1100
/// ```
///
/// Only [`B3S23`] is exposed.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    births: u16,
    survivals: u16,
}

impl Rule {
    const fn new(births: u16, survivals: u16) -> Self {
        Self {
            births: births & 0x1FF,
            survivals: survivals & 0x1FF,
        }
    }

    /// Compute the next state of a cell given its current state and the number of live cells in
    /// its Moore neighborhood.
    pub fn next_state(&self, current: CellState, neighbors: u8) -> CellState {
        // Anything past 8 neighbors can't happen, and no bit is set there anyway
        let Some(bit) = 1u16.checked_shl(neighbors as u32) else {
            return CellState::Dead;
        };

        let mask = match current {
            CellState::Alive => self.survivals,
            CellState::Dead => self.births,
        };

        (mask & bit == bit).into()
    }
}

/// Apply [`B3S23`] to a single cell.
pub fn next_state(current: CellState, neighbors: u8) -> CellState {
    B3S23.next_state(current, neighbors)
}
