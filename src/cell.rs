use rand::Rng;

/// The state of a single cell in the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub const DEAD_CHAR: char = '.';
    pub const ALIVE_CHAR: char = 'O';

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Pick a state uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random_bool(0.5).into()
    }

    pub fn as_char(self) -> char {
        match self {
            CellState::Dead => Self::DEAD_CHAR,
            CellState::Alive => Self::ALIVE_CHAR,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::DEAD_CHAR => Some(CellState::Dead),
            Self::ALIVE_CHAR => Some(CellState::Alive),
            _ => None,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::CellState;

    #[test]
    fn chars_round_trip() {
        for state in [CellState::Dead, CellState::Alive] {
            assert_eq!(CellState::from_char(state.as_char()), Some(state));
        }

        assert_eq!(CellState::from_char('x'), None);
    }

    #[test]
    fn random_produces_both_states() {
        let mut rng = StdRng::seed_from_u64(7);
        let states: Vec<_> = (0..64).map(|_| CellState::random(&mut rng)).collect();

        assert!(states.contains(&CellState::Alive));
        assert!(states.contains(&CellState::Dead));
    }
}
