use serde::{Deserialize, Serialize};

/// One of the two teams. `Home` (team 0) attacks the goal at the top of the level
/// (y = 0), `Away` (team 1) attacks the goal at the bottom.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    /// Returns the opposing side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Team index, `0` for home and `1` for away.
    pub fn index(&self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }

    /// Create a side from a team index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::Home),
            1 => Some(Side::Away),
            _ => None,
        }
    }

    /// Sign of the y axis pointing from this side's target goal towards its own goal
    /// (`2 * team - 1`): `-1` for home, `+1` for away.
    pub fn sign(&self) -> f64 {
        match self {
            Side::Home => -1.0,
            Side::Away => 1.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "Home"),
            Side::Away => write!(f, "Away"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for side in Side::ALL {
            assert_eq!(Side::from_index(side.index()), Some(side));
        }
        assert_eq!(Side::from_index(2), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Side::Home.opposite(), Side::Away);
        assert_eq!(Side::Away.opposite().opposite(), Side::Away);
    }
}
