use std::fmt;

/// One of the two sides. X always maximizes the evaluation, O minimizes it.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    /// Fixed iteration order used wherever a tie-break between sides is needed.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn opposite(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Player::X => true,
            Player::O => false,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
