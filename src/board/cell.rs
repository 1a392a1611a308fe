use super::error::BoardError;
use super::player::Player;

/// Contents of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Cell {
    Empty,
    /// Blocked at setup; never playable and never part of a run.
    Forbidden,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(*player),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Forbidden => '-',
            Cell::Occupied(player) => player.to_char(),
        }
    }

    pub fn from_char(c: char) -> Result<Self, BoardError> {
        match c {
            '.' | '_' => Ok(Cell::Empty),
            '-' | '#' => Ok(Cell::Forbidden),
            'X' | 'x' => Ok(Cell::Occupied(Player::X)),
            'O' | 'o' => Ok(Cell::Occupied(Player::O)),
            _ => Err(BoardError::InvalidCellCharacter {
                invalid_character: c,
            }),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}
