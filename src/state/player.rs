//! The two players and the cell contents they produce.

use std::fmt;

/// One of the two players. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who moves first in every game.
    pub const FIRST: Player = Player::One;

    /// Get the other player.
    pub fn other(self) -> Player {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Convert player to the cell they occupy.
    pub fn cell(self) -> Cell {
        match self {
            Self::One => Cell::One,
            Self::Two => Cell::Two,
        }
    }

    /// Player number as shown to users (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Piece colour used when drawing this player's pieces.
    pub fn color(self) -> &'static str {
        match self {
            Self::One => "red",
            Self::Two => "blue",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    One,
    Two,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Owner of the piece in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::One => Some(Player::One),
            Self::Two => Some(Player::Two),
        }
    }

    /// Numeric form used in JSON snapshots (0 = empty).
    pub fn as_u8(self) -> u8 {
        self.owner().map_or(0, Player::number)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::FIRST, Player::One);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::One.to_string(), "Player 1");
        assert_eq!(Player::Two.to_string(), "Player 2");
    }

    #[test]
    fn test_player_colors() {
        assert_eq!(Player::One.color(), "red");
        assert_eq!(Player::Two.color(), "blue");
    }

    #[test]
    fn test_cell_owner_roundtrip() {
        for player in [Player::One, Player::Two] {
            assert_eq!(Cell::from(player).owner(), Some(player));
            assert_eq!(player.cell().as_u8(), player.number());
        }
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Empty.as_u8(), 0);
        assert!(Cell::default().is_empty());
    }
}
