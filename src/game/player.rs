use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            PlayerId::Player1 => Cell::Player1,
            PlayerId::Player2 => Cell::Player2,
        }
    }

    /// 1-based player number used in prompts
    pub fn number(self) -> u8 {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerId::Player1 => "Player 1",
            PlayerId::Player2 => "Player 2",
        }
    }
}

/// Display symbol a player drops on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
pub enum Token {
    #[value(name = "X")]
    X,
    #[value(name = "O")]
    O,
}

impl Token {
    pub fn other(self) -> Token {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Token::X => 'X',
            Token::O => 'O',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Bijective mapping from players to tokens. Player 2 always holds the token
/// Player 1 did not pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAssignment {
    player1: Token,
}

impl TokenAssignment {
    pub fn new(player1: Token) -> Self {
        TokenAssignment { player1 }
    }

    pub fn token(&self, player: PlayerId) -> Token {
        match player {
            PlayerId::Player1 => self.player1,
            PlayerId::Player2 => self.player1.other(),
        }
    }

    /// Token shown for a cell, `None` for an empty cell
    pub fn token_for_cell(&self, cell: Cell) -> Option<Token> {
        match cell {
            Cell::Empty => None,
            Cell::Player1 => Some(self.token(PlayerId::Player1)),
            Cell::Player2 => Some(self.token(PlayerId::Player2)),
        }
    }

    pub fn swapped(self) -> Self {
        TokenAssignment {
            player1: self.player1.other(),
        }
    }
}

impl Default for TokenAssignment {
    fn default() -> Self {
        TokenAssignment::new(Token::X)
    }
}
