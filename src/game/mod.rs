//! Core Connect Four game logic: board representation, players and their
//! tokens, and the game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, RUN_LENGTH};
pub use player::{PlayerId, Token, TokenAssignment};
pub use state::{GameOutcome, GameState, MoveError, SwapError};
