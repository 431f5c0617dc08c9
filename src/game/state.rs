use tracing::{debug, instrument};

use super::board::{Board, DropError, COLS};
use super::player::{PlayerId, TokenAssignment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(PlayerId),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("game is over")]
    GameOver,
}

impl From<DropError> for MoveError {
    fn from(err: DropError) -> Self {
        match err {
            DropError::ColumnFull => MoveError::ColumnFull,
            DropError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// Tokens can only be traded before the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    #[error("tokens cannot be swapped once play has started")]
    GameStarted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    active_player: PlayerId,
    tokens: TokenAssignment,
    outcome: Option<GameOutcome>,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::with_tokens(TokenAssignment::default())
    }

    /// Create initial game state with a chosen token assignment
    pub fn with_tokens(tokens: TokenAssignment) -> Self {
        GameState {
            board: Board::new(),
            active_player: PlayerId::Player1,
            tokens,
            outcome: None,
            moves_played: 0,
        }
    }

    /// Player whose turn it is, or who made the winning move once the game is won
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tokens(&self) -> TokenAssignment {
        self.tokens
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Some(GameOutcome::Win(player)) => Some(player),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Some(GameOutcome::Draw)
    }

    /// Columns whose top cell is still empty, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Exchange the players' tokens. Only allowed before the first move.
    pub fn swap_tokens(&mut self) -> Result<(), SwapError> {
        if self.moves_played > 0 {
            return Err(SwapError::GameStarted);
        }
        self.tokens = self.tokens.swapped();
        Ok(())
    }

    /// Drop the active player's token into `column`.
    ///
    /// On success the outcome is evaluated (win first, then draw) and the turn
    /// passes to the other player only if the game continues. On error the
    /// state is left untouched.
    #[instrument(level = "debug", skip(self), fields(player = ?self.active_player))]
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.active_player.to_cell())?;
        self.moves_played += 1;
        debug!(row, column, "token placed");

        if self.board.has_run(self.active_player.to_cell()) {
            self.outcome = Some(GameOutcome::Win(self.active_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.active_player = self.active_player.other();
        }

        if let Some(outcome) = self.outcome {
            debug!(?outcome, "game finished");
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::{Cell, ROWS};
    use super::super::player::Token;
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const A: Cell = Cell::Player1;
    const B: Cell = Cell::Player2;

    /// Full board without any four-in-a-row.
    const DRAWN_ROWS: [[Cell; COLS]; ROWS] = [
        [A, A, A, B, A, A, A],
        [B, B, B, A, B, B, B],
        [A, A, A, B, A, A, A],
        [B, B, B, A, B, B, B],
        [A, A, A, B, A, A, A],
        [B, B, B, A, B, B, B],
    ];

    fn state_from(board: Board, active_player: PlayerId) -> GameState {
        GameState {
            board,
            active_player,
            tokens: TokenAssignment::default(),
            outcome: None,
            moves_played: 1,
        }
    }

    fn random_game(seed: u64) -> Vec<GameState> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::initial();
        let mut history = vec![state];
        while !state.is_terminal() {
            let legal = state.legal_columns();
            let column = legal[rng.random_range(0..legal.len())];
            state.apply_move(column).unwrap();
            history.push(state);
        }
        history
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.active_player(), PlayerId::Player1);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(state.winner(), None);
        assert!(!state.is_draw());
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::initial();
        state.apply_move(3).unwrap();

        assert_eq!(state.active_player(), PlayerId::Player2);
        assert_eq!(state.board().get(5, 3), Cell::Player1);
        assert_eq!(state.moves_played(), 1);
    }

    #[test]
    fn test_invalid_column_leaves_state_unchanged() {
        let mut state = GameState::initial();
        state.apply_move(2).unwrap();
        let before = state;

        assert_eq!(state.apply_move(7), Err(MoveError::InvalidColumn));
        assert_eq!(state, before);
    }

    #[test]
    fn test_vertical_win_scenario() {
        // Only Player 1 moves; the turn is handed back after each drop
        let mut state = GameState::initial();
        for placed in 1..=4 {
            state.apply_move(3).unwrap();
            if placed < 4 {
                assert_eq!(state.winner(), None);
                state.active_player = PlayerId::Player1;
            }
        }

        for row in 2..=5 {
            assert_eq!(state.board().get(row, 3), Cell::Player1);
        }
        assert_eq!(state.winner(), Some(PlayerId::Player1));
        assert_eq!(state.active_player(), PlayerId::Player1);
    }

    #[test]
    fn test_horizontal_win_scenario() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Player1).unwrap();
        }
        let mut state = state_from(board, PlayerId::Player1);

        state.apply_move(3).unwrap();
        assert_eq!(state.board().get(5, 3), Cell::Player1);
        assert_eq!(state.winner(), Some(PlayerId::Player1));
        assert_eq!(state.outcome(), Some(GameOutcome::Win(PlayerId::Player1)));
    }

    #[test]
    fn test_win_through_alternating_play() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state.apply_move(col).unwrap(); // Player 1
            if col < 3 {
                state.apply_move(col).unwrap(); // Player 2, one row up
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(PlayerId::Player1));
    }

    #[test]
    fn test_draw_scenario() {
        let mut board = Board::from_rows(DRAWN_ROWS);
        board.set(0, 3, Cell::Empty);
        let mut state = state_from(board, PlayerId::Player2);

        state.apply_move(3).unwrap();
        assert!(state.board().is_full());
        assert!(state.is_draw());
        assert_eq!(state.winner(), None);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_filling_win_is_reported_as_win() {
        let mut board = Board::from_rows(DRAWN_ROWS);
        board.set(0, 3, Cell::Empty);
        let mut state = state_from(board, PlayerId::Player1);

        // Completes the top row for Player 1 and fills the grid
        state.apply_move(3).unwrap();
        assert!(state.board().is_full());
        assert_eq!(state.winner(), Some(PlayerId::Player1));
        assert!(!state.is_draw());
    }

    #[test]
    fn test_full_column_scenario() {
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.apply_move(0).unwrap();
        }
        assert!(!state.is_terminal());
        let before = state;

        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
        assert_eq!(state, before);
        assert!(!state.legal_columns().contains(&0));
    }

    #[test]
    fn test_diagonal_win_scenario() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Player2).unwrap();
        board.drop_piece(1, Cell::Player1).unwrap();
        board.drop_piece(1, Cell::Player2).unwrap();
        board.drop_piece(2, Cell::Player1).unwrap();
        board.drop_piece(2, Cell::Player1).unwrap();
        board.drop_piece(2, Cell::Player2).unwrap();
        for _ in 0..3 {
            board.drop_piece(3, Cell::Player1).unwrap();
        }
        let mut state = state_from(board, PlayerId::Player2);

        state.apply_move(3).unwrap();
        assert_eq!(state.board().get(2, 3), Cell::Player2);
        assert_eq!(state.winner(), Some(PlayerId::Player2));
    }

    #[test]
    fn test_terminal_state_is_frozen() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state.apply_move(col).unwrap();
            if col < 3 {
                state.apply_move(col).unwrap();
            }
        }
        let frozen = state;

        for col in 0..COLS {
            assert_eq!(state.apply_move(col), Err(MoveError::GameOver));
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_finished_game_reports_game_over_before_bad_column() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state.apply_move(col).unwrap();
            if col < 3 {
                state.apply_move(col).unwrap();
            }
        }
        let frozen = state;

        assert_eq!(state.apply_move(COLS), Err(MoveError::GameOver));
        assert_eq!(state.apply_move(usize::MAX), Err(MoveError::GameOver));
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_swap_tokens_before_first_move() {
        let mut state = GameState::initial();
        state.swap_tokens().unwrap();
        assert_eq!(state.tokens().token(PlayerId::Player1), Token::O);

        state.apply_move(0).unwrap();
        assert_eq!(state.swap_tokens(), Err(SwapError::GameStarted));
        assert_eq!(state.tokens().token(PlayerId::Player1), Token::O);
    }

    #[test]
    fn test_random_games_keep_invariants() {
        for seed in 0..50 {
            let history = random_game(seed);
            for pair in history.windows(2) {
                let (before, after) = (&pair[0], &pair[1]);
                for col in 0..COLS {
                    let (h0, h1) = (before.board().column_height(col), after.board().column_height(col));
                    assert!(h1 >= h0 && h1 <= ROWS);
                }
                assert!(after.board().respects_gravity());
                for col in after.legal_columns() {
                    assert_eq!(after.board().get(0, col), Cell::Empty);
                }
            }

            let last = history.last().unwrap();
            assert!(last.is_terminal());
            assert!(last.winner().is_some() != last.is_draw());
        }
    }
}
