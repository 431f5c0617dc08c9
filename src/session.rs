//! A single play session: the game state plus who controls each side.
//!
//! The presentation layer feeds human column choices in through
//! [`Session::submit_move`] and lets the computer answer through
//! [`Session::play_computer_turn`]. The computer always plays Player 2.

use tracing::{error, info};

use crate::ai::{policy_for, Difficulty, OpponentPolicy};
use crate::config::GameConfig;
use crate::error::{InputError, SessionError};
use crate::game::{GameOutcome, GameState, MoveError, PlayerId, SwapError, Token, TokenAssignment};

/// Who controls Player 2.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    #[default]
    Computer,
    Human,
}

pub struct Session {
    state: GameState,
    opponent: Opponent,
    difficulty: Difficulty,
    policy: Box<dyn OpponentPolicy>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_policy(config, policy_for(config.difficulty, config.seed))
    }

    /// Session with an explicit opponent policy.
    pub fn with_policy(config: &GameConfig, policy: Box<dyn OpponentPolicy>) -> Self {
        Session {
            state: GameState::with_tokens(TokenAssignment::new(config.first_token)),
            opponent: config.opponent,
            difficulty: config.difficulty,
            policy,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Short description of the match-up for headers.
    pub fn mode_label(&self) -> String {
        match self.opponent {
            Opponent::Computer => format!(
                "vs Computer ({}, {})",
                self.difficulty.label(),
                self.policy.name()
            ),
            Opponent::Human => "2 Player".to_string(),
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.opponent == Opponent::Computer
            && !self.state.is_terminal()
            && self.state.active_player() == PlayerId::Player2
    }

    /// Apply a human player's column choice.
    pub fn submit_move(&mut self, column: usize) -> Result<(), MoveError> {
        let player = self.state.active_player();
        self.state.apply_move(column)?;
        info!(player = player.number(), column, "move played");
        self.log_outcome();
        Ok(())
    }

    /// Let the opponent policy pick and play a column. Returns the column played.
    ///
    /// A policy answer outside the legal set is a contract violation and ends
    /// the session with [`SessionError::PolicyContract`].
    pub fn play_computer_turn(&mut self) -> Result<usize, SessionError> {
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }

        let legal = self.state.legal_columns();
        let column = self.policy.select_move(&legal);
        if !legal.contains(&column) {
            error!(column, ?legal, "opponent policy broke its contract");
            return Err(SessionError::PolicyContract { column, legal });
        }

        if let Err(err) = self.state.apply_move(column) {
            error!(column, %err, "computer move rejected");
            return Err(SessionError::PolicyContract { column, legal });
        }
        info!(column, "computer played");
        self.log_outcome();
        Ok(column)
    }

    /// Let Player 1 pick a token before the first move.
    pub fn choose_token(&mut self, token: Token) -> Result<(), SwapError> {
        if self.state.tokens().token(PlayerId::Player1) != token {
            self.state.swap_tokens()?;
            info!(%token, "player 1 token chosen");
        }
        Ok(())
    }

    /// Start a fresh game with the same settings and tokens.
    pub fn restart(&mut self) {
        self.state = GameState::with_tokens(self.state.tokens());
        info!("new game started");
    }

    /// "Your move, Player 1! Place an X token."
    pub fn turn_prompt(&self) -> String {
        let player = self.state.active_player();
        format!(
            "Your move, Player {}! Place an {} token.",
            player.number(),
            self.state.tokens().token(player)
        )
    }

    /// Legal columns as 1-based numbers, e.g. "1, 2, 5".
    pub fn valid_columns_hint(&self) -> String {
        self.state
            .legal_columns()
            .iter()
            .map(|col| (col + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn outcome_message(&self) -> Option<String> {
        self.state.outcome().map(|outcome| match outcome {
            GameOutcome::Win(player) => format!("{} has won!", player.name()),
            GameOutcome::Draw => "It's a draw!".to_string(),
        })
    }

    fn log_outcome(&self) {
        if let Some(outcome) = self.state.outcome() {
            info!(?outcome, moves = self.state.moves_played(), "game over");
        }
    }
}

/// Parse a typed 1-based column number and check it against the legal
/// 0-based columns. Returns the 0-based column.
pub fn parse_column(input: &str, legal: &[usize]) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let number: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    match number.checked_sub(1) {
        Some(column) if legal.contains(&column) => Ok(column),
        _ => Err(InputError::Unavailable(number)),
    }
}
