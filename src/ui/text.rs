//! Line-prompt mode: prints the board as text and reads one column number
//! per line.

use std::io::{BufRead, Write};

use clap::ValueEnum;

use crate::error::UiError;
use crate::game::{GameState, PlayerId, Token, COLS, ROWS};
use crate::session::{parse_column, Session};

/// Render the board with 1-based column headings.
pub fn board_to_string(state: &GameState) -> String {
    let tokens = state.tokens();
    let rule = "-".repeat(COLS * 4 + 1);
    let mut out = String::new();

    let headings: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
    out.push_str("  ");
    out.push_str(&headings.join("   "));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in 0..ROWS {
        for col in 0..COLS {
            let symbol = tokens
                .token_for_cell(state.board().get(row, col))
                .map_or(' ', |token| token.symbol());
            out.push_str(&format!("| {symbol} "));
        }
        out.push_str("|\n");
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

/// Ask Player 1 for a token. An empty answer keeps the current one.
///
/// Returns `false` when the input is exhausted.
fn pick_token<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<bool, UiError> {
    let mut line = String::new();
    loop {
        let current = session.state().tokens().token(PlayerId::Player1);
        write!(out, "Player 1, pick a token (X/O) [{current}]: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(true);
        }
        match Token::from_str(answer, true) {
            Ok(token) => {
                if let Err(err) = session.choose_token(token) {
                    writeln!(out, "{err}")?;
                }
                return Ok(true);
            }
            Err(_) => writeln!(out, "Invalid token: {answer}. Try again.")?,
        }
    }
}

/// Play one game over a line-based reader and writer.
///
/// Player 1 picks a token first if the game has not started. Returns when the
/// game ends and the result has been acknowledged, or when the input is
/// exhausted.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut out: W) -> Result<(), UiError> {
    let mut line = String::new();

    if session.state().moves_played() == 0 && !pick_token(session, &mut input, &mut out)? {
        return Ok(());
    }

    loop {
        write!(out, "\n{}", board_to_string(session.state()))?;

        if let Some(outcome) = session.outcome_message() {
            writeln!(out, "{outcome} Press Enter to exit.")?;
            out.flush()?;
            line.clear();
            input.read_line(&mut line)?;
            return Ok(());
        }

        if session.is_computer_turn() {
            let column = session.play_computer_turn()?;
            writeln!(out, "Computer played column {}.", column + 1)?;
            continue;
        }

        writeln!(out, "{}", session.turn_prompt())?;
        writeln!(out, "Valid columns are {}.", session.valid_columns_hint())?;

        loop {
            write!(out, "What is your move? ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::info!("input closed, leaving game");
                return Ok(());
            }

            match parse_column(&line, &session.state().legal_columns()) {
                Ok(column) => {
                    // parse_column only yields legal columns
                    if let Err(err) = session.submit_move(column) {
                        tracing::warn!(%err, column, "move rejected");
                        writeln!(out, "{err}")?;
                        continue;
                    }
                    break;
                }
                Err(err) => {
                    tracing::debug!(%err, "rejected input");
                    writeln!(out, "Invalid column selected: {}. Try again.", line.trim())?;
                }
            }
        }
    }
}
