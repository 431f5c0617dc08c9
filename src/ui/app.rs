use crate::error::{SessionError, UiError};
use crate::game::{MoveError, PlayerId, COLS};
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    session: Session,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    poll_interval: Duration,
}

impl App {
    pub fn new(session: Session, poll_interval: Duration) -> Self {
        App {
            session,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            poll_interval,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), UiError> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> Result<(), UiError> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)?;
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) -> Result<(), SessionError> {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece()?;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece()?;
            }
            KeyCode::Char('t') => {
                self.toggle_token();
            }
            KeyCode::Char('r') => {
                self.session.restart();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
        Ok(())
    }

    /// Swap Player 1's token; only possible before the first move
    fn toggle_token(&mut self) {
        let next = self.session.state().tokens().token(PlayerId::Player1).other();
        self.message = Some(match self.session.choose_token(next) {
            Ok(()) => format!("Player 1 plays {next}."),
            Err(err) => format!("Cannot change tokens: {err}."),
        });
    }

    /// Drop piece in selected column, then let the computer answer
    fn drop_piece(&mut self) -> Result<(), SessionError> {
        if self.session.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return Ok(());
        }

        match self.session.submit_move(self.selected_column) {
            Ok(()) => {
                if self.session.is_computer_turn() {
                    let column = self.session.play_computer_turn()?;
                    self.message = Some(format!("Computer played column {}.", column + 1));
                }
                if let Some(outcome) = self.session.outcome_message() {
                    self.message = Some(format!("{outcome} Press 'r' to restart."));
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
