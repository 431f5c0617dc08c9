//! # Connect Four
//!
//! A two-player Connect Four game with a computer opponent, playable in a
//! full-screen terminal board built with Ratatui or in a plain line-prompt
//! mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players and tokens, state machine
//! - [`ai`] — Opponent policy trait and the random policy
//! - [`session`] — One game session: who plays which side, input parsing
//! - [`ui`] — Terminal UI and line-prompt front ends
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
