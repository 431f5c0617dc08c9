//! Presentation layer: a full-screen board driven by arrow keys, and a
//! plain line-prompt mode.

mod app;
mod game_view;
pub mod terminal;
pub mod text;

pub use app::App;
