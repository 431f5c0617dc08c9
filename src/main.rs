use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use connect4::ai::Difficulty;
use connect4::config::{AppConfig, ConfigSource};
use connect4::game::Token;
use connect4::session::{Opponent, Session};
use connect4::ui::{self, terminal::setup_or_restore, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect4", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "connect4.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a game
    Play(PlayArgs),
    /// Print the default configuration as TOML
    Config,
}

#[derive(clap::Args)]
struct PlayArgs {
    /// Who plays Player 2
    #[arg(long, value_enum)]
    vs: Option<Opponent>,

    /// Computer difficulty label
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Token for Player 1
    #[arg(long, value_enum, ignore_case = true)]
    first_token: Option<Token>,

    /// Seed for the computer opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Line-prompt mode instead of the full-screen board
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = match cli.command {
        Command::Config => {
            print!("{}", AppConfig::default_toml());
            return Ok(());
        }
        Command::Play(args) => args,
    };

    let (mut app_config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(level) = cli.log_level {
        app_config.logging.level = level;
    }
    if let Some(vs) = args.vs {
        app_config.game.opponent = vs;
    }
    if let Some(difficulty) = args.difficulty {
        app_config.game.difficulty = difficulty;
    }
    if let Some(token) = args.first_token {
        app_config.game.first_token = token;
    }
    if args.seed.is_some() {
        app_config.game.seed = args.seed;
    }
    if args.plain {
        app_config.ui.plain = true;
    }
    app_config.validate().context("invalid settings")?;

    let level = app_config.logging.parsed_level()?;
    init_logging(level, cli.log_file.as_deref(), !app_config.ui.plain)?;
    if source == ConfigSource::Defaults {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let mut session = Session::new(&app_config.game);
    tracing::info!(mode = %session.mode_label(), "starting game");

    if app_config.ui.plain {
        let stdin = io::stdin();
        ui::text::run(&mut session, stdin.lock(), io::stdout()).context("playing game")?;
    } else {
        let poll_interval = Duration::from_millis(app_config.ui.poll_interval_ms);
        run_fullscreen(App::new(session, poll_interval))?;
    }
    Ok(())
}

/// Logs go to `log_file` when given, else to stderr unless the full-screen
/// board owns the terminal.
fn init_logging(level: Level, log_file: Option<&Path>, fullscreen: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if !fullscreen => builder.with_writer(io::stderr).init(),
        None => {}
    }
    Ok(())
}

fn run_fullscreen(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        },
    )
    .context("setting up terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("playing game")
}
