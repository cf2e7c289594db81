use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::{Env, Target};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use twenty48_tui::config::AppConfig;
use twenty48_tui::ui::App;

/// Play 2048 in the terminal.
#[derive(Parser)]
#[command(name = "twenty48", version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Path to a TOML configuration file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override the tile value that wins the game
    #[arg(long)]
    win: Option<u32>,

    /// Fix the RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .init();
    }

    // Load configuration
    let mut app_config = AppConfig::from_optional_file(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("loading config from {}", path.display()),
            None => "building default config".to_string(),
        })?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        app_config.board.height = height;
    }
    if let Some(width) = cli.width {
        app_config.board.width = width;
    }
    if let Some(win) = cli.win {
        app_config.board.win_threshold = win;
    }
    if cli.seed.is_some() {
        app_config.game.seed = cli.seed;
    }
    app_config.validate().context("invalid command-line overrides")?;

    let engine = app_config.build_engine().context("creating game board")?;
    info!(
        "starting {}x{} game, goal {}",
        app_config.board.height, app_config.board.width, app_config.board.win_threshold
    );

    run(App::new(engine))
}

fn run(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the session failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("game session failed")
}
