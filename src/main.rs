//! Terminal Minesweeper runner (default binary).
//!
//! Reads one key at a time with crossterm, feeds it through the session and
//! flushes the resulting draw commands. There is no tick loop: the only wait
//! is the blocking key read.

mod cli;

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_mines::core::{GameConfig, GameState};
use tui_mines::engine::Session;
use tui_mines::input::key_token;
use tui_mines::term::TerminalRenderer;

use cli::Args;

fn main() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return Ok(invalid_arguments(e)),
    };

    let config = args.config();
    if let Err(e) = config.validate() {
        return Ok(invalid_arguments(e));
    }
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    if let Err(e) = config.check_fits(cols, rows) {
        return Ok(invalid_arguments(e));
    }

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(?config, seed, "starting session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;
    Ok(ExitCode::SUCCESS)
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u64) -> Result<()> {
    let mut session = Session::new(GameState::new(config, seed));
    term.execute(&session.start())?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let step = session.handle(key_token(key));
        term.execute(&step.commands)?;
        if step.end.is_some() {
            return Ok(());
        }
    }
}

fn invalid_arguments(reason: impl std::fmt::Display) -> ExitCode {
    eprintln!("Invalid arguments.");
    eprintln!("{reason}");
    ExitCode::from(1)
}

fn init_logging(path: &std::path::Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
