//! Terminal UI for Strictly Rewind.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::games::tictactoe::Symbols;
use app::App;

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(symbols: Symbols) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    enable_raw_mode()?;
    let mut terminal = restore_on_err(setup_terminal(), restore_terminal)?;

    let res = run_app(&mut terminal, App::new(symbols));

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `restore` if `result` is an error, keeping the original error.
fn restore_on_err<T>(result: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    if result.is_ok() {
        return result;
    }
    if let Err(restore_err) = restore() {
        error!(error = ?restore_err, "Failed to restore terminal");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}
