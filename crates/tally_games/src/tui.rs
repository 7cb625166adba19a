//! Terminal setup and the synchronous event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument};

use crate::app::App;
use crate::config::TallyConfig;

/// Runs a match until the user quits, restoring the terminal afterwards.
#[instrument(skip_all)]
pub fn run_tui(config: &TallyConfig) -> Result<()> {
    let mut app = App::new(config).context("Invalid configuration")?;

    info!("Starting Tally Games TUI");

    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            if let Err(restore) = leave_terminal(&mut io::stdout()) {
                error!(error = ?restore, "Failed to restore terminal");
            }
            return Err(err.context("Failed to set up terminal"));
        }
    };

    let res = run_app(&mut terminal, &mut app);

    leave_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode, the alternate screen and mouse capture.
///
/// Every step is attempted; the first failure is returned.
fn leave_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
    raw.and(screen)
}

/// Draws, then blocks on the next terminal event, until the app quits.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| app.render(f))?;

        let event = event::read()?;
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        if !app.handle_event(event, area) {
            return Ok(());
        }
    }
}
