//! Terminal window front-end
//!
//! Draws the calculator with ratatui and feeds mouse clicks from crossterm
//! to the [`Controller`](crate::controller::Controller).

mod app;
mod input;
mod keypad;
mod ui;

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info, warn};

pub use app::CalculatorApp;
pub use input::{InputHandler, UiAction};
pub use keypad::{button_rect, hit_test, KeypadWidget};
pub use ui::{layout, render, CalculatorLayout, CalculatorUI, WINDOW_TITLE};

use crate::error::AppResult;

/// Runs the event loop until the app asks to quit
///
/// `next_event` blocks until the next terminal event arrives. Clicks are
/// hit-tested against the area of the most recent draw.
///
/// # Errors
///
/// Returns an error if drawing or reading an event fails.
pub fn run_app<B, E>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
    mut next_event: E,
) -> AppResult<()>
where
    B: Backend,
    E: FnMut() -> io::Result<Event>,
{
    let handler = InputHandler::new();

    while !app.should_quit() {
        let area = terminal.draw(|frame| render(app, frame))?.area;

        match handler.handle_event(&next_event()?) {
            UiAction::Click { column, row } => {
                app.click(column, row, area);
            }
            UiAction::Release => app.release(),
            UiAction::Quit => app.quit(),
            UiAction::Redraw | UiAction::None => {}
        }
    }

    debug!(display = app.display(), "event loop finished");
    Ok(())
}

/// Opens the calculator window on the current terminal
///
/// The terminal is restored even when the event loop fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, driven or restored.
pub fn launch() -> AppResult<()> {
    info!("opening calculator window");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        return first_error(Err(e.into()), disable_raw_mode().map_err(Into::into));
    }

    let result = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(mut terminal) => {
            let mut app = CalculatorApp::new();
            let result = run_app(&mut terminal, &mut app, event::read);
            let restored = restore(&mut terminal);
            first_error(result, restored)
        }
        Err(e) => {
            let left = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            first_error(Err(e.into()), left.map_err(Into::into))
        }
    };

    let raw = disable_raw_mode();
    info!("calculator window closed");
    first_error(result, raw.map_err(Into::into))
}

/// Keeps the earlier failure when a later cleanup step also fails
fn first_error(result: AppResult<()>, cleanup: AppResult<()>) -> AppResult<()> {
    if let (Err(_), Err(e)) = (&result, &cleanup) {
        warn!(error = %e, "terminal cleanup failed");
    }
    result.and(cleanup)
}

fn restore(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> AppResult<()> {
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
