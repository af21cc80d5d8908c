//! Terminal session and event loop
//!
//! [`TerminalSession`] puts the terminal into raw mode with mouse capture when
//! acquired and restores it when dropped, so the keyboard and mouse
//! subscription lives exactly as long as the view.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info};

use super::app::CalculatorApp;
use super::ui::{keypad_area, render};

/// Raw-mode terminal owned by the calculator view
#[derive(Debug)]
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Enters raw mode, the alternate screen and mouse capture
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!("terminal session acquired");
        Ok(Self { terminal })
    }

    /// The terminal to draw on
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
        debug!("terminal session released");
    }
}

/// Runs the calculator in the real terminal until the user quits
pub fn run(app: &mut CalculatorApp) -> io::Result<()> {
    let mut session = TerminalSession::acquire()?;
    info!("calculator view started");
    let result = run_with(session.terminal_mut(), app, event::read);
    info!("calculator view closed");
    result
}

/// Event loop over any backend and event source
///
/// Draws, waits for one event, handles it, and repeats until the app asks
/// to quit or the source fails.
pub fn run_with<B, E>(terminal: &mut Terminal<B>, app: &mut CalculatorApp, mut next_event: E) -> io::Result<()>
where
    B: Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        let frame = terminal.draw(|f| render(app, f))?;
        let area = frame.area;

        match next_event()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, keypad_area(area)),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
