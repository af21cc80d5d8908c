//! Terminal front end as a [`CalculatorDriver`]

use crossterm::event::{KeyEvent, KeyModifiers};

use super::app::CalculatorApp;
use super::input::{InputHandler, KeyAction};
use crate::core::{CalcEvent, Snapshot};
use crate::driver::CalculatorDriver;

/// Drives a [`CalculatorApp`] with synthetic terminal key events
#[derive(Debug, Default)]
pub struct TuiDriver {
    app: CalculatorApp,
    input: InputHandler,
}

impl TuiDriver {
    /// Creates a driver around a fresh app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing app
    #[must_use]
    pub fn with_app(app: CalculatorApp) -> Self {
        Self {
            app,
            input: InputHandler::new(),
        }
    }

    /// The app under test
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }
}

impl CalculatorDriver for TuiDriver {
    fn press(&mut self, event: CalcEvent) {
        self.app.handle_event(event);
    }

    fn press_key(&mut self, key: &str) -> bool {
        let Some(code) = InputHandler::key_code(key) else {
            return false;
        };
        let action = self.input.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        let mapped = matches!(action, KeyAction::Calc(_));
        self.app.handle_action(action);
        mapped
    }

    fn display(&self) -> String {
        self.app.display()
    }

    fn snapshot(&self) -> Snapshot {
        self.app.snapshot()
    }
}
