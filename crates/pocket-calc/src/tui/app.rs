//! TUI Application State
//!
//! Owns the calculator and renders from a read-only snapshot subscription.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::watch;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use crate::core::{CalcEvent, Calculator, ErrorPolicy, Snapshot};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    view: watch::Receiver<Snapshot>,
    keypad: Keypad,
    input: InputHandler,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ErrorPolicy::default())
    }

    /// Creates a calculator app with the given error-marker policy
    #[must_use]
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        let calculator = Calculator::with_policy(policy);
        let view = calculator.subscribe();
        Self {
            calculator,
            view,
            keypad: Keypad::new(),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// Latest snapshot published by the calculator
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.view.borrow().clone()
    }

    /// Display text from the latest snapshot
    #[must_use]
    pub fn display(&self) -> String {
        self.view.borrow().display.clone()
    }

    /// Short description of the pending operation, e.g. `12 ×`
    #[must_use]
    pub fn pending_display(&self) -> String {
        let view = self.view.borrow();
        match (view.previous_operand, view.pending_operator) {
            (Some(prev), Some(op)) => format!("{} {op}", crate::core::format_number(prev)),
            _ => String::new(),
        }
    }

    /// Returns true if a new snapshot arrived since the last call
    pub fn take_changed(&mut self) -> bool {
        let changed = self.view.has_changed().unwrap_or(false);
        if changed {
            self.view.borrow_and_update();
        }
        changed
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatches an event and highlights its button
    pub fn handle_event(&mut self, event: CalcEvent) {
        self.calculator.dispatch(event);
        self.keypad.highlight(event);
    }

    /// Applies a key action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Calc(event) => self.handle_event(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a terminal key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = self.input.handle_key(key);
        self.handle_action(action);
    }

    /// Handles a mouse event; left clicks on the keypad press buttons
    pub fn handle_mouse(&mut self, mouse: MouseEvent, keypad_area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let event = self
            .keypad
            .hit_test(keypad_area, mouse.column, mouse.row)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.event);
        if let Some(event) = event {
            self.handle_event(event);
        }
    }
}
