//! Keyboard input handling
//!
//! Translates crossterm key codes into the shared key names and then into
//! calculator events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{map_key, CalcEvent};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the calculator
    Calc(CalcEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        if code == KeyCode::Char('q') {
            return KeyAction::Quit;
        }

        Self::key_name(code)
            .and_then(|name| map_key(&name))
            .map_or(KeyAction::None, |binding| KeyAction::Calc(binding.event))
    }

    /// Shared key name for a crossterm key code
    #[must_use]
    pub fn key_name(code: KeyCode) -> Option<String> {
        match code {
            KeyCode::Char(c) => Some(c.to_string()),
            KeyCode::Enter => Some("Enter".to_string()),
            KeyCode::Esc => Some("Escape".to_string()),
            _ => None,
        }
    }

    /// Key code for a shared key name
    #[must_use]
    pub fn key_code(name: &str) -> Option<KeyCode> {
        match name {
            "Enter" => Some(KeyCode::Enter),
            "Escape" => Some(KeyCode::Esc),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(KeyCode::Char(c)),
                    _ => None,
                }
            }
        }
    }
}
