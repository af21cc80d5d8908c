//! Keyboard-to-event mapping shared by every front end
//!
//! Keys are named the way browsers report `KeyboardEvent.key`: single
//! characters for printable keys, `Enter` and `Escape` for the rest. The
//! terminal front end translates crossterm codes into these names first.

use super::{CalcEvent, Digit, Operation};

/// A key that maps to a calculator event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// The event to dispatch
    pub event: CalcEvent,
    /// Whether the host must suppress its own default handling of the key
    pub prevent_default: bool,
}

impl KeyBinding {
    const fn plain(event: CalcEvent) -> Self {
        Self {
            event,
            prevent_default: false,
        }
    }
}

/// Maps a key name to its calculator event.
///
/// Unmapped keys return `None` and must be left to the host.
#[must_use]
pub fn map_key(key: &str) -> Option<KeyBinding> {
    match key {
        "Enter" | "=" => return Some(KeyBinding::plain(CalcEvent::Equals)),
        "Escape" | "c" | "C" => return Some(KeyBinding::plain(CalcEvent::Clear)),
        _ => {}
    }

    let mut chars = key.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if let Some(d) = Digit::from_char(c) {
        return Some(KeyBinding::plain(CalcEvent::Digit(d)));
    }
    match c {
        '.' => Some(KeyBinding::plain(CalcEvent::DecimalPoint)),
        '+' | '-' | '*' | '/' => Operation::from_char(c).map(|op| KeyBinding {
            event: CalcEvent::Operator(op),
            // '/' opens quick-find in some browsers
            prevent_default: op == Operation::Divide,
        }),
        _ => None,
    }
}
