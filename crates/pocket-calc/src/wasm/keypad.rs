//! Browser keypad
//!
//! The same seventeen buttons as the terminal keypad, addressed by DOM
//! element id.

use super::dom::{DomElement, MockDom, KEYPAD_ID};
use crate::core::{map_key, CalcEvent, KeyBinding};
use crate::layout::{self, COLS, ROWS};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button dispatches
    pub event: CalcEvent,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(event: CalcEvent, row: usize, col: usize) -> Self {
        Self {
            event,
            id: layout::element_id(&event),
            row,
            col,
        }
    }

    /// CSS class describing the kind of button
    #[must_use]
    pub fn kind_class(&self) -> &'static str {
        match self.event {
            CalcEvent::Digit(_) | CalcEvent::DecimalPoint => "key-number",
            CalcEvent::Operator(_) => "key-operator",
            CalcEvent::Equals => "key-equals",
            CalcEvent::Clear => "key-clear",
        }
    }

    /// Builds the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.event.label())
            .with_class("keypad-btn")
            .with_class(self.kind_class())
            .with_attr("data-row", &self.row.to_string())
            .with_attr("data-col", &self.col.to_string())
    }
}

/// Browser keypad layout
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = layout::standard()
            .into_iter()
            .map(|slot| KeypadButtonDef::new(slot.event, slot.row, slot.col))
            .collect();
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column; empty cells return `None`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad"),
            |keypad, btn| keypad.with_child(btn.to_element()),
        )
    }

    /// Event for a click on `element_id`
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<CalcEvent> {
        self.find_button_by_id(element_id).map(|btn| btn.event)
    }

    /// Binding for a `KeyboardEvent.key` value
    #[must_use]
    pub fn key_to_binding(key: &str) -> Option<KeyBinding> {
        map_key(key)
    }
}

/// Extension trait for MockDom to add keypad
pub trait MockDomKeypadExt {
    /// Adds the keypad container and registers each button by id
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        let container = keypad.create_keypad_element();
        self.root.children.push(container.clone());
        self.register_element(container);

        for btn in keypad.buttons() {
            self.register_element(btn.to_element());
        }
    }
}
