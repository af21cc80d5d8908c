//! Numerical Keypad for the TUI Calculator
//!
//! The keypad can be clicked with the mouse and highlights the button that
//! matches the last key pressed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::CalcEvent;
use crate::layout::{self, COLS, ROWS};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: String,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// Event this button dispatches
    pub event: CalcEvent,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
}

impl KeypadButton {
    /// Creates an unpressed button
    #[must_use]
    pub fn new(event: CalcEvent, row: usize, col: usize) -> Self {
        Self {
            label: event.label(),
            pressed: false,
            event,
            row,
            col,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad: seventeen buttons on a 5x4 grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = layout::standard()
            .into_iter()
            .map(|slot| KeypadButton::new(slot.event, slot.row, slot.col))
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

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column; empty cells return `None`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds the button that dispatches `event`
    #[must_use]
    pub fn find_button(&self, event: CalcEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for `event`, releasing the rest
    pub fn highlight(&mut self, event: CalcEvent) {
        self.release_all();
        if let Some(btn) = self.buttons.iter_mut().find(|b| b.event == event) {
            btn.set_pressed(true);
        }
    }

    /// Index of the highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / COLS as u16;
        let btn_height = (area.height - 2) / ROWS as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.buttons.iter().position(|b| b.row == row && b.col == col)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < COLS as u16 || inner.height < ROWS as u16 {
            return;
        }

        let btn_width = inner.width / COLS as u16;
        let btn_height = inner.height / ROWS as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + (btn.col as u16 * btn_width);
            let y = inner.y + (btn.row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.event {
                    CalcEvent::Digit(_) | CalcEvent::DecimalPoint => {
                        Style::default().fg(Color::White)
                    }
                    CalcEvent::Operator(_) => Style::default().fg(Color::Yellow),
                    CalcEvent::Equals => Style::default().fg(Color::Green),
                    CalcEvent::Clear => Style::default().fg(Color::Red),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_len = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_len) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    #[test]
    fn test_button_label_from_event() {
        let btn = KeypadButton::new(CalcEvent::Operator(Operation::Multiply), 0, 2);
        assert_eq!(btn.label, "×");
        assert!(!btn.pressed);
    }

    #[test]
    fn test_keypad_button_count() {
        assert_eq!(Keypad::new().button_count(), 17);
    }

    #[test]
    fn test_keypad_dimensions() {
        assert_eq!(Keypad::default().dimensions(), (5, 4));
    }

    #[test]
    fn test_get_button_at_corners() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().event, CalcEvent::Clear);
        assert_eq!(
            keypad.get_button_at(0, 3).unwrap().event,
            CalcEvent::Operator(Operation::Subtract)
        );
        assert_eq!(
            keypad.get_button_at(4, 0).unwrap().event,
            CalcEvent::DecimalPoint
        );
        assert!(keypad.get_button_at(4, 3).is_none());
        assert!(keypad.get_button_at(9, 9).is_none());
    }

    #[test]
    fn test_highlight_and_release() {
        let mut keypad = Keypad::new();
        keypad.highlight(CalcEvent::Equals);
        let idx = keypad.pressed().unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().event, CalcEvent::Equals);

        keypad.highlight(CalcEvent::digit(5).unwrap());
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);

        keypad.release_all();
        assert!(keypad.pressed().is_none());
    }

    #[test]
    fn test_find_button() {
        let keypad = Keypad::new();
        let idx = keypad.find_button(CalcEvent::digit(0).unwrap()).unwrap();
        let btn = keypad.get_button(idx).unwrap();
        assert_eq!((btn.row, btn.col), (3, 3));
    }

    #[test]
    fn test_hit_test_inside_buttons() {
        let keypad = Keypad::new();
        // 4 cols x 5 rows of 5x3 cells, plus border
        let area = Rect::new(10, 5, 22, 17);
        let clear = keypad.hit_test(area, 11, 6).unwrap();
        assert_eq!(keypad.get_button(clear).unwrap().event, CalcEvent::Clear);

        let plus = keypad.hit_test(area, 11 + 15, 6 + 3).unwrap();
        assert_eq!(
            keypad.get_button(plus).unwrap().event,
            CalcEvent::Operator(Operation::Add)
        );
    }

    #[test]
    fn test_hit_test_border_and_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 22, 17);
        assert!(keypad.hit_test(area, 10, 6).is_none());
        assert!(keypad.hit_test(area, 11, 5).is_none());
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 40, 40).is_none());
    }

    #[test]
    fn test_hit_test_empty_cell() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 17);
        // row 4, col 3 has no button
        assert!(keypad.hit_test(area, 1 + 15, 1 + 12).is_none());
    }

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 17);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Keypad"));
        assert!(text.contains("[7]"));
        assert!(text.contains("[÷]"));
        assert!(text.contains("[.]"));
    }

    #[test]
    fn test_widget_too_small_only_draws_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(!text.contains('['));
    }
}
