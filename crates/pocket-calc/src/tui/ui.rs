//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Area the keypad occupies when the whole UI is drawn into `area`.
///
/// Mouse hit-testing must use the same rectangle the widget was drawn in.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    let columns = horizontal_layout(area);
    let [_, keypad] = vertical_layout(columns[0]);
    keypad
}

fn horizontal_layout(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Length(KEYPAD_WIDTH), // Display + keypad
            Constraint::Min(20),              // Help sidebar
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

fn vertical_layout(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Display
            Constraint::Length(KEYPAD_HEIGHT), // Keypad
            Constraint::Min(0),
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.app.snapshot();
        let value_style = if snapshot.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                self.app.pending_display(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(snapshot.display, value_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [main, help] = horizontal_layout(area);
        let [display, keypad] = vertical_layout(main);

        self.render_display(display, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
        self.render_help(help, buf);
    }
}

/// Keypad panel width: 4 buttons of 5 cells plus border
pub const KEYPAD_WIDTH: u16 = 22;

/// Keypad panel height: 5 rows of 3 cells plus border
pub const KEYPAD_HEIGHT: u16 = 17;

/// Window title
pub const TITLE: &str = " Pocket Calculator ";

/// Keyboard shortcuts shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digit"),
    (".", "Point"),
    ("+ - * /", "Operator"),
    ("Enter =", "Equals"),
    ("Esc c", "Clear"),
    ("q", "Quit"),
    ("Ctrl+C", "Quit"),
    ("Mouse", "Press key"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &CalculatorApp) -> String {
        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_initial_display() {
        let app = CalculatorApp::new();
        let text = draw(&app);
        assert!(text.contains("Pocket Calculator"));
        assert!(text.contains("Display"));
        assert!(text.contains("Keypad"));
        assert!(text.contains("Help"));
    }

    #[test]
    fn test_render_shows_display_value() {
        let mut app = CalculatorApp::new();
        for n in [4, 2] {
            app.handle_event(CalcEvent::digit(n).unwrap());
        }
        assert!(draw(&app).contains("42"));
    }

    #[test]
    fn test_render_shows_error_marker() {
        let mut app = CalculatorApp::new();
        app.handle_event(CalcEvent::digit(5).unwrap());
        app.handle_event(CalcEvent::Operator(crate::core::Operation::Divide));
        app.handle_event(CalcEvent::digit(0).unwrap());
        app.handle_event(CalcEvent::Equals);
        assert!(draw(&app).contains("Error"));
    }

    #[test]
    fn test_keypad_area_matches_layout() {
        let area = Rect::new(0, 0, 60, 24);
        let keypad = keypad_area(area);
        assert_eq!(keypad.width, KEYPAD_WIDTH);
        assert_eq!(keypad.height, KEYPAD_HEIGHT);
        assert_eq!(keypad.x, 1);
        assert_eq!(keypad.y, 1 + 4);
    }

    #[test]
    fn test_help_shortcuts_not_empty() {
        assert!(!HELP_SHORTCUTS.is_empty());
        assert!(HELP_SHORTCUTS.iter().any(|(k, _)| k.contains("Esc")));
    }
}
