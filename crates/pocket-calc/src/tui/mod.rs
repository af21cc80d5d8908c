//! Terminal front end
//!
//! A ratatui view over the calculator core: keyboard and mouse input go in
//! as [`CalcEvent`](crate::core::CalcEvent)s, snapshots come back out.

mod app;
mod driver;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use driver::TuiDriver;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use terminal::{run, run_with, TerminalSession};
pub use ui::{keypad_area, render, CalculatorUI, HELP_SHORTCUTS, TITLE};
