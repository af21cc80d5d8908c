//! Calculator TUI Example
//!
//! Run with: cargo run --example calculator_tui --features tui

use pocket_calc::tui::{run, CalculatorApp};

fn main() -> std::io::Result<()> {
    let mut app = CalculatorApp::new();
    run(&mut app)?;
    println!("{}", app.display());
    Ok(())
}
