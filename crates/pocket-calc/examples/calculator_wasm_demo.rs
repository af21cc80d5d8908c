//! Mock DOM Calculator Demo
//!
//! Drives the browser page through the mock DOM and then runs the shared
//! driver scenarios against it.
//!
//! Run with: cargo run --example calculator_wasm_demo

use pocket_calc::driver::{run_all_scenarios, CalculatorDriver};
use pocket_calc::wasm::{WasmDriver, DISPLAY_ID};

fn main() {
    let mut driver = WasmDriver::new();

    println!("Mock DOM page:");
    println!("  {DISPLAY_ID}");
    for btn in driver.keypad().buttons() {
        println!("  {:<14} row {} col {}", btn.id, btn.row, btn.col);
    }

    println!();
    println!("Clicking 1 2 . 5 + 2 . 5 =");
    for id in [
        "btn-1", "btn-2", "btn-decimal", "btn-5", "btn-add", "btn-2", "btn-decimal", "btn-5",
        "btn-equals",
    ] {
        driver.click_button(id);
    }
    println!("  display: {}", driver.display_text());

    println!();
    println!("Typing 5 / 0 Enter");
    for key in ["5", "/", "0", "Enter"] {
        driver.key_down(key);
    }
    println!("  display: {}", driver.display_text());

    println!();
    println!("Event log:");
    for (i, dispatched) in driver.dom().event_history().iter().enumerate() {
        let prevented = if dispatched.default_prevented {
            " (default prevented)"
        } else {
            ""
        };
        println!("  [{i}] {:?}{prevented}", dispatched.event);
    }

    driver.clear();
    run_all_scenarios(&mut driver);
    println!();
    println!("Shared scenarios passed on the mock DOM driver");
}
