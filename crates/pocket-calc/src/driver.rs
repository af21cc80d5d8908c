//! Unified Calculator Driver
//!
//! Write the test logic once, run it against every front end. Both the
//! terminal app and the mock-DOM page implement [`CalculatorDriver`]; the
//! `verify_*` functions below are the shared scenarios.

use crate::core::{CalcEvent, Snapshot, ERROR_MARKER};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust,ignore
/// fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
///     driver.type_keys("3+4*5=");
///     assert_eq!(driver.display(), "35");
/// }
/// ```
pub trait CalculatorDriver {
    /// Delivers one event, as if its keypad button had been pressed
    fn press(&mut self, event: CalcEvent);

    /// Delivers a named key (`"7"`, `"+"`, `"Enter"`, `"Escape"`, ...).
    ///
    /// Returns false when the front end does not map the key.
    fn press_key(&mut self, key: &str) -> bool;

    /// Text the front end is currently showing
    fn display(&self) -> String;

    /// Latest state published by the core
    fn snapshot(&self) -> Snapshot;

    /// Presses clear
    fn clear(&mut self) {
        self.press(CalcEvent::Clear);
    }

    /// Presses one key per character of `keys`
    fn type_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            let mut buf = [0u8; 4];
            self.press_key(c.encode_utf8(&mut buf));
        }
    }
}

#[cfg(feature = "tui")]
pub use crate::tui::TuiDriver;

// ===== Shared Test Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Digits concatenate; a lone leading zero is replaced
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("0");
    assert_eq!(driver.display(), "0");
    driver.type_keys("1203");
    assert_eq!(driver.display(), "1203");
    driver.clear();
}

/// A second decimal point is ignored
pub fn verify_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("..");
    assert_eq!(driver.display(), "0.");
    driver.type_keys("5.5");
    assert_eq!(driver.display(), "0.55");
    driver.clear();
}

/// Operators fold left to right, without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("3+4*5=");
    assert_eq!(driver.display(), "35");
    driver.clear();
}

/// Equals with nothing pending changes nothing
pub fn verify_equals_noop<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("42");
    let before = driver.snapshot();
    driver.press(CalcEvent::Equals);
    assert_eq!(driver.snapshot(), before);
    driver.clear();
}

/// Decimal operands add up to an integer result
pub fn verify_decimal_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("12.5+2.5=");
    assert_eq!(driver.display(), "15");
    driver.clear();
}

/// Division by zero shows the error marker; clear recovers
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("5/0=");
    assert_eq!(driver.display(), ERROR_MARKER);

    driver.clear();
    assert_eq!(driver.display(), "0");
    driver.type_keys("7");
    assert_eq!(driver.display(), "7");
    driver.clear();
}

/// Enter and Escape behave like equals and clear
pub fn verify_named_keys<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("6*7");
    assert!(driver.press_key("Enter"));
    assert_eq!(driver.display(), "42");
    assert!(driver.press_key("Escape"));
    assert_eq!(driver.snapshot(), Snapshot::default());
}

/// Complete verification suite
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_point(driver);
    verify_chaining(driver);
    verify_equals_noop(driver);
    verify_decimal_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_named_keys(driver);
}
