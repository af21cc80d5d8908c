//! Pocket Calculator
//!
//! A four-function calculator built as an event-driven state machine.
//! Digits, the decimal point, operators, equals and clear go in as
//! [`CalcEvent`](core::CalcEvent)s; every state change is published as a
//! [`Snapshot`](core::Snapshot) that front ends render from.
//!
//! Operators are applied strictly left to right, the way a pocket
//! calculator does it: `3 + 4 × 5 =` shows `35`.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in ["1", "2", ".", "5", "+", "2", ".", "5", "="] {
//!     if let Some(binding) = map_key(key) {
//!         calc.dispatch(binding.event);
//!     }
//! }
//! assert_eq!(calc.display(), "15");
//!
//! calc.dispatch(CalcEvent::Operator(Operation::Divide));
//! calc.dispatch(CalcEvent::digit(0).unwrap());
//! calc.dispatch(CalcEvent::Equals);
//! assert_eq!(calc.display(), ERROR_MARKER);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod layout;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser front end; the mock DOM is always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_number, map_key, CalcError, CalcEvent, CalcResult, Calculator, Digit,
        ErrorPolicy, KeyBinding, Operation, Snapshot, ERROR_MARKER,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}
