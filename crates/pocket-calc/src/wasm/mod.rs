//! Browser front end
//!
//! The mock DOM page and its driver are always compiled so the browser
//! behavior can be tested natively; the real `web-sys` binding needs the
//! `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{init, BrowserCalculator};
pub use dom::{DispatchedEvent, DomElement, DomEvent, ListenerId, MockDom, DISPLAY_ID, KEYPAD_ID};
pub use driver::{WasmDriver, ACTIVE_CLASS, ERROR_CLASS};
pub use keypad::{KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
