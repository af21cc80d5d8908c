//! Mock-DOM driver
//!
//! Runs the calculator behind the mock DOM page: button clicks and keydowns go
//! in through the DOM, and the display element is synced from the snapshot
//! subscription, the same way the browser binding works.

use tokio::sync::watch;
use tracing::trace;

use super::dom::{DomEvent, ListenerId, MockDom, DISPLAY_ID};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::core::{CalcEvent, Calculator, ErrorPolicy, Snapshot};
use crate::driver::CalculatorDriver;
use crate::layout;

/// CSS class on the most recently pressed button
pub const ACTIVE_CLASS: &str = "active";

/// CSS class on the display while it shows the error marker
pub const ERROR_CLASS: &str = "error";

/// Driver wrapping the calculator and the mock DOM page
#[derive(Debug)]
pub struct WasmDriver {
    calculator: Calculator,
    view: watch::Receiver<Snapshot>,
    keypad: WasmKeypad,
    dom: MockDom,
    listener: Option<ListenerId>,
    active_button: Option<String>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a mounted page with the default error policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ErrorPolicy::default())
    }

    /// Creates a mounted page with the given error policy
    #[must_use]
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        let calculator = Calculator::with_policy(policy);
        let view = calculator.subscribe();
        let keypad = WasmKeypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);

        let mut driver = Self {
            calculator,
            view,
            keypad,
            dom,
            listener: None,
            active_button: None,
        };
        driver.mount();
        driver
    }

    /// Attaches the document keydown listener
    pub fn mount(&mut self) {
        if self.listener.is_none() {
            self.listener = Some(self.dom.add_keydown_listener());
        }
    }

    /// Detaches the keydown listener; clicks keep working
    pub fn unmount(&mut self) {
        if let Some(id) = self.listener.take() {
            self.dom.remove_keydown_listener(id);
        }
    }

    /// Whether the keydown listener is attached
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the keypad definition
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Text of the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom.get_element_text(DISPLAY_ID).unwrap_or_default()
    }

    /// Clicks the element with `element_id`; returns true if it was a keypad button
    pub fn click_button(&mut self, element_id: &str) -> bool {
        if !self.dom.dispatch_event(DomEvent::click(element_id)) {
            return false;
        }
        match self.keypad.handle_click(element_id) {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Fires a document keydown; returns true if it produced an event
    pub fn key_down(&mut self, key: &str) -> bool {
        if !self.dom.dispatch_event(DomEvent::key_down(key)) {
            return false;
        }
        let Some(binding) = WasmKeypad::key_to_binding(key) else {
            return false;
        };
        if binding.prevent_default {
            self.dom.prevent_default();
        }
        self.apply(binding.event);
        true
    }

    fn apply(&mut self, event: CalcEvent) {
        self.calculator.dispatch(event);
        self.mark_active(&layout::element_id(&event));
        self.sync_dom();
    }

    fn mark_active(&mut self, id: &str) {
        if let Some(prev) = self.active_button.take() {
            if let Some(elem) = self.dom.get_element_mut(&prev) {
                elem.remove_class(ACTIVE_CLASS);
            }
        }
        if let Some(elem) = self.dom.get_element_mut(id) {
            elem.add_class(ACTIVE_CLASS);
            self.active_button = Some(id.to_string());
        }
    }

    /// Copies the latest snapshot into the display element, if it changed
    fn sync_dom(&mut self) {
        if !self.view.has_changed().unwrap_or(false) {
            return;
        }
        let snapshot = self.view.borrow_and_update().clone();
        trace!(display = %snapshot.display, "syncing display element");
        if let Some(display) = self.dom.get_element_mut(DISPLAY_ID) {
            display.set_text(&snapshot.display);
            if snapshot.is_error() {
                display.add_class(ERROR_CLASS);
            } else {
                display.remove_class(ERROR_CLASS);
            }
        }
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, event: CalcEvent) {
        self.click_button(&layout::element_id(&event));
    }

    fn press_key(&mut self, key: &str) -> bool {
        self.key_down(key)
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn snapshot(&self) -> Snapshot {
        self.view.borrow().clone()
    }
}
