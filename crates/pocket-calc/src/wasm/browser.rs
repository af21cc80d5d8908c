//! Browser bindings
//!
//! Only compiled with the `wasm` feature. The page owns the calculator; the
//! document listeners only forward events to it and are removed when their
//! guard is dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tokio::sync::watch;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, KeyboardEvent};

use crate::core::{CalcEvent, Calculator, ErrorPolicy, Snapshot};
use crate::wasm::driver::ERROR_CLASS;
use crate::wasm::keypad::WasmKeypad;

/// Calculator state shared between the exported object and its listeners
#[derive(Debug)]
struct Page {
    calculator: Calculator,
    view: watch::Receiver<Snapshot>,
    keypad: WasmKeypad,
    display: Option<Element>,
}

impl Page {
    fn new() -> Self {
        let calculator = Calculator::new();
        let view = calculator.subscribe();
        Self {
            calculator,
            view,
            keypad: WasmKeypad::new(),
            display: None,
        }
    }

    fn apply(&mut self, event: CalcEvent) {
        self.calculator.dispatch(event);
        self.sync();
    }

    fn click(&mut self, element_id: &str) -> bool {
        match self.keypad.handle_click(element_id) {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Returns whether the browser default action should be suppressed
    fn key_down(&mut self, key: &str) -> Option<bool> {
        let binding = WasmKeypad::key_to_binding(key)?;
        self.apply(binding.event);
        Some(binding.prevent_default)
    }

    fn sync(&mut self) {
        if !self.view.has_changed().unwrap_or(false) {
            return;
        }
        let snapshot = self.view.borrow_and_update().clone();
        if let Some(display) = &self.display {
            display.set_text_content(Some(&snapshot.display));
            let _ = display
                .class_list()
                .toggle_with_force(ERROR_CLASS, snapshot.is_error());
        }
    }
}

/// Document listener that is removed when dropped
struct ListenerGuard {
    document: Document,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    fn attach(document: &Document, kind: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            document: document.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("kind", &self.kind).finish()
    }
}

/// Browser calculator, the JavaScript entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    page: Rc<RefCell<Page>>,
    listeners: Vec<ListenerGuard>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates an unmounted calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            page: Rc::new(RefCell::new(Page::new())),
            listeners: Vec::new(),
        }
    }

    /// Binds the display element and attaches document click and keydown listeners
    pub fn mount(&mut self, display_id: &str) -> Result<(), JsValue> {
        self.unmount();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let display = document
            .get_element_by_id(display_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{display_id}")))?;

        {
            let mut page = self.page.borrow_mut();
            display.set_text_content(Some(&page.calculator.display().to_string()));
            page.display = Some(display);
        }

        let page = Rc::clone(&self.page);
        let keydown = ListenerGuard::attach(&document, "keydown", move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Ok(mut page) = page.try_borrow_mut() else {
                return;
            };
            if page.key_down(&key_event.key()) == Some(true) {
                event.prevent_default();
            }
        })?;

        let page = Rc::clone(&self.page);
        let click = ListenerGuard::attach(&document, "click", move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Ok(mut page) = page.try_borrow_mut() {
                page.click(&target.id());
            }
        })?;

        self.listeners = vec![keydown, click];
        Ok(())
    }

    /// Removes the document listeners
    pub fn unmount(&mut self) {
        self.listeners.clear();
    }

    /// Whether listeners are attached
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Presses the keypad button with `element_id`
    pub fn click(&mut self, element_id: &str) -> bool {
        self.page.borrow_mut().click(element_id)
    }

    /// Presses a named key
    pub fn key(&mut self, key: &str) -> bool {
        self.page.borrow_mut().key_down(key).is_some()
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.page.borrow().calculator.display().to_string()
    }

    /// Latest snapshot as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.page.borrow().calculator.snapshot()).unwrap_or_default()
    }

    /// Sets the error-marker policy by name; returns false for unknown names
    #[wasm_bindgen(js_name = setErrorPolicy)]
    pub fn set_error_policy(&mut self, name: &str) -> bool {
        let Some(policy) = ErrorPolicy::from_name(name) else {
            return false;
        };
        self.page.borrow_mut().calculator.set_policy(policy);
        true
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"pocket-calc initialized".into());
}
