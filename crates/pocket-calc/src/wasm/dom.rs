//! Mock DOM for testing the browser front end without a browser
//!
//! Holds a flat id lookup of elements, a keydown listener registry and a
//! log of every dispatched event.

use std::collections::HashMap;

/// Element id of the calculator display
pub const DISPLAY_ID: &str = "calc-display";

/// Element id of the keypad container
pub const KEYPAD_ID: &str = "calc-keypad";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class once
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the calculator page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Document-level keydown
    KeyDown {
        /// `KeyboardEvent.key` value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// An event as it was dispatched, with its default-action flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedEvent {
    /// The event
    pub event: DomEvent,
    /// Whether a handler called `preventDefault`
    pub default_prevented: bool,
}

/// Handle returned when a keydown listener is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Mock DOM for testing the calculator page without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DispatchedEvent>,
    keydown_listeners: Vec<ListenerId>,
    next_listener: u32,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
            keydown_listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Creates the calculator page: a display showing `0` and no keypad.
    ///
    /// Use [`MockDomKeypadExt::add_keypad`](super::MockDomKeypadExt::add_keypad)
    /// to add the buttons.
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("output")
            .with_id(DISPLAY_ID)
            .with_class("display")
            .with_attr("aria-live", "polite")
            .with_text("0");

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator-app")
            .with_child(display.clone());
        dom.register_element(display);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Adds a document keydown listener
    pub fn add_keydown_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.keydown_listeners.push(id);
        id
    }

    /// Removes a keydown listener; returns false if it was not attached
    pub fn remove_keydown_listener(&mut self, id: ListenerId) -> bool {
        let before = self.keydown_listeners.len();
        self.keydown_listeners.retain(|l| *l != id);
        self.keydown_listeners.len() != before
    }

    /// Number of attached keydown listeners
    #[must_use]
    pub fn keydown_listener_count(&self) -> usize {
        self.keydown_listeners.len()
    }

    /// Dispatches an event and returns whether anything receives it.
    ///
    /// Clicks reach registered elements; keydowns reach the document only
    /// while a listener is attached.
    pub fn dispatch_event(&mut self, event: DomEvent) -> bool {
        let delivered = match &event {
            DomEvent::Click { element_id } => self.elements.contains_key(element_id),
            DomEvent::KeyDown { .. } => !self.keydown_listeners.is_empty(),
        };
        self.event_history.push(DispatchedEvent {
            event,
            default_prevented: false,
        });
        delivered
    }

    /// Marks the most recently dispatched event as default-prevented
    pub fn prevent_default(&mut self) {
        if let Some(last) = self.event_history.last_mut() {
            last.default_prevented = true;
        }
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DispatchedEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}
