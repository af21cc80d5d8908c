//! The calculator state machine
//!
//! One state record, one method per event. Every method is total: it either
//! updates the record or leaves it untouched. After each event the new state
//! is published to subscribers as a [`Snapshot`].

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, trace, warn};

use super::format::{format_number, parse_display};
use super::operations::{evaluate, Operation};
use super::{CalcError, CalcEvent, CalcResult, Digit, ErrorPolicy, ERROR_MARKER};

/// Immutable copy of the calculator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Text shown to the user
    pub display: String,
    /// Operand captured by the last operator press
    pub previous_operand: Option<f64>,
    /// Operator waiting for its second operand
    pub pending_operator: Option<Operation>,
    /// Next digit starts a new number instead of appending
    pub awaiting_fresh_operand: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_operand: None,
            pending_operator: None,
            awaiting_fresh_operand: false,
        }
    }
}

impl Snapshot {
    /// True when the display holds the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }
}

/// Keypad calculator with a running display, a pending operand and a
/// pending operator
#[derive(Debug)]
pub struct Calculator {
    state: Snapshot,
    policy: ErrorPolicy,
    publisher: watch::Sender<Snapshot>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ErrorPolicy::default())
    }

    /// Creates a calculator with the given error-marker policy
    #[must_use]
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        let state = Snapshot::default();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            state,
            policy,
            publisher,
        }
    }

    /// Returns the active error-marker policy
    #[must_use]
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Changes the error-marker policy
    pub fn set_policy(&mut self, policy: ErrorPolicy) {
        self.policy = policy;
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Operand captured by the last operator press
    #[must_use]
    pub fn previous_operand(&self) -> Option<f64> {
        self.state.previous_operand
    }

    /// Operator waiting for its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.state.pending_operator
    }

    /// Whether the next digit starts a new number
    #[must_use]
    pub fn awaiting_fresh_operand(&self) -> bool {
        self.state.awaiting_fresh_operand
    }

    /// True when the display holds the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts at the current state and is marked changed after
    /// every event that modifies it. Dropping the receiver unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.publisher.subscribe()
    }

    /// Routes an event to its handler
    pub fn dispatch(&mut self, event: CalcEvent) {
        match event {
            CalcEvent::Digit(d) => self.digit(d),
            CalcEvent::DecimalPoint => self.decimal_point(),
            CalcEvent::Clear => self.clear(),
            CalcEvent::Operator(op) => self.apply_operator(op),
            CalcEvent::Equals => self.equals(),
        }
        debug!(?event, display = %self.state.display, "event dispatched");
    }

    /// Enters a digit
    pub fn digit(&mut self, d: Digit) {
        let state = &mut self.state;
        if state.awaiting_fresh_operand || state.is_error() {
            state.display = d.to_string();
            state.awaiting_fresh_operand = false;
        } else if state.display == "0" {
            state.display = d.to_string();
        } else {
            state.display.push(d.as_char());
        }
        self.publish();
    }

    /// Enters a decimal point; a second one is ignored
    pub fn decimal_point(&mut self) {
        let state = &mut self.state;
        if state.awaiting_fresh_operand || state.is_error() {
            state.display = "0.".to_string();
            state.awaiting_fresh_operand = false;
        } else if !state.display.contains('.') {
            state.display.push('.');
        }
        self.publish();
    }

    /// Resets every field to its initial value
    pub fn clear(&mut self) {
        self.state = Snapshot::default();
        self.publish();
    }

    /// Folds any pending operation and arms `op`.
    ///
    /// If the fold fails, the error marker is shown and `op` is dropped along
    /// with the rest of the pending state.
    pub fn apply_operator(&mut self, op: Operation) {
        let input = match self.read_operand() {
            Ok(Some(input)) => input,
            Ok(None) => {
                debug!(%op, "operator ignored while error is shown");
                return;
            }
            Err(err) => {
                self.show_error(err);
                self.publish();
                return;
            }
        };

        match (self.state.previous_operand, self.state.pending_operator) {
            (None, _) => self.state.previous_operand = Some(input),
            // operator changed before a new operand: just replace it
            (Some(_), Some(_)) if self.state.awaiting_fresh_operand => {}
            (Some(prev), Some(pending)) => match evaluate(prev, input, pending) {
                Ok(result) => {
                    self.state.display = format_number(result);
                    self.state.previous_operand = Some(result);
                }
                Err(err) => {
                    self.show_error(err);
                    self.publish();
                    return;
                }
            },
            (Some(_), None) => {}
        }

        self.state.awaiting_fresh_operand = true;
        self.state.pending_operator = Some(op);
        self.publish();
    }

    /// Resolves the pending operation; a no-op when nothing is pending
    pub fn equals(&mut self) {
        let (Some(prev), Some(pending)) =
            (self.state.previous_operand, self.state.pending_operator)
        else {
            return;
        };
        let result = match self.read_operand() {
            Ok(Some(input)) => evaluate(prev, input, pending),
            Ok(None) => {
                debug!("equals ignored while error is shown");
                return;
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(result) => {
                self.state.display = format_number(result);
                self.state.previous_operand = None;
                self.state.pending_operator = None;
                self.state.awaiting_fresh_operand = true;
            }
            Err(err) => self.show_error(err),
        }
        self.publish();
    }

    /// Reads the display as the next operand. `Ok(None)` means the error
    /// marker is shown and the policy ignores the press.
    fn read_operand(&self) -> CalcResult<Option<f64>> {
        match parse_display(&self.state.display) {
            Some(value) => value.map(Some),
            None => Ok(match self.policy {
                ErrorPolicy::Ignore => None,
                ErrorPolicy::TreatAsZero => Some(0.0),
            }),
        }
    }

    fn show_error(&mut self, err: CalcError) {
        warn!(%err, "arithmetic error");
        self.state = Snapshot {
            display: ERROR_MARKER.to_string(),
            previous_operand: None,
            pending_operator: None,
            awaiting_fresh_operand: true,
        };
    }

    fn publish(&self) {
        let state = &self.state;
        let changed = self.publisher.send_if_modified(|current| {
            if current == state {
                false
            } else {
                current.clone_from(state);
                true
            }
        });
        if changed {
            trace!(display = %state.display, "snapshot published");
        }
    }
}
