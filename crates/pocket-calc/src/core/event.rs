//! Discrete user events accepted by the state machine

use serde::{Deserialize, Serialize};

use super::Operation;

/// A decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, or `None` if `n > 9`
    #[must_use]
    pub const fn new(n: u8) -> Option<Self> {
        if n <= 9 {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or_else(|| format!("{n} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "kebab-case")]
pub enum CalcEvent {
    /// A digit key or button
    Digit(Digit),
    /// The decimal point
    DecimalPoint,
    /// Reset everything
    Clear,
    /// One of the four operators
    Operator(Operation),
    /// Resolve the pending operation
    Equals,
}

impl CalcEvent {
    /// Convenience constructor for digit events; `None` if `n > 9`
    #[must_use]
    pub const fn digit(n: u8) -> Option<Self> {
        match Digit::new(n) {
            Some(d) => Some(Self::Digit(d)),
            None => None,
        }
    }

    /// Label of the keypad button that produces this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Clear => "C".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}
