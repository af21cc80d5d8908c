//! Calculator core: the input/operator state machine and its evaluator
//!
//! Everything in here is host-neutral. Presentation layers feed
//! [`CalcEvent`]s in and read [`Snapshot`]s back out.

mod event;
mod format;
pub mod keymap;
mod machine;
mod operations;

pub use event::{CalcEvent, Digit};
pub use format::{format_number, parse_display};
pub use keymap::{map_key, KeyBinding};
pub use machine::{Calculator, Snapshot};
pub use operations::{evaluate, Operation};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown in the display after an arithmetic error
pub const ERROR_MARKER: &str = "Error";

/// Result type for calculator arithmetic
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic errors. Both render as [`ERROR_MARKER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,
    /// Result does not fit in a finite f64
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
}

/// What `apply_operator` and `equals` do while the display holds the error marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Operator and equals presses are ignored until a number or clear is entered
    #[default]
    Ignore,
    /// The error marker is read as 0
    TreatAsZero,
}

impl ErrorPolicy {
    /// Stable name used in configuration files and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::TreatAsZero => "treat-as-zero",
        }
    }

    /// Parses the name produced by [`ErrorPolicy::as_str`]
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ignore" => Some(Self::Ignore),
            "treat-as-zero" => Some(Self::TreatAsZero),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert_eq!(
            CalcError::Overflow.to_string(),
            "Overflow: result exceeds maximum value"
        );
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_error_policy_default_is_ignore() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Ignore);
    }

    #[test]
    fn test_error_policy_names() {
        assert_eq!(ErrorPolicy::Ignore.to_string(), "ignore");
        assert_eq!(ErrorPolicy::TreatAsZero.to_string(), "treat-as-zero");
    }

    #[test]
    fn test_error_policy_from_name() {
        for policy in [ErrorPolicy::Ignore, ErrorPolicy::TreatAsZero] {
            assert_eq!(ErrorPolicy::from_name(policy.as_str()), Some(policy));
        }
        assert_eq!(ErrorPolicy::from_name("zero"), None);
    }

    #[test]
    fn test_error_policy_serde_kebab_case() {
        let json = serde_json::to_string(&ErrorPolicy::TreatAsZero).unwrap();
        assert_eq!(json, "\"treat-as-zero\"");
        let back: ErrorPolicy = serde_json::from_str("\"ignore\"").unwrap();
        assert_eq!(back, ErrorPolicy::Ignore);
    }
}
