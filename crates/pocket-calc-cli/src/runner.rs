//! Batch key-sequence runner
//!
//! Turns a sequence such as `12.5+2.5<Enter>` into key names, feeds them to a
//! [`Calculator`] through the shared key map, and records the display after
//! each key.

use pocket_calc::core::{map_key, Calculator, ErrorPolicy, Snapshot};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Splits a key sequence into key names.
///
/// Every character is one key, except `<Name>` tokens which name a key:
/// `<Enter>`, `<Esc>`/`<Escape>`, `<lt>` for a literal `<`. Whitespace is
/// skipped.
pub fn tokenize(sequence: &str) -> CliResult<Vec<String>> {
    let mut keys = Vec::new();
    let mut chars = sequence.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c != '<' {
            keys.push(c.to_string());
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for next in chars.by_ref() {
            if next == '>' {
                closed = true;
                break;
            }
            name.push(next);
        }
        if !closed {
            return Err(CliError::invalid_argument(format!(
                "unterminated key name '<{name}'"
            )));
        }
        let key = match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => "Enter",
            "esc" | "escape" => "Escape",
            "lt" => "<",
            _ => {
                return Err(CliError::invalid_argument(format!(
                    "unknown key name '<{name}>'"
                )))
            }
        };
        keys.push(key.to_string());
    }

    Ok(keys)
}

/// One key press and the display it left behind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key name
    pub key: String,
    /// Display after the key
    pub display: String,
}

/// Result of a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRun {
    /// Every key in order
    pub steps: Vec<Step>,
    /// Final calculator state
    pub snapshot: Snapshot,
}

impl BatchRun {
    /// Final display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.snapshot.display
    }
}

/// Feeds key sequences to a fresh calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyRunner {
    policy: ErrorPolicy,
}

impl KeyRunner {
    /// Creates a runner with the given error policy
    #[must_use]
    pub const fn new(policy: ErrorPolicy) -> Self {
        Self { policy }
    }

    /// Runs `sequence`; unmapped keys are an error and nothing is run
    pub fn run(&self, sequence: &str) -> CliResult<BatchRun> {
        let keys = tokenize(sequence)?;
        let bindings = keys
            .iter()
            .map(|key| {
                map_key(key)
                    .ok_or_else(|| CliError::invalid_argument(format!("unmapped key '{key}'")))
            })
            .collect::<CliResult<Vec<_>>>()?;

        let mut calculator = Calculator::with_policy(self.policy);
        let mut steps = Vec::with_capacity(keys.len());
        for (key, binding) in keys.into_iter().zip(bindings) {
            calculator.dispatch(binding.event);
            debug!(%key, display = calculator.display(), "key pressed");
            steps.push(Step {
                key,
                display: calculator.display().to_string(),
            });
        }

        let snapshot = calculator.snapshot();
        info!(keys = steps.len(), display = %snapshot.display, "sequence finished");
        Ok(BatchRun { steps, snapshot })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // ===== Tokenizer =====

    #[test]
    fn test_tokenize_plain() {
        assert_eq!(tokenize("1+2").unwrap(), vec!["1", "+", "2"]);
    }

    #[test]
    fn test_tokenize_named_keys() {
        assert_eq!(
            tokenize("6*7<Enter><esc>").unwrap(),
            vec!["6", "*", "7", "Enter", "Escape"]
        );
        assert_eq!(tokenize("<Escape><RETURN>").unwrap(), vec!["Escape", "Enter"]);
    }

    #[test]
    fn test_tokenize_skips_whitespace() {
        assert_eq!(tokenize(" 1 + 2 ").unwrap(), vec!["1", "+", "2"]);
    }

    #[test]
    fn test_tokenize_literal_lt() {
        assert_eq!(tokenize("<lt>").unwrap(), vec!["<"]);
    }

    #[test]
    fn test_tokenize_errors() {
        assert!(matches!(
            tokenize("1<Ent"),
            Err(CliError::InvalidArgument { .. })
        ));
        assert!(matches!(
            tokenize("<Tab>"),
            Err(CliError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").unwrap().is_empty());
    }

    // ===== Runner =====

    #[test]
    fn test_run_decimal_sum() {
        let run = KeyRunner::default().run("12.5+2.5=").unwrap();
        assert_eq!(run.display(), "15");
        assert_eq!(run.steps.len(), 9);
        assert_eq!(run.steps[3].display, "12.5");
    }

    #[test]
    fn test_run_left_to_right() {
        assert_eq!(KeyRunner::default().run("3+4*5=").unwrap().display(), "35");
    }

    #[test]
    fn test_run_division_by_zero() {
        let run = KeyRunner::default().run("5/0=").unwrap();
        assert_eq!(run.display(), "Error");
        assert!(run.snapshot.pending_operator.is_none());
    }

    #[test]
    fn test_run_named_keys() {
        let run = KeyRunner::default().run("6*7<Enter>").unwrap();
        assert_eq!(run.display(), "42");
        let run = KeyRunner::default().run("6*7<Esc>").unwrap();
        assert_eq!(run.snapshot, Snapshot::default());
    }

    #[test]
    fn test_run_policy() {
        let ignore = KeyRunner::new(ErrorPolicy::Ignore).run("5/0=+2=").unwrap();
        assert_eq!(ignore.display(), "2");
        assert!(ignore.snapshot.pending_operator.is_none());

        let zero = KeyRunner::new(ErrorPolicy::TreatAsZero).run("5/0=+2=").unwrap();
        assert_eq!(zero.display(), "2");
    }

    #[test]
    fn test_run_unmapped_key() {
        let err = KeyRunner::default().run("1x2").unwrap_err();
        assert!(err.to_string().contains("unmapped key 'x'"));
    }

    #[test]
    fn test_run_empty_sequence() {
        let run = KeyRunner::default().run("").unwrap();
        assert!(run.steps.is_empty());
        assert_eq!(run.display(), "0");
    }

    #[test]
    fn test_batch_run_serializes() {
        let run = KeyRunner::default().run("1+1=").unwrap();
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["snapshot"]["display"], "2");
        assert_eq!(json["steps"][1]["key"], "+");
    }
}
