//! Keypad layout shared by the terminal and browser front ends
//!
//! ```text
//! [ C ] [ ÷ ] [ × ] [ − ]
//! [ 7 ] [ 8 ] [ 9 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ] [ = ]
//! [ 1 ] [ 2 ] [ 3 ] [ 0 ]
//! [ . ]
//! ```

use crate::core::{CalcEvent, Digit, Operation};

/// Number of keypad rows
pub const ROWS: usize = 5;

/// Number of keypad columns
pub const COLS: usize = 4;

/// One keypad slot: the event it produces and its grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Event dispatched when the button is pressed
    pub event: CalcEvent,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

/// Returns the standard keypad in row-major order
#[must_use]
pub fn standard() -> Vec<Slot> {
    let digit = |n: u8, row, col| {
        Digit::new(n).map(|d| Slot {
            event: CalcEvent::Digit(d),
            row,
            col,
        })
    };
    let op = |op, row, col| {
        Some(Slot {
            event: CalcEvent::Operator(op),
            row,
            col,
        })
    };
    let other = |event, row, col| Some(Slot { event, row, col });

    [
        other(CalcEvent::Clear, 0, 0),
        op(Operation::Divide, 0, 1),
        op(Operation::Multiply, 0, 2),
        op(Operation::Subtract, 0, 3),
        digit(7, 1, 0),
        digit(8, 1, 1),
        digit(9, 1, 2),
        op(Operation::Add, 1, 3),
        digit(4, 2, 0),
        digit(5, 2, 1),
        digit(6, 2, 2),
        other(CalcEvent::Equals, 2, 3),
        digit(1, 3, 0),
        digit(2, 3, 1),
        digit(3, 3, 2),
        digit(0, 3, 3),
        other(CalcEvent::DecimalPoint, 4, 0),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Stable DOM element id for the button that produces `event`
#[must_use]
pub fn element_id(event: &CalcEvent) -> String {
    match event {
        CalcEvent::Digit(d) => format!("btn-{d}"),
        CalcEvent::DecimalPoint => "btn-decimal".to_string(),
        CalcEvent::Clear => "btn-clear".to_string(),
        CalcEvent::Operator(op) => format!("btn-{}", op.name()),
        CalcEvent::Equals => "btn-equals".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_has_seventeen_buttons() {
        assert_eq!(standard().len(), 17);
    }

    #[test]
    fn test_every_event_kind_present() {
        let events: HashSet<_> = standard().iter().map(|s| s.event).collect();
        for n in 0..=9 {
            assert!(events.contains(&CalcEvent::digit(n).unwrap()));
        }
        for op in Operation::ALL {
            assert!(events.contains(&CalcEvent::Operator(op)));
        }
        assert!(events.contains(&CalcEvent::DecimalPoint));
        assert!(events.contains(&CalcEvent::Clear));
        assert!(events.contains(&CalcEvent::Equals));
    }

    #[test]
    fn test_positions_unique_and_in_grid() {
        let mut seen = HashSet::new();
        for slot in standard() {
            assert!(slot.row < ROWS && slot.col < COLS);
            assert!(seen.insert((slot.row, slot.col)));
        }
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(element_id(&CalcEvent::digit(7).unwrap()), "btn-7");
        assert_eq!(element_id(&CalcEvent::DecimalPoint), "btn-decimal");
        assert_eq!(element_id(&CalcEvent::Clear), "btn-clear");
        assert_eq!(element_id(&CalcEvent::Equals), "btn-equals");
        assert_eq!(
            element_id(&CalcEvent::Operator(Operation::Divide)),
            "btn-divide"
        );
    }

    #[test]
    fn test_element_ids_unique() {
        let ids: HashSet<_> = standard().iter().map(|s| element_id(&s.event)).collect();
        assert_eq!(ids.len(), standard().len());
    }
}
