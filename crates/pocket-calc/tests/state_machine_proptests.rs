//! Property-based tests for the calculator state machine

#![allow(clippy::unwrap_used)]

use pocket_calc::core::{
    evaluate, format_number, parse_display, CalcEvent, Calculator, ErrorPolicy, Operation,
    Snapshot, ERROR_MARKER,
};

use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_event() -> impl Strategy<Value = CalcEvent> {
    (0u8..=9u8).prop_map(|d| CalcEvent::digit(d).unwrap())
}

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn event_strategy() -> impl Strategy<Value = CalcEvent> {
    prop_oneof![
        4 => digit_event(),
        1 => Just(CalcEvent::DecimalPoint),
        2 => operator_strategy().prop_map(CalcEvent::Operator),
        1 => Just(CalcEvent::Equals),
        1 => Just(CalcEvent::Clear),
    ]
}

fn policy_strategy() -> impl Strategy<Value = ErrorPolicy> {
    prop_oneof![Just(ErrorPolicy::Ignore), Just(ErrorPolicy::TreatAsZero)]
}

fn run(policy: ErrorPolicy, events: &[CalcEvent]) -> Calculator {
    let mut calc = Calculator::with_policy(policy);
    for event in events {
        calc.dispatch(*event);
    }
    calc
}

fn is_number_text(display: &str) -> bool {
    let digits = display.strip_prefix('-').unwrap_or(display);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    !int.is_empty()
        && int.chars().all(|c| c.is_ascii_digit())
        && frac.map_or(true, |f| f.chars().all(|c| c.is_ascii_digit()))
}

// ===== Display invariants =====

proptest! {
    /// The display is always the error marker or a plain decimal numeral
    #[test]
    fn prop_display_is_marker_or_numeral(
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let calc = run(policy, &events);
        let display = calc.display();
        prop_assert!(
            display == ERROR_MARKER || (is_number_text(display) && parse_display(display).is_some()),
            "bad display {:?}", display
        );
    }

    /// A pending operator always has a captured operand
    #[test]
    fn prop_pending_operator_implies_operand(
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let calc = run(policy, &events);
        if calc.pending_operator().is_some() {
            prop_assert!(calc.previous_operand().is_some());
        }
    }

    /// After an error nothing is pending
    #[test]
    fn prop_error_clears_pending(events in prop::collection::vec(event_strategy(), 0..40)) {
        let calc = run(ErrorPolicy::Ignore, &events);
        if calc.is_error() {
            prop_assert!(calc.pending_operator().is_none());
            prop_assert!(calc.previous_operand().is_none());
        }
    }
}

// ===== Event laws =====

proptest! {
    /// Clear returns to the initial state from anywhere
    #[test]
    fn prop_clear_resets(
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let mut calc = run(policy, &events);
        calc.dispatch(CalcEvent::Clear);
        prop_assert_eq!(calc.snapshot(), Snapshot::default());
    }

    /// A second decimal point changes nothing
    #[test]
    fn prop_decimal_point_idempotent(
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let mut calc = run(policy, &events);
        calc.dispatch(CalcEvent::DecimalPoint);
        let once = calc.snapshot();
        calc.dispatch(CalcEvent::DecimalPoint);
        prop_assert_eq!(calc.snapshot(), once);
    }

    /// Equals with nothing pending changes nothing
    #[test]
    fn prop_equals_without_pending_is_noop(
        policy in policy_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let mut calc = run(policy, &events);
        prop_assume!(calc.pending_operator().is_none());
        let before = calc.snapshot();
        calc.dispatch(CalcEvent::Equals);
        prop_assert_eq!(calc.snapshot(), before);
    }

    /// Digits typed from a fresh state concatenate, minus leading zeros
    #[test]
    fn prop_digits_concatenate(digits in "[0-9]{1,12}") {
        let mut calc = Calculator::new();
        for c in digits.chars() {
            calc.dispatch(CalcEvent::digit(c.to_digit(10).unwrap() as u8).unwrap());
        }
        let trimmed = digits.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(calc.display(), expected);
    }

    /// Integer chains fold strictly left to right
    #[test]
    fn prop_left_to_right_fold(
        first in 0u32..1000,
        rest in prop::collection::vec(
            (prop_oneof![Just(Operation::Add), Just(Operation::Subtract), Just(Operation::Multiply)], 0u32..1000),
            1..5,
        ),
    ) {
        let mut calc = Calculator::new();
        let type_number = |calc: &mut Calculator, n: u32| {
            for c in n.to_string().chars() {
                calc.dispatch(CalcEvent::digit(c.to_digit(10).unwrap() as u8).unwrap());
            }
        };

        type_number(&mut calc, first);
        let mut expected = f64::from(first);
        for (op, n) in &rest {
            calc.dispatch(CalcEvent::Operator(*op));
            type_number(&mut calc, *n);
            expected = evaluate(expected, f64::from(*n), *op).unwrap();
        }
        calc.dispatch(CalcEvent::Equals);

        prop_assert_eq!(calc.display(), format_number(expected));
    }

    /// Changing the operator before the second operand never folds
    #[test]
    fn prop_operator_change_replaces(
        a in 1u8..=9,
        ops in prop::collection::vec(operator_strategy(), 2..6),
    ) {
        let mut calc = Calculator::new();
        calc.dispatch(CalcEvent::digit(a).unwrap());
        for op in &ops {
            calc.dispatch(CalcEvent::Operator(*op));
        }
        prop_assert_eq!(calc.previous_operand(), Some(f64::from(a)));
        prop_assert_eq!(calc.pending_operator(), ops.last().copied());
        prop_assert_eq!(calc.display(), a.to_string());
    }
}
