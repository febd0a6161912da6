//! Property-Based Tests for calctui
//!
//! Uses proptest for testing invariants and edge cases.
//!
//! These tests verify:
//! - Enum string round-trips (parse → to_string → parse)
//! - Engine invariants under arbitrary input sequences
//! - Editing-operation floors and idempotence

use proptest::prelude::*;

use calctui::{Calculator, Operator, ThemeKind};

// =============================================================================
// Operator Enum Property Tests
// =============================================================================

/// Strategy for generating valid Operator variants
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
        Just(Operator::Modulo),
    ]
}

proptest! {
    /// Operator: to_string → parse round-trip is identity
    #[test]
    fn operator_roundtrip(op in operator_strategy()) {
        let s = op.to_string();
        let parsed: Operator = s.parse().expect("Should parse");
        prop_assert_eq!(op, parsed);
    }

    /// Operator: display symbol is a single non-empty token
    #[test]
    fn operator_symbol_is_single_char(op in operator_strategy()) {
        let s = op.to_string();
        prop_assert_eq!(s.chars().count(), 1);
    }
}

// =============================================================================
// ThemeKind Property Tests
// =============================================================================

/// Strategy for generating valid ThemeKind variants
fn theme_strategy() -> impl Strategy<Value = ThemeKind> {
    prop_oneof![Just(ThemeKind::Dark), Just(ThemeKind::Light)]
}

proptest! {
    /// ThemeKind: toggling twice is identity
    #[test]
    fn theme_double_toggle_identity(theme in theme_strategy()) {
        prop_assert_eq!(theme.toggled().toggled(), theme);
    }

    /// ThemeKind: to_string → parse round-trip is identity
    #[test]
    fn theme_roundtrip(theme in theme_strategy()) {
        let parsed: ThemeKind = theme.to_string().parse().expect("Should parse");
        prop_assert_eq!(theme, parsed);
    }
}

// =============================================================================
// Engine Invariant Property Tests
// =============================================================================

/// Strategy for sequences of digit/decimal-point tokens
fn token_sequence() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('0', '9'),
            Just('.'),
        ],
        0..40,
    )
}

proptest! {
    /// The current operand never holds more than one decimal point, no
    /// matter what digit sequence is typed.
    #[test]
    fn at_most_one_decimal_point(tokens in token_sequence()) {
        let mut calc = Calculator::new();
        for t in &tokens {
            calc.append_digit(*t);
        }
        let dots = calc.current_operand().matches('.').count();
        prop_assert!(dots <= 1, "operand {:?} has {} dots", calc.current_operand(), dots);
    }

    /// The current operand is never empty after any digit sequence.
    #[test]
    fn operand_never_empty_while_typing(tokens in token_sequence()) {
        let mut calc = Calculator::new();
        for t in &tokens {
            calc.append_digit(*t);
        }
        prop_assert!(!calc.current_operand().is_empty());
    }

    /// Repeated deletion always converges to "0" and never to an empty
    /// string.
    #[test]
    fn delete_floors_at_zero(tokens in token_sequence(), extra_deletes in 0usize..5) {
        let mut calc = Calculator::new();
        for t in &tokens {
            calc.append_digit(*t);
        }
        for _ in 0..(tokens.len() + extra_deletes + 1) {
            calc.delete_last();
            prop_assert!(!calc.current_operand().is_empty());
        }
        prop_assert_eq!(calc.current_operand(), "0");
    }

    /// clear() is idempotent from any reachable typing state.
    #[test]
    fn clear_is_idempotent(tokens in token_sequence(), op in operator_strategy()) {
        let mut calc = Calculator::new();
        for t in &tokens {
            calc.append_digit(*t);
        }
        let _ = calc.choose_operator(op);

        calc.clear();
        let once = calc.clone();
        calc.clear();
        prop_assert_eq!(calc, once);
    }

    /// The operator is pending if and only if a previous operand is stored.
    #[test]
    fn operator_paired_with_previous_operand(
        tokens in token_sequence(),
        ops in prop::collection::vec(operator_strategy(), 0..4),
    ) {
        let mut calc = Calculator::new();
        for t in &tokens {
            calc.append_digit(*t);
        }
        for op in ops {
            // Folds may divide by zero; the invariant must hold either way.
            let _ = calc.choose_operator(op);
            calc.append_digit('2');
        }
        prop_assert_eq!(
            calc.operator().is_some(),
            !calc.previous_operand().is_empty()
        );
    }
}
