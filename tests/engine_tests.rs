//! End-to-end tests for the calculator engine
//!
//! These tests drive the engine exactly the way the presentation layer
//! does: digit by digit, operator by operator. They verify:
//! - Arithmetic results and rounding behavior
//! - Left-to-right chaining without precedence
//! - Divide-by-zero recovery
//! - Editing operations (clear, clear entry, delete)

use calctui::{CalcError, Calculator, Operator};

fn type_number(calc: &mut Calculator, digits: &str) {
    for d in digits.chars() {
        calc.append_digit(d);
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn test_addition() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "19");
    calc.choose_operator(Operator::Add).unwrap();
    type_number(&mut calc, "23");
    let computation = calc.compute().unwrap().unwrap();
    assert_eq!(computation.expression, "19 + 23");
    assert_eq!(calc.current_operand(), "42");
}

#[test]
fn test_subtraction_can_go_negative() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "3");
    calc.choose_operator(Operator::Subtract).unwrap();
    type_number(&mut calc, "10");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "-7");
}

#[test]
fn test_multiplication_with_fractions() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "1.5");
    calc.choose_operator(Operator::Multiply).unwrap();
    type_number(&mut calc, "4");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "6");
}

#[test]
fn test_division() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "1");
    calc.choose_operator(Operator::Divide).unwrap();
    type_number(&mut calc, "8");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "0.125");
}

#[test]
fn test_division_result_rounded_to_eight_places() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "1");
    calc.choose_operator(Operator::Divide).unwrap();
    type_number(&mut calc, "3");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "0.33333333");
}

#[test]
fn test_float_artifact_suppression() {
    // 0.1 + 0.2 must display as 0.3, not 0.30000000000000004.
    let mut calc = Calculator::new();
    type_number(&mut calc, "0.1");
    calc.choose_operator(Operator::Add).unwrap();
    type_number(&mut calc, "0.2");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "0.3");
}

#[test]
fn test_modulo() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "10");
    calc.choose_operator(Operator::Modulo).unwrap();
    type_number(&mut calc, "3");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "1");
}

#[test]
fn test_modulo_with_fractional_operands() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "5.5");
    calc.choose_operator(Operator::Modulo).unwrap();
    type_number(&mut calc, "2");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "1.5");
}

// =============================================================================
// Chaining
// =============================================================================

#[test]
fn test_left_to_right_chaining() {
    // 2 + 3 × 4 folds as (2 + 3) × 4 = 20, not 14.
    let mut calc = Calculator::new();
    type_number(&mut calc, "2");
    calc.choose_operator(Operator::Add).unwrap();
    type_number(&mut calc, "3");
    calc.choose_operator(Operator::Multiply).unwrap();
    type_number(&mut calc, "4");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "20");
}

#[test]
fn test_long_chain() {
    // 100 - 10 ÷ 3 × 3 = ((100 - 10) ÷ 3) × 3 = 90
    let mut calc = Calculator::new();
    type_number(&mut calc, "100");
    calc.choose_operator(Operator::Subtract).unwrap();
    type_number(&mut calc, "10");
    calc.choose_operator(Operator::Divide).unwrap();
    type_number(&mut calc, "3");
    calc.choose_operator(Operator::Multiply).unwrap();
    type_number(&mut calc, "3");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "90");
}

#[test]
fn test_continuing_from_a_result() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "6");
    calc.choose_operator(Operator::Multiply).unwrap();
    type_number(&mut calc, "7");
    calc.compute().unwrap();
    // The result becomes the left operand of the next operation.
    calc.choose_operator(Operator::Subtract).unwrap();
    type_number(&mut calc, "2");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "40");
}

// =============================================================================
// Divide-by-zero recovery
// =============================================================================

#[test]
fn test_divide_by_zero_recovers_to_cleared_state() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "5");
    calc.choose_operator(Operator::Divide).unwrap();
    type_number(&mut calc, "0");
    let err = calc.compute().unwrap_err();
    assert!(matches!(err, CalcError::DivideByZero));
    assert_eq!(calc.current_operand(), "0");
    assert_eq!(calc.previous_operand(), "");
    assert_eq!(calc.operator(), None);
}

#[test]
fn test_engine_usable_after_divide_by_zero() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "5");
    calc.choose_operator(Operator::Divide).unwrap();
    type_number(&mut calc, "0");
    let _ = calc.compute();

    type_number(&mut calc, "2");
    calc.choose_operator(Operator::Add).unwrap();
    type_number(&mut calc, "2");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "4");
}

#[test]
fn test_dividing_zero_is_fine() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "0");
    calc.choose_operator(Operator::Divide).unwrap();
    type_number(&mut calc, "5");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "0");
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn test_post_compute_digit_starts_fresh_operand() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "2");
    calc.choose_operator(Operator::Add).unwrap();
    type_number(&mut calc, "3");
    calc.compute().unwrap();
    calc.append_digit('7');
    assert_eq!(calc.current_operand(), "7");
    calc.append_digit('7');
    assert_eq!(calc.current_operand(), "77");
}

#[test]
fn test_delete_converges_to_zero_and_stays() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "3.14");
    for _ in 0..10 {
        calc.delete_last();
        assert!(!calc.current_operand().is_empty());
    }
    assert_eq!(calc.current_operand(), "0");
}

#[test]
fn test_clear_entry_retypes_second_operand() {
    let mut calc = Calculator::new();
    type_number(&mut calc, "8");
    calc.choose_operator(Operator::Multiply).unwrap();
    type_number(&mut calc, "99");
    calc.clear_entry();
    type_number(&mut calc, "5");
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "40");
}

#[test]
fn test_leading_zero_suppression() {
    let mut calc = Calculator::new();
    calc.append_digit('0');
    calc.append_digit('0');
    assert_eq!(calc.current_operand(), "0");
    calc.append_digit('5');
    assert_eq!(calc.current_operand(), "5");
}

#[test]
fn test_decimal_entry_from_cleared_state() {
    let mut calc = Calculator::new();
    calc.append_digit('.');
    calc.append_digit('5');
    assert_eq!(calc.current_operand(), "0.5");
}
