//! Calculator state machine
//!
//! An owned, explicitly constructed state value: the current operand being
//! typed, the left-hand operand of a pending operation, and the pending
//! operator. Operands are kept as decimal text (not parsed numbers) so
//! trailing zeros and in-progress decimal points survive editing.
//!
//! # State Flow
//!
//! ```text
//! Idle (no operator pending)
//!   │  choose_operator
//!   ▼
//! PendingOperation ──compute / divide-by-zero──▶ Idle
//!   │  choose_operator (folds the pending operation first)
//!   └──▶ PendingOperation
//! ```
//!
//! `append_digit`, `delete_last` and `clear_entry` are self-loops on either
//! state; `clear` returns to Idle from anywhere. Evaluation is strictly
//! left-to-right with no operator precedence: `2 + 3 × 4` folds to
//! `(2 + 3) × 4 = 20`.

use crate::engine::Operator;
use crate::error::{CalcError, Result};

/// Scale factor for rounding results to 8 decimal places, suppressing
/// binary floating-point artifacts (`0.1 + 0.2` must display as `0.3`).
const ROUND_SCALE: f64 = 1e8;

/// A finalized computation, reported to the caller for history recording.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    /// The expression text as it stood before evaluation, e.g. `"2 + 3"`.
    pub expression: String,
    /// The rounded numeric result.
    pub value: f64,
}

/// The calculator input/operation state machine.
///
/// Created once at startup and mutated in place for the life of the
/// session. Single-threaded by design: every operation is a synchronous,
/// pure state transition with no I/O and no suspension points.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// The operand currently being typed. `"0"` when cleared; transiently
    /// empty between choosing an operator and typing the next digit.
    current_operand: String,
    /// Left-hand operand of a pending operation; empty when none is pending.
    previous_operand: String,
    /// The pending operation. `Some` if and only if `previous_operand` is
    /// non-empty.
    operator: Option<Operator>,
    /// Set after a successful `compute`; the next digit typed starts a
    /// fresh operand instead of appending to the result.
    reset_on_next_digit: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in the cleared state.
    pub fn new() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            operator: None,
            reset_on_next_digit: false,
        }
    }

    /// The operand currently being typed, as canonical decimal text.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The left-hand operand of the pending operation; empty when idle.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The pending operator, if any.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True when a binary operation is pending its second operand.
    pub fn is_pending(&self) -> bool {
        self.operator.is_some()
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// Anything other than `0`-`9` or `.` is silently ignored, as is a
    /// second decimal point. A lone `"0"` is replaced rather than extended
    /// so operands never grow a leading zero.
    pub fn append_digit(&mut self, token: char) {
        if !token.is_ascii_digit() && token != '.' {
            return;
        }

        if self.reset_on_next_digit {
            self.current_operand.clear();
            self.reset_on_next_digit = false;
        }

        if token == '.' && self.current_operand.contains('.') {
            return;
        }

        if self.current_operand == "0" && token != '.' {
            self.current_operand = token.to_string();
        } else {
            self.current_operand.push(token);
        }
    }

    /// Choose the operator for a binary operation.
    ///
    /// If an operation is already pending it is folded first, so chains
    /// evaluate left-to-right as each new operator arrives. When the fold
    /// divides by zero the engine has already reset itself; the error
    /// propagates and `op` is not installed.
    pub fn choose_operator(&mut self, op: Operator) -> Result<()> {
        if self.current_operand.is_empty() {
            return Ok(());
        }

        if !self.previous_operand.is_empty() {
            self.compute()?;
        }

        self.operator = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
        self.reset_on_next_digit = false;
        Ok(())
    }

    /// Finalize the pending operation.
    ///
    /// Returns `Ok(Some(..))` with the pre-computation expression and the
    /// rounded result on success, `Ok(None)` when there is nothing to
    /// compute (no pending operator, or an operand fails to parse; the
    /// state is left untouched), and `Err(DivideByZero)` when the divisor
    /// is zero, after resetting to the cleared state.
    pub fn compute(&mut self) -> Result<Option<Computation>> {
        let Some(op) = self.operator else {
            return Ok(None);
        };
        let (Ok(prev), Ok(current)) = (
            self.previous_operand.parse::<f64>(),
            self.current_operand.parse::<f64>(),
        ) else {
            return Ok(None);
        };

        if op.requires_nonzero_divisor() && current == 0.0 {
            self.clear();
            return Err(CalcError::DivideByZero);
        }

        let expression = format!("{} {} {}", self.previous_operand, op, self.current_operand);
        let value = round_result(match op {
            Operator::Add => prev + current,
            Operator::Subtract => prev - current,
            Operator::Multiply => prev * current,
            Operator::Divide => prev / current,
            Operator::Modulo => prev % current,
        });

        self.current_operand = format_value(value);
        self.previous_operand.clear();
        self.operator = None;
        self.reset_on_next_digit = true;

        Ok(Some(Computation { expression, value }))
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        self.current_operand = "0".to_string();
        self.previous_operand.clear();
        self.operator = None;
        self.reset_on_next_digit = false;
    }

    /// Cancel the current operand without abandoning a pending operation.
    pub fn clear_entry(&mut self) {
        self.current_operand = "0".to_string();
        self.reset_on_next_digit = false;
    }

    /// Remove the last character of the current operand, flooring at `"0"`.
    /// Never touches the pending operation.
    pub fn delete_last(&mut self) {
        if self.current_operand.len() > 1 && self.current_operand != "0" {
            self.current_operand.pop();
        } else {
            self.current_operand = "0".to_string();
        }
    }

    /// Install a previously computed result as the current operand,
    /// discarding any pending operation. Used when the user recalls a
    /// history entry.
    pub fn recall(&mut self, result: &str) {
        self.current_operand = result.to_string();
        self.previous_operand.clear();
        self.operator = None;
    }
}

/// Round to 8 decimal places; normalizes `-0.0` to `0.0` so the canonical
/// text never shows a negative zero.
fn round_result(value: f64) -> f64 {
    let rounded = (value * ROUND_SCALE).round() / ROUND_SCALE;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Canonical decimal text for a result: the shortest representation that
/// round-trips, so `0.3` stays `"0.3"` and `20.0` becomes `"20"`.
fn format_value(value: f64) -> String {
    format!("{value}")
}
