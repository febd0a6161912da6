//! Type-safe arithmetic operators
//!
//! Replaces stringly-typed operator characters with a proper Rust enum that
//! provides compile-time validation and exhaustive matching.

use strum::{Display, EnumIter, EnumString};

/// A binary arithmetic operation pending between two operands.
///
/// Display symbols match the keypad legends (`×` and `÷` rather than the
/// ASCII aliases); `FromStr` additionally accepts the keyboard forms
/// `*` and `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(to_string = "×", serialize = "*")]
    Multiply,
    #[strum(to_string = "÷", serialize = "/")]
    Divide,
    /// Truncating floating-point remainder; the sign follows the dividend.
    #[strum(serialize = "%")]
    Modulo,
}

impl Operator {
    /// Map a keyboard character to an operator, accepting the ASCII
    /// aliases `*` and `/` alongside the display symbols.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// True for operations that are undefined when the right operand is zero.
    pub const fn requires_nonzero_divisor(self) -> bool {
        matches!(self, Self::Divide | Self::Modulo)
    }
}
