//! Calculator engine
//!
//! The arithmetic core of the application: an operator enum and the
//! input/operation state machine that owns the operand text. The engine is
//! pure state transitions, with no rendering and no I/O, so the presentation
//! layer can drive it from buttons, keys, or tests interchangeably.

mod calculator;
mod operator;

pub use calculator::{Calculator, Computation};
pub use operator::Operator;
