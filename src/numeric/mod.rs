// ============================================================================
// Numeric Module
// Operand coercion and number backends for the calculator
// ============================================================================
//
// This module provides:
// - Operand: raw input (number or text) prior to coercion
// - Numeric: backend trait, implemented for f64 and rust_decimal::Decimal
// - CalculatorError: error taxonomy shared by every computation path
//
// Design principles:
// - Coercion is an explicit parse step with a single failure path
// - All arithmetic returns Result (no panics)

mod backend;
mod errors;
mod operand;

pub use backend::Numeric;
pub use errors::{CalculatorError, CalculatorResult};
pub use operand::Operand;
