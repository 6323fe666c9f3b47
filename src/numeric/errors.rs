// ============================================================================
// Calculator Errors
// Error taxonomy reported by every computation path
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while computing a single operation.
///
/// All variants are ordinary input-validation outcomes. They are returned to the
/// caller, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CalculatorError {
    /// One or both operands could not be coerced to a number
    InvalidOperand,
    /// Division requested with a zero divisor
    DivideByZero,
    /// Operation tag matched no word or symbol form
    UnknownOperation,
    /// Result is outside the representable range (decimal backend only)
    Overflow,
}

impl CalculatorError {
    /// Stable machine-readable tag for the error cause.
    pub const fn kind(self) -> &'static str {
        match self {
            CalculatorError::InvalidOperand => "invalid-operand",
            CalculatorError::DivideByZero => "divide-by-zero",
            CalculatorError::UnknownOperation => "unknown-operation",
            CalculatorError::Overflow => "overflow",
        }
    }

    /// Human-readable message, suitable for rendering directly.
    pub const fn message(self) -> &'static str {
        match self {
            CalculatorError::InvalidOperand => "Inputs must be valid numbers",
            CalculatorError::DivideByZero => "Division by zero is not allowed",
            CalculatorError::UnknownOperation => {
                "Invalid operation. Supported operations are: add(+), subtract(-), multiply(*), divide(/)"
            },
            CalculatorError::Overflow => "Result is out of range",
        }
    }
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message())
    }
}

impl std::error::Error for CalculatorError {}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
