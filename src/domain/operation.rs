// ============================================================================
// Operation Domain Model
// The closed set of arithmetic operators and their tag forms
// ============================================================================

use crate::numeric::{CalculatorError, CalculatorResult, Numeric};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic operator, addressed by a word form or a symbol form.
///
/// | Variant  | Word       | Symbol |
/// |----------|------------|--------|
/// | Add      | `add`      | `+`    |
/// | Subtract | `subtract` | `-`    |
/// | Multiply | `multiply` | `*`    |
/// | Divide   | `divide`   | `/`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in dispatch order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Word form of the tag
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Symbol form of the tag
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply the operator to two already-coerced values.
    ///
    /// # Errors
    /// - `DivideByZero` if dividing and `b` equals zero
    /// - `Overflow` if the backend cannot represent the result
    #[inline]
    pub fn apply<N: Numeric>(self, a: N, b: N) -> CalculatorResult<N> {
        match self {
            Operation::Add => a.try_add(b),
            Operation::Subtract => a.try_sub(b),
            Operation::Multiply => a.try_mul(b),
            Operation::Divide => {
                if b.is_zero() {
                    return Err(CalculatorError::DivideByZero);
                }
                a.try_div(b)
            },
        }
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    /// Match a tag case-insensitively against the word and symbol forms.
    ///
    /// Surrounding whitespace is significant: `" add"` is not a valid tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "-" => Ok(Operation::Subtract),
            "multiply" | "*" => Ok(Operation::Multiply),
            "divide" | "/" => Ok(Operation::Divide),
            _ => Err(CalculatorError::UnknownOperation),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
