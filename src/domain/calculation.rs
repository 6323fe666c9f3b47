// ============================================================================
// Calculation Domain Model
// ============================================================================

use super::Operation;
use crate::numeric::Numeric;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A completed computation: the coerced operands and the result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation<N> {
    /// Operator that was applied
    pub operation: Operation,

    /// Left operand after coercion
    pub a: N,

    /// Right operand after coercion
    pub b: N,

    /// Computed result
    pub value: N,
}

impl<N: Numeric> Calculation<N> {
    pub fn new(operation: Operation, a: N, b: N, value: N) -> Self {
        Self {
            operation,
            a,
            b,
            value,
        }
    }
}

impl<N: Numeric> fmt::Display for Calculation<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.a,
            self.operation.symbol(),
            self.b,
            self.value
        )
    }
}
