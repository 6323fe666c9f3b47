// ============================================================================
// Numeric Backends
// Number types the calculator can run on
// ============================================================================

use super::errors::{CalculatorError, CalculatorResult};
use super::operand::Operand;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A number type operations can be evaluated on.
///
/// Implementations: `f64` (IEEE double, the default) and
/// `rust_decimal::Decimal` (exact base-10, checked).
pub trait Numeric: Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Additive identity, used for the divisor check
    const ZERO: Self;

    /// Coerce a raw operand. `None` means the operand is not a number.
    fn coerce(operand: &Operand, empty_as_zero: bool) -> Option<Self>;

    fn try_add(self, rhs: Self) -> CalculatorResult<Self>;

    fn try_sub(self, rhs: Self) -> CalculatorResult<Self>;

    fn try_mul(self, rhs: Self) -> CalculatorResult<Self>;

    /// Divide by a divisor already known to be nonzero.
    fn try_div(self, rhs: Self) -> CalculatorResult<Self>;

    /// Exact numeric equality with zero (`-0.0` included for floats)
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

// ============================================================================
// f64
// ============================================================================

impl Numeric for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn coerce(operand: &Operand, empty_as_zero: bool) -> Option<Self> {
        operand.to_f64(empty_as_zero)
    }

    // IEEE arithmetic never fails; overflow saturates to infinity.
    #[inline]
    fn try_add(self, rhs: Self) -> CalculatorResult<Self> {
        Ok(self + rhs)
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> CalculatorResult<Self> {
        Ok(self - rhs)
    }

    #[inline]
    fn try_mul(self, rhs: Self) -> CalculatorResult<Self> {
        Ok(self * rhs)
    }

    #[inline]
    fn try_div(self, rhs: Self) -> CalculatorResult<Self> {
        Ok(self / rhs)
    }
}

// ============================================================================
// rust_decimal::Decimal
// ============================================================================

impl Numeric for Decimal {
    const ZERO: Self = Decimal::ZERO;

    /// Text must satisfy the same grammar as the `f64` path before it is
    /// parsed as plain or scientific decimal notation. Floats convert through
    /// `TryFrom<f64>`, so NaN and infinities are rejected.
    ///
    /// Values outside `Decimal`'s range are invalid operands, at both ends:
    /// magnitudes above `Decimal::MAX` and text needing more than 28
    /// fractional digits in scientific form (e.g. `"1e-40"`).
    fn coerce(operand: &Operand, empty_as_zero: bool) -> Option<Self> {
        match operand {
            Operand::Number(n) => Decimal::try_from(*n).ok(),
            Operand::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return empty_as_zero.then_some(Decimal::ZERO);
                }
                // rust_decimal alone would also accept `_` digit separators
                s.parse::<f64>().ok().filter(|v| v.is_finite())?;
                Decimal::from_str(s)
                    .or_else(|_| Decimal::from_scientific(s))
                    .ok()
            },
        }
    }

    #[inline]
    fn try_add(self, rhs: Self) -> CalculatorResult<Self> {
        self.checked_add(rhs).ok_or(CalculatorError::Overflow)
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> CalculatorResult<Self> {
        self.checked_sub(rhs).ok_or(CalculatorError::Overflow)
    }

    #[inline]
    fn try_mul(self, rhs: Self) -> CalculatorResult<Self> {
        self.checked_mul(rhs).ok_or(CalculatorError::Overflow)
    }

    #[inline]
    fn try_div(self, rhs: Self) -> CalculatorResult<Self> {
        self.checked_div(rhs).ok_or(CalculatorError::Overflow)
    }
}
