// ============================================================================
// Compute
// Stateless entry points: coerce, dispatch, apply
// ============================================================================

use crate::domain::{Calculation, Operation};
use crate::numeric::{CalculatorError, CalculatorResult, Numeric, Operand};
use rust_decimal::Decimal;

/// Compute `a <operation> b` with IEEE double arithmetic.
///
/// `operation` is matched case-insensitively against `add`/`+`,
/// `subtract`/`-`, `multiply`/`*` and `divide`/`/`. Operands may be numbers or
/// numeric text.
///
/// Operands are coerced before the tag is inspected, so an invalid operand is
/// reported even when the tag is also unknown.
///
/// # Errors
/// - `InvalidOperand` if either operand is not a number
/// - `UnknownOperation` if the tag matches no operator
/// - `DivideByZero` if dividing by zero
///
/// # Example
/// ```
/// use arith_calculator::engine::compute;
/// use arith_calculator::numeric::CalculatorError;
///
/// assert_eq!(compute("add", 5, 3), Ok(8.0));
/// assert_eq!(compute("*", "6", 7), Ok(42.0));
/// assert_eq!(compute("/", 10, 0), Err(CalculatorError::DivideByZero));
/// assert_eq!(compute("+", "abc", 5), Err(CalculatorError::InvalidOperand));
/// ```
pub fn compute(
    operation: &str,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> CalculatorResult<f64> {
    evaluate::<f64>(operation, a, b).map(|calc| calc.value)
}

/// Compute `a <operation> b` with exact decimal arithmetic.
///
/// Same tag matching and check order as [`compute`]. Results that do not fit
/// in a `Decimal` are reported as `Overflow`.
///
/// # Example
/// ```
/// use arith_calculator::engine::compute_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_decimal("add", "0.1", "0.2"), Ok(Decimal::new(3, 1)));
/// ```
pub fn compute_decimal(
    operation: &str,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> CalculatorResult<Decimal> {
    evaluate::<Decimal>(operation, a, b).map(|calc| calc.value)
}

/// Like [`compute`], generic over the backend, returning the full record.
pub fn evaluate<N: Numeric>(
    operation: &str,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> CalculatorResult<Calculation<N>> {
    evaluate_operands(operation, &a.into(), &b.into(), true)
}

pub(crate) fn evaluate_operands<N: Numeric>(
    operation: &str,
    a: &Operand,
    b: &Operand,
    empty_as_zero: bool,
) -> CalculatorResult<Calculation<N>> {
    let (a, b) = match (N::coerce(a, empty_as_zero), N::coerce(b, empty_as_zero)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(CalculatorError::InvalidOperand),
    };

    let operation: Operation = operation.parse()?;
    let value = operation.apply(a, b)?;

    Ok(Calculation::new(operation, a, b, value))
}
