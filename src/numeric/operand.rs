// ============================================================================
// Operand
// Raw calculator input before numeric coercion
// ============================================================================

use std::fmt;

/// A value handed to the calculator, either already numeric or as text.
///
/// Coercion to a concrete number type happens in the numeric backend (see
/// [`Numeric`](super::Numeric)), never implicitly.
///
/// # Example
/// ```
/// use arith_calculator::numeric::Operand;
///
/// let a: Operand = 5.into();
/// let b: Operand = " 2.5 ".into();
/// assert_eq!(a.to_f64(true), Some(5.0));
/// assert_eq!(b.to_f64(true), Some(2.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Native numeric input
    Number(f64),
    /// Text that must look like a number
    Text(String),
}

impl Operand {
    /// Coerce to `f64`.
    ///
    /// Text is trimmed and parsed with standard float syntax. Blank text maps
    /// to `0` only when `empty_as_zero` is set. NaN is never a valid operand,
    /// whether passed directly or spelled out as text.
    pub fn to_f64(&self, empty_as_zero: bool) -> Option<f64> {
        let value = match self {
            Operand::Number(n) => *n,
            Operand::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return empty_as_zero.then_some(0.0);
                }
                s.parse::<f64>().ok()?
            },
        };

        (!value.is_nan()).then_some(value)
    }

    /// Returns the text form if the operand arrived as a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Operand::Text(s) => Some(s),
            Operand::Number(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Text(s) => write!(f, "{:?}", s),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(value: $t) -> Self {
                    Operand::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::Text(value.clone())
    }
}
