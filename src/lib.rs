// ============================================================================
// Arithmetic Calculator Library
// Four-operation calculator dispatched on string operation tags
// ============================================================================

//! # Arithmetic Calculator
//!
//! Addition, subtraction, multiplication and division, selected by a word tag
//! (`"add"`, `"subtract"`, `"multiply"`, `"divide"`, case-insensitive) or a
//! symbol tag (`"+"`, `"-"`, `"*"`, `"/"`).
//!
//! ## Features
//!
//! - **Operand coercion**: numbers or numeric text, one explicit parse step
//! - **Typed errors**: invalid operand, divide by zero, unknown operation
//! - **Two backends**: IEEE `f64` and exact `rust_decimal::Decimal`
//! - **Event reporting** through a pluggable [`EventHandler`](interfaces::EventHandler)
//!
//! ## Example
//!
//! ```rust
//! use arith_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(compute("add", 5, 3), Ok(8.0));
//! assert_eq!(compute("/", 10, 0), Err(CalculatorError::DivideByZero));
//!
//! let calc = CalculatorBuilder::new()
//!     .with_decimal_scale(2)
//!     .build(Arc::new(LoggingEventHandler))
//!     .unwrap();
//!
//! let result = calc.evaluate("*", "6", 7).unwrap();
//! println!("{}", result); // 6 * 7 = 42
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculation, CalculatorConfig, Operation};
    pub use crate::engine::{
        compute, compute_decimal, create_from_config, evaluate, Calculator, CalculatorBuilder,
    };
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{CalculatorError, CalculatorResult, Numeric, Operand};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_calculation() {
        let events = Arc::new(RecordingEventHandler::new());
        let calc = CalculatorBuilder::new().build(events.clone()).unwrap();

        assert_eq!(calc.compute("add", 5, 3), Ok(8.0));
        assert_eq!(calc.compute("-", 10, 4), Ok(6.0));
        assert_eq!(calc.compute("*", 6, 7), Ok(42.0));
        assert_eq!(calc.compute("divide", 20, 5), Ok(4.0));
        assert_eq!(calc.compute("/", 10, 0), Err(CalculatorError::DivideByZero));
        assert_eq!(calc.compute("+", "abc", 5), Err(CalculatorError::InvalidOperand));

        let recorded = events.events();
        assert_eq!(recorded.len(), 6);
        assert_eq!(recorded.iter().filter(|e| e.error().is_none()).count(), 4);
    }

    #[test]
    fn test_free_function_matches_service() {
        let calc = Calculator::default();
        for (op, a, b) in [("add", "1.5", "2"), ("/", "7", "0"), ("pow", "2", "3")] {
            assert_eq!(compute(op, a, b), calc.compute(op, a, b));
        }
    }

    fn arb_operand() -> impl Strategy<Value = f64> {
        -1.0e12..1.0e12_f64
    }

    fn arb_casing(word: &'static str) -> impl Strategy<Value = String> {
        proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |mask| {
            word.chars()
                .zip(mask)
                .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }

    fn arb_numeric_text() -> impl Strategy<Value = String> {
        prop_oneof![
            arb_operand().prop_map(|v| v.to_string()),
            "[0-9]{1,6}",
            "[0-9]{1,4}[._][0-9]{1,4}",
            "[0-9_]{1,6}",
            "-?[0-9]{1,3}e-?[0-9]",
        ]
    }

    proptest! {
        #[test]
        fn prop_backends_agree_on_operand_validity(text in arb_numeric_text()) {
            prop_assert_eq!(
                compute("add", text.as_str(), 0).is_ok(),
                compute_decimal("add", text.as_str(), 0).is_ok(),
                "text {:?}",
                text
            );
        }

        #[test]
        fn prop_arithmetic_identities(a in arb_operand(), b in arb_operand()) {
            prop_assert_eq!(compute("add", a, b), Ok(a + b));
            prop_assert_eq!(compute("subtract", a, b), Ok(a - b));
            prop_assert_eq!(compute("multiply", a, b), Ok(a * b));
        }

        #[test]
        fn prop_division(a in arb_operand(), b in arb_operand()) {
            prop_assume!(b != 0.0);
            prop_assert_eq!(compute("divide", a, b), Ok(a / b));
            prop_assert_eq!(compute("/", a, b), Ok(a / b));
        }

        #[test]
        fn prop_divide_by_zero(a in arb_operand()) {
            prop_assert_eq!(compute("divide", a, 0), Err(CalculatorError::DivideByZero));
            prop_assert_eq!(compute("/", a, "0"), Err(CalculatorError::DivideByZero));
        }

        #[test]
        fn prop_text_operands_match_numbers(a in arb_operand(), b in arb_operand()) {
            prop_assert_eq!(compute("add", a.to_string(), b.to_string()), Ok(a + b));
        }

        #[test]
        fn prop_case_insensitive(
            (op, tag) in proptest::sample::select(Operation::ALL.to_vec())
                .prop_flat_map(|op| (Just(op), arb_casing(op.name()))),
            a in arb_operand(),
            b in 1.0..1.0e6_f64,
        ) {
            prop_assert_eq!(compute(&tag, a, b), compute(op.name(), a, b));
        }

        #[test]
        fn prop_unknown_operation(tag in "[a-z%^]{1,10}", a in arb_operand(), b in arb_operand()) {
            prop_assume!(tag.parse::<Operation>().is_err());
            prop_assert_eq!(compute(&tag, a, b), Err(CalculatorError::UnknownOperation));
        }

        #[test]
        fn prop_non_numeric_operand(junk in "[a-df-hj-mo-z]{1,8}", b in arb_operand()) {
            prop_assert_eq!(compute("add", junk.as_str(), b), Err(CalculatorError::InvalidOperand));
            prop_assert_eq!(compute("modulo", b, junk.as_str()), Err(CalculatorError::InvalidOperand));
        }
    }

    quickcheck! {
        fn prop_symbol_equals_word(a: f64, b: f64) -> bool {
            Operation::ALL.iter().all(|op| {
                let word = compute(op.name(), a, b).map(f64::to_bits);
                let symbol = compute(op.symbol(), a, b).map(f64::to_bits);
                word == symbol
            })
        }
    }
}
