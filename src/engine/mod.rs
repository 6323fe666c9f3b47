// ============================================================================
// Engine Module
// Contains the calculator's dispatch logic and configured service
// ============================================================================

mod calculator;
mod compute;

pub mod factory;

pub use calculator::Calculator;
pub use compute::{compute, compute_decimal, evaluate};
pub use factory::{create_from_config, CalculatorBuilder};
