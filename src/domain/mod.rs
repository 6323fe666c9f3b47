// ============================================================================
// Domain Models Module
// Contains the calculator's value objects and configuration
// ============================================================================

pub mod calculation;
pub mod config;
pub mod operation;

pub use calculation::Calculation;
pub use config::CalculatorConfig;
pub use operation::Operation;
