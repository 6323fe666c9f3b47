// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Handler receiving one event per call
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or validation error
///
/// # Example
/// ```
/// use arith_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let calc = create_from_config(CalculatorConfig::currency(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calc.compute("add", 2, 2), Ok(4.0));
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;

    tracing::debug!(
        decimal_scale = ?config.decimal_scale,
        empty_as_zero = config.empty_as_zero,
        "creating calculator"
    );

    Ok(Calculator::new(config, event_handler))
}

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use arith_calculator::prelude::*;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new()
///     .reject_blank_operands()
///     .with_decimal_scale(2)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calc.compute_decimal("/", "2", "3"), Ok(Decimal::new(67, 2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Round decimal results to `scale` fractional digits
    pub fn with_decimal_scale(mut self, scale: u32) -> Self {
        self.config.decimal_scale = Some(scale);
        self
    }

    /// Keep decimal results at their natural scale (default)
    pub fn unrounded(mut self) -> Self {
        self.config.decimal_scale = None;
        self
    }

    /// Treat blank text operands as invalid
    pub fn reject_blank_operands(mut self) -> Self {
        self.config.empty_as_zero = false;
        self
    }

    /// Treat blank text operands as zero (default)
    pub fn blank_operands_as_zero(mut self) -> Self {
        self.config.empty_as_zero = true;
        self
    }

    /// Get the current configuration (for inspection)
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the calculator with the given event handler
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, event_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::CalculatorError;
    use rust_decimal::Decimal;

    #[test]
    fn test_create_from_config() {
        let calc = create_from_config(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(calc.compute("-", 10, 4), Ok(6.0));
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = CalculatorConfig::new().with_decimal_scale(29);
        assert!(create_from_config(config, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_builder() {
        let calc = CalculatorBuilder::new()
            .reject_blank_operands()
            .with_decimal_scale(3)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(calc.config().decimal_scale, Some(3));
        assert_eq!(calc.compute("add", "", 1), Err(CalculatorError::InvalidOperand));
        assert_eq!(
            calc.compute_decimal("/", "1", "8"),
            Ok(Decimal::new(125, 3))
        );
    }

    #[test]
    fn test_builder_toggles() {
        let builder = CalculatorBuilder::from_config(CalculatorConfig::currency())
            .unrounded()
            .blank_operands_as_zero();

        assert_eq!(builder.config(), &CalculatorConfig::default());
    }
}
