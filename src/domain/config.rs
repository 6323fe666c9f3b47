// ============================================================================
// Calculator Configuration
// Operand coercion policy and decimal result rounding
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale `rust_decimal::Decimal` can represent
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Configuration for a [`Calculator`](crate::engine::Calculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Optional: Round decimal results to this many fractional digits
    /// None means results keep their natural scale
    pub decimal_scale: Option<u32>,

    /// Whether blank text operands coerce to zero
    /// When false, blank text is an invalid operand
    pub empty_as_zero: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimal_scale: None,
            empty_as_zero: true,
        }
    }
}

impl CalculatorConfig {
    /// Create the default (permissive) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set decimal result scale
    pub fn with_decimal_scale(mut self, scale: u32) -> Self {
        self.decimal_scale = Some(scale);
        self
    }

    /// Builder method: Set blank operand policy
    pub fn with_empty_as_zero(mut self, empty_as_zero: bool) -> Self {
        self.empty_as_zero = empty_as_zero;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(scale) = self.decimal_scale {
            if scale > MAX_DECIMAL_SCALE {
                return Err(format!(
                    "Decimal scale {} exceeds maximum of {}",
                    scale, MAX_DECIMAL_SCALE
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Strict configuration
    /// - Blank operands are rejected
    pub fn strict() -> Self {
        Self::new().with_empty_as_zero(false)
    }

    /// Currency configuration
    /// - Blank operands are rejected
    /// - Decimal results rounded to cents
    pub fn currency() -> Self {
        Self::strict().with_decimal_scale(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.decimal_scale, None);
        assert!(config.empty_as_zero);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::new()
            .with_decimal_scale(4)
            .with_empty_as_zero(false);

        assert_eq!(config.decimal_scale, Some(4));
        assert!(!config.empty_as_zero);
    }

    #[test]
    fn test_validation() {
        assert!(CalculatorConfig::new()
            .with_decimal_scale(MAX_DECIMAL_SCALE)
            .validate()
            .is_ok());
        assert!(CalculatorConfig::new()
            .with_decimal_scale(MAX_DECIMAL_SCALE + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        let strict = CalculatorConfig::strict();
        assert!(!strict.empty_as_zero);
        assert_eq!(strict.decimal_scale, None);

        let currency = CalculatorConfig::currency();
        assert_eq!(currency.decimal_scale, Some(2));
        assert!(currency.validate().is_ok());
    }
}
