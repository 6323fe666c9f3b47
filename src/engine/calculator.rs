// ============================================================================
// Calculator Service
// Configured entry point that reports every outcome to an event handler
// ============================================================================

use super::compute::evaluate_operands;
use crate::domain::{Calculation, CalculatorConfig};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{CalculatorResult, Numeric, Operand};
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;

/// Calculator with a coercion policy, decimal rounding and an event sink.
///
/// Holds no mutable state: a single instance can be shared across threads
/// behind an `Arc`. Each call emits exactly one [`CalculationEvent`].
pub struct Calculator {
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Compute with IEEE double arithmetic; see [`compute`](fn@super::compute)
    pub fn compute(
        &self,
        operation: &str,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> CalculatorResult<f64> {
        self.evaluate(operation, a, b).map(|calc| calc.value)
    }

    /// Compute with exact decimal arithmetic, rounding to the configured scale
    pub fn compute_decimal(
        &self,
        operation: &str,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> CalculatorResult<Decimal> {
        self.evaluate_decimal(operation, a, b).map(|calc| calc.value)
    }

    pub fn evaluate(
        &self,
        operation: &str,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> CalculatorResult<Calculation<f64>> {
        let outcome =
            evaluate_operands(operation, &a.into(), &b.into(), self.config.empty_as_zero);
        self.report(operation, &outcome);
        outcome
    }

    pub fn evaluate_decimal(
        &self,
        operation: &str,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> CalculatorResult<Calculation<Decimal>> {
        let outcome = evaluate_operands::<Decimal>(
            operation,
            &a.into(),
            &b.into(),
            self.config.empty_as_zero,
        )
        .map(|mut calc| {
            if let Some(scale) = self.config.decimal_scale {
                calc.value = calc
                    .value
                    .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            }
            calc
        });
        self.report(operation, &outcome);
        outcome
    }

    fn report<N: Numeric>(&self, operation: &str, outcome: &CalculatorResult<Calculation<N>>) {
        let event = match outcome {
            Ok(calc) => CalculationEvent::Computed {
                operation: calc.operation,
                expression: calc.to_string(),
                timestamp: Utc::now(),
            },
            Err(error) => CalculationEvent::Rejected {
                operation: operation.to_string(),
                error: *error,
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }
}
