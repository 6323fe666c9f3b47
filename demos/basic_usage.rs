// ============================================================================
// Basic Usage Example
// ============================================================================

use arith_calculator::prelude::*;
use std::sync::Arc;

fn render(result: CalculatorResult<f64>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(error) => error.to_string(),
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Calculator Examples:");
    println!("Addition: 5 + 3 = {}", render(compute("add", 5, 3)));
    println!("Subtraction: 10 - 4 = {}", render(compute("-", 10, 4)));
    println!("Multiplication: 6 * 7 = {}", render(compute("*", 6, 7)));
    println!("Division: 20 / 5 = {}", render(compute("divide", 20, 5)));
    println!("Division by zero: {}", render(compute("/", 10, 0)));
    println!("Invalid input: {}", render(compute("+", "abc", 5)));

    println!("\n=== Configured Calculator ===");
    let events = Arc::new(RecordingEventHandler::new());
    let calc = CalculatorBuilder::new()
        .with_decimal_scale(2)
        .build(events.clone())
        .expect("valid configuration");

    let logger = LoggingEventHandler;
    for (op, a, b) in [("divide", "10", "3"), ("MULTIPLY", "0.1", "3"), ("modulo", "5", "3")] {
        match calc.evaluate_decimal(op, a, b) {
            Ok(calculation) => println!("  {}", calculation),
            Err(error) => println!("  {} -> {} ({})", op, error, error.kind()),
        }
    }

    println!("\n=== Events ===");
    for event in events.take() {
        println!("  {:?}", event);
        logger.on_event(event);
    }
}
