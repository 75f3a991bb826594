// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging to see the digit fallback and saturation events:
//     cargo run --example basic_usage --features logging

use indian_number_words::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Indian Number Words Example ===\n");

    println!("Numbers:");
    for n in [0i64, 45, 101, 1_000, 150_000, 123_456_789, -75_000, 10_000_000_000_000] {
        println!("  {:>20} -> {}", n, to_words(n));
    }

    println!("\nCurrency (decimal):");
    for amount in [
        Decimal::new(12345, 2),
        Decimal::new(100, 2),
        Decimal::new(1, 2),
        Decimal::ZERO,
        Decimal::new(-150, 2),
    ] {
        println!("  {:>10} -> {:?}", amount, to_currency_words(amount));
    }

    println!("\nCurrency (whole rupees):");
    for rupees in [1i64, 10_000_000] {
        println!("  {:>10} -> {}", rupees, rupees_to_words(rupees));
    }

    println!("\n=== Sign-Prefixed Negative Amounts ===");
    let signed = CurrencyFormatter::new(FormatterConfig::signed());
    let refund = Decimal::new(-150, 2);
    println!("  {:>10} -> {}", refund, signed.format_decimal(refund));

    println!("\n=== Errors ===");
    match try_to_currency_words_f32(f32::NAN) {
        Ok(words) => println!("  NaN -> {}", words),
        Err(err) => println!("  NaN -> error: {}", err),
    }
    let huge = Decimal::from(i64::MAX) + Decimal::ONE;
    match try_to_currency_words(huge) {
        Ok(words) => println!("  {} -> {}", huge, words),
        Err(err) => println!("  {} -> error: {}", huge, err),
    }
}
