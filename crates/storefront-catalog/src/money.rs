//! Price display.
//!
//! The repository serves prices as decimal dollars; they are only ever
//! rounded for display, never used in arithmetic.

/// Format a price with a dollar sign and two fractional digits.
///
/// ```
/// use storefront_catalog::money::format_price;
/// assert_eq!(format_price(22.3), "$22.30");
/// ```
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}
