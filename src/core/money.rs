use rust_decimal::Decimal;

/// All monetary amounts are kept at two decimal places (the smallest
/// representable currency increment).
pub const CENT_SCALE: u32 = 2;

/// Round a monetary amount to the cent. Uses the default banker's rounding,
/// matching the legacy schedule output.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp(CENT_SCALE)
}

/// Round an f64 rate to two decimal places (used for averaged interest rates,
/// which stay in floating point because they are inputs, not currency).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
