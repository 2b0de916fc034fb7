//! AMM calculation utilities using constant product formula (x * y = k)
//!
//! No trading fee is modeled. Amounts are `f64` and nothing here rounds,
//! clamps or rejects: degenerate reserves produce non-finite results that
//! callers decide how to handle.

/// Calculate output amount using constant product formula
/// Formula: (x + Δx) * (y - Δy) = x * y, solved for Δy
///
/// # Arguments
/// * `amount_in` - Amount of the input asset swapped into the pool
/// * `reserve_in` - Reserve of input token
/// * `reserve_out` - Reserve of output token
///
/// # Returns
/// Projected output amount; strictly below `reserve_out` for any
/// non-negative input against positive reserves
pub fn calculate_amount_out(amount_in: f64, reserve_in: f64, reserve_out: f64) -> f64 {
    (reserve_out * amount_in) / (reserve_in + amount_in)
}

/// Destination amount received per unit supplied
pub fn calculate_rate(amount_out: f64, amount_in: f64) -> f64 {
    amount_out / amount_in
}

/// Calculate price impact as a fraction of the spot price
///
/// Price impact = 1 - (actual_price / spot_price), where the spot price is
/// `reserve_out / reserve_in` and the actual price is `amount_out / amount_in`.
/// Returns 0 when either price is undefined.
pub fn calculate_price_impact(
    amount_in: f64,
    amount_out: f64,
    reserve_in: f64,
    reserve_out: f64,
) -> f64 {
    if amount_in == 0.0 || reserve_in == 0.0 || reserve_out == 0.0 {
        return 0.0;
    }

    let spot_price = reserve_out / reserve_in;
    let actual_price = amount_out / amount_in;
    1.0 - actual_price / spot_price
}
