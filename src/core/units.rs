//! Display-side unit conversion. Float math is confined to this module:
//! routing and swap arithmetic stay in `BigUint` native units, and these
//! helpers exist only to format amounts for logs and API consumers.

use num_bigint::BigUint;
use num_traits::Zero;

/// Native-unit amount to a human-readable value at the token's declared
/// decimal precision. Lossy by design; never feed the result back into
/// routing math.
pub fn to_display(amount: &BigUint, decimals: u32) -> f64 {
    let value = amount.to_string().parse::<f64>().unwrap_or(0.0);
    value / 10f64.powi(decimals as i32)
}

/// Human-readable value back to native units, truncating below the token's
/// smallest unit. Non-positive input maps to zero.
pub fn from_display(value: f64, decimals: u32) -> BigUint {
    if value <= 0.0 {
        return BigUint::zero();
    }
    let scaled = value * 10f64.powi(decimals as i32);
    BigUint::from(scaled as u128)
}
