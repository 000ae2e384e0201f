//! Exact conversion between on-chain fixed-point amounts and their decimal
//! string form.
//!
//! The chain stores amounts as integers scaled by a fixed power of ten.
//! Conversion is integer arithmetic end to end: no value representable in
//! 256 bits loses precision in either direction.

use alloy::primitives::U256;
use thiserror::Error;

/// Decimal places of the native currency's fixed-point representation.
pub const NATIVE_DECIMALS: u8 = 18;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("'{0}' is not a decimal amount")]
    NotDecimal(String),
    #[error("'{input}' has more than {max} fractional digits")]
    TooManyDecimals { input: String, max: u8 },
    #[error("'{0}' does not fit the 256-bit amount width")]
    Overflow(String),
}

/// Scales a decimal string ("2.0", "0.25") up to its fixed-point integer.
pub fn scale_amount(input: &str, decimals: u8) -> Result<U256, AmountError> {
    let trimmed = input.trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
        return Err(AmountError::NotDecimal(input.to_string()));
    }
    if frac.len() > decimals as usize {
        return Err(AmountError::TooManyDecimals { input: input.to_string(), max: decimals });
    }

    let scale = U256::from(10).pow(U256::from(decimals));
    let frac_scale = U256::from(10).pow(U256::from((decimals as usize - frac.len()) as u64));

    let whole_units = parse_digits(input, whole)?;
    let frac_units = parse_digits(input, frac)?
        .checked_mul(frac_scale)
        .ok_or_else(|| AmountError::Overflow(input.to_string()))?;

    whole_units
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_add(frac_units))
        .ok_or_else(|| AmountError::Overflow(input.to_string()))
}

/// Renders a fixed-point integer as a canonical decimal string: no
/// trailing fractional zeros, and no fractional part at all for whole
/// amounts ("1.5", "0.25", "2").
pub fn unscale_amount(value: U256, decimals: u8) -> String {
    let scale = U256::from(10).pow(U256::from(decimals));
    let whole = value / scale;
    let frac = value % scale;

    if frac.is_zero() {
        return whole.to_string();
    }

    let digits = frac.to_string();
    let mut rendered = "0".repeat(decimals as usize - digits.len());
    rendered.push_str(&digits);
    format!("{whole}.{}", rendered.trim_end_matches('0'))
}

fn parse_digits(input: &str, digits: &str) -> Result<U256, AmountError> {
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| AmountError::Overflow(input.to_string()))
}
