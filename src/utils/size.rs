//! Byte-size formatting and parsing utilities.
//!
//! This module converts raw byte counts into human-readable strings
//! (`1536` → `"1.50 KB"`) and parses human-readable size strings
//! (like "100MB" or "1.5GiB") back into byte values.

use anyhow::{Result, anyhow, bail};

/// Unit labels for [`bytes_to_size`], in ascending order of magnitude.
const SIZE_UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a human-readable size string.
///
/// The value is scaled to the largest base-1024 unit that fits and rendered
/// with two decimal places, e.g. `"1.50 KB"` or `"3.00 GB"`. Zero is returned
/// as the literal `"0 B"` without scaling.
///
/// # Examples
///
/// ```
/// # use table_export::utils::bytes_to_size;
/// assert_eq!(bytes_to_size(0), "0 B");
/// assert_eq!(bytes_to_size(1024), "1.00 KB");
/// assert_eq!(bytes_to_size(1536), "1.50 KB");
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn bytes_to_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let exponent = ((bytes as f64).ln() / base.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / base.powi(exponent as i32);

    format!("{value:.2} {}", SIZE_UNITS[exponent])
}

/// Unit suffixes accepted by [`parse_size`], longest first so that binary
/// units are matched before their decimal prefixes.
const PARSE_UNITS: &[(&str, u64)] = &[
    ("TIB", 1 << 40),
    ("GIB", 1 << 30),
    ("MIB", 1 << 20),
    ("KIB", 1 << 10),
    ("TB", 1_000_000_000_000),
    ("GB", 1_000_000_000),
    ("MB", 1_000_000),
    ("KB", 1_000),
    ("B", 1),
];

/// Parse a human-readable size string into bytes.
///
/// Supports decimal units (KB, MB, GB, TB at base 1000), binary units
/// (KiB, MiB, GiB, TiB at base 1024), plain byte counts, and decimal
/// numbers such as `"1.5MB"`. Matching is case-insensitive.
///
/// # Errors
///
/// Returns an error if:
/// - The string is empty or its numeric part cannot be parsed
/// - The fractional part has more than 9 digits
/// - The resulting value would overflow `u64`
pub fn parse_size(size_str: &str) -> Result<u64> {
    let normalized = size_str.trim().to_uppercase();
    let (number, multiplier) = split_unit(&normalized);

    if number.is_empty() {
        bail!("Invalid size string: {size_str}");
    }

    let total: u128 = match number.split_once('.') {
        Some((whole, fraction)) => {
            let whole: u64 = if whole.is_empty() {
                0
            } else {
                whole
                    .parse()
                    .map_err(|_| anyhow!("Invalid size string: {size_str}"))?
            };
            let nanos = fraction_as_nanos(fraction)
                .ok_or_else(|| anyhow!("Invalid size string: {size_str}"))?;

            u128::from(whole) * u128::from(multiplier)
                + u128::from(nanos) * u128::from(multiplier) / 1_000_000_000
        }
        None => {
            let whole: u64 = number
                .parse()
                .map_err(|_| anyhow!("Invalid size string: {size_str}"))?;
            u128::from(whole) * u128::from(multiplier)
        }
    };

    u64::try_from(total).map_err(|_| anyhow!("Size value overflow: {size_str}"))
}

/// Split a normalized size string into its numeric part and unit multiplier.
fn split_unit(size_str: &str) -> (&str, u64) {
    for (suffix, multiplier) in PARSE_UNITS {
        if let Some(rest) = size_str.strip_suffix(suffix) {
            return (rest.trim_end(), *multiplier);
        }
    }

    (size_str, 1)
}

/// Convert a fractional-digit string into nanoscale units (billionths).
///
/// `"5"` becomes `500_000_000`; more than 9 digits is rejected.
fn fraction_as_nanos(fraction: &str) -> Option<u64> {
    if fraction.is_empty() || fraction.len() > 9 {
        return None;
    }

    let digits: u64 = fraction.parse().ok()?;
    let scale = 10u64.pow(9 - u32::try_from(fraction.len()).ok()?);

    Some(digits * scale)
}
