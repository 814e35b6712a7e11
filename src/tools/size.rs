//! Human-readable byte counts.
//!
//! Accepted tokens:
//!
//! ```text
//! max
//! <digits> [unit [i]] [B]
//! ```
//!
//! `unit` is one of `K M G T` (any case). Without `i` the unit is a power
//! of 1000, with `i` a power of 1024. A trailing `B` is optional.

use crate::error::ToolError;

/// Byte count returned for the literal token `max`.
pub const MAX_SIZE: u64 = u64::MAX;

/// Parses a size token such as `"23MiB"`, `"1GB"`, `"4096"` or `"max"`.
///
/// # Errors
///
/// - [`ToolError::InvalidSize`] if the token does not match the grammar
/// - [`ToolError::SizeOverflow`] if the value does not fit in a `u64`
pub fn parse_size(token: &str) -> Result<u64, ToolError> {
    if token == "max" {
        return Ok(MAX_SIZE);
    }

    let invalid = || ToolError::InvalidSize(token.to_owned());
    let overflow = || ToolError::SizeOverflow(token.to_owned());

    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, mut rest) = token.split_at(digits_end);

    if digits.is_empty() {
        return Err(invalid());
    }

    let mut size = digits.parse::<u64>().map_err(|_| overflow())?;

    let mut chars = rest.chars();
    let exponent = match chars.next().map(|c| c.to_ascii_uppercase()) {
        Some('K') => 1,
        Some('M') => 2,
        Some('G') => 3,
        Some('T') => 4,
        _ => 0,
    };

    if exponent > 0 {
        rest = chars.as_str();

        let base: u64 = match rest.strip_prefix(['i', 'I']) {
            Some(after) => {
                rest = after;
                1024
            }
            None => 1000,
        };

        for _ in 0..exponent {
            size = size.checked_mul(base).ok_or_else(overflow)?;
        }
    }

    if let Some(after) = rest.strip_prefix(['b', 'B']) {
        rest = after;
    }

    if !rest.is_empty() {
        return Err(invalid());
    }

    Ok(size)
}
