//! Index parsing with `atoi`-style leniency.
//!
//! Malformed text degrades to a value instead of failing: leading
//! whitespace is skipped, an optional sign is accepted, and parsing stops at
//! the first non-digit. Text with no digits at all reads as 0. Only values
//! the recursion cannot handle (negative) or the index type cannot hold are
//! rejected.

use crate::calculator::FibError;

/// Parse a Fibonacci index from command-line text.
pub fn parse_index(raw: &str) -> Result<u32, FibError> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    let (digits, rest) = unsigned.split_at(digits_len);

    if digits.is_empty() {
        tracing::warn!(input = raw, "no digits in index, using 0");
        return Ok(0);
    }
    if !rest.is_empty() {
        tracing::warn!(input = raw, ignored = rest, "trailing characters after index ignored");
    }

    let magnitude = digits
        .bytes()
        .try_fold(0u64, |acc, b| {
            acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        });

    match (negative, magnitude) {
        (_, None) => Err(FibError::IndexOutOfRange(format!(
            "{}{digits}",
            if negative { "-" } else { "" }
        ))),
        (true, Some(0)) => Ok(0),
        (true, Some(m)) => Err(FibError::NegativeIndex(
            i64::try_from(m).map_or(i64::MIN, |m| -m),
        )),
        (false, Some(m)) => {
            u32::try_from(m).map_err(|_| FibError::IndexOutOfRange(digits.to_string()))
        }
    }
}
