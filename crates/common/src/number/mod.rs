//! Lenient numeric helpers
//!
//! Parsing here never fails loudly: input that is not a number yields `None`
//! so callers can decide what absence means.

/// Parse an integer, accepting surrounding whitespace, an optional sign,
/// and `0x` / `0o` / `0b` radix prefixes.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use toolbelt_common::number::parse_int;
///
/// assert_eq!(parse_int(" 42 "), Some(42));
/// assert_eq!(parse_int("-0x1F"), Some(-31));
/// assert_eq!(parse_int("0b101"), Some(5));
/// assert_eq!(parse_int("4.2"), None);
/// assert_eq!(parse_int("abc"), None);
/// # }
/// ```
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => (16, &unsigned[2..]),
        Some("0o") => (8, &unsigned[2..]),
        Some("0b") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };

    // from_str_radix would accept a second sign here.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Parse a finite floating-point number.
///
/// `NaN` and infinities are rejected even though Rust's parser accepts
/// their spellings.
pub fn parse_float(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Render `value` with exactly `digits` decimal places.
pub fn to_fixed(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}

/// Constrain `value` to `[min, max]`; inverted bounds are swapped first.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let (low, high) = if min > max { (max, min) } else { (min, max) };
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
