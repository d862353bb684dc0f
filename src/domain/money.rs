use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// ₹250.00 = 25000 cents.
pub type Cents = i64;

/// Format cents as a two-decimal string.
/// Example: 25000 -> "250.00", 5 -> "0.05"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Largest amount a single entry may hold: one trillion units.
/// Keeps ledger sums far away from `i64` overflow.
pub const MAX_AMOUNT_CENTS: Cents = 1_000_000_000_000 * 100;

/// Convert cents to a float for spreadsheet cells. Never used for arithmetic.
pub fn cents_to_f64(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Parse a non-negative decimal string into cents.
///
/// Example: "250" -> 25000, "12.5" -> 1250, ".05" -> 5, "" -> 0.
/// Digits past the second decimal place round half-up: "0.005" -> 1.
/// Amounts above `MAX_AMOUNT_CENTS` are rejected.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }
    if input.starts_with('-') {
        return Err(ParseCentsError::Negative);
    }

    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(units_str) || !all_digits(decimal_str) {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::TooLarge)?
    };

    let digit = |i: usize| -> i64 {
        decimal_str
            .as_bytes()
            .get(i)
            .map(|b| i64::from(b - b'0'))
            .unwrap_or(0)
    };
    let round_up = i64::from(digit(2) >= 5);
    let decimal_cents = digit(0) * 10 + digit(1) + round_up;

    units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .filter(|c| *c <= MAX_AMOUNT_CENTS)
        .ok_or(ParseCentsError::TooLarge)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Negative,
    TooLarge,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::Negative => write!(f, "amount cannot be negative"),
            ParseCentsError::TooLarge => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
