use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision
/// issues. 1 unit = 100 cents, so 42.50 = 4250 cents.
pub type Cents = i64;

/// Format cents as a human-readable amount string.
/// Example: 4250 -> "42.50", -99 -> "-0.99"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal string into cents.
/// Accepts "42.50", "42.5", "42" and ".50"; at most two decimal digits.
/// Extra decimal places are rejected rather than silently dropped.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    if digits.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }

    let cents = match digits.split_once('.') {
        None => {
            let units: i64 = digits.parse().map_err(|_| ParseCentsError::InvalidFormat)?;
            units * 100
        }
        Some((whole, frac)) => {
            let units: i64 = if whole.is_empty() {
                0
            } else {
                whole.parse().map_err(|_| ParseCentsError::InvalidFormat)?
            };
            let frac_cents = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| ParseCentsError::InvalidFormat)?
                        * 10
                }
                2 => frac.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)?,
                _ => return Err(ParseCentsError::TooManyDecimals),
            };
            units * 100 + frac_cents
        }
    };

    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    TooManyDecimals,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::TooManyDecimals => {
                write!(f, "amounts support at most two decimal places")
            }
        }
    }
}

impl std::error::Error for ParseCentsError {}
