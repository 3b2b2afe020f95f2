use std::str::FromStr;

use rust_decimal::Decimal;

/// Tokens both portals use for "not applicable" or "not yet disclosed".
///
/// `N/A` is matched case-insensitively and handled separately.
const PLACEHOLDERS: &[&str] = &["--", "－", "－－", "尚未公告", "待公告"];

/// Parse a portal numeric cell.
///
/// Accepts thousands separators, a leading sign and a trailing `%` (divided by
/// 100). Empty cells, whitespace and the placeholder tokens map to `None`, as
/// does anything outside the plain `[+-]digits[.digits][%]` grammar,
/// including scientific notation. Either side of the decimal point may be
/// omitted (`.5`, `5.`).
#[must_use]
pub fn parse_numeric(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(parse_numeric_str)
}

/// [`parse_numeric`] for a borrowed cell that is known to be present.
#[must_use]
pub fn parse_numeric_str(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if is_placeholder(trimmed) {
        return None;
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    let (body, percent) = match cleaned.strip_suffix('%') {
        Some(body) => (body.trim_end(), true),
        None => (cleaned.as_str(), false),
    };
    let (negative, digits) = if let Some(rest) = body.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = body.strip_prefix('+') {
        (false, rest)
    } else {
        (false, body)
    };

    let digits = plain_decimal(digits)?;
    let mut value = Decimal::from_str(&digits).ok()?;
    if percent {
        value = value.checked_div(Decimal::ONE_HUNDRED)?;
    }
    if negative && !value.is_zero() {
        value = -value;
    }
    Some(value)
}

fn is_placeholder(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("N/A") || PLACEHOLDERS.contains(&s)
}

/// `s` in canonical `int[.frac]` form when it is a plain decimal. Either side
/// of the point may be empty (`.5`, `5.`), not both.
fn plain_decimal(s: &str) -> Option<String> {
    let digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('.') {
        Some((int, frac)) if digits(int) && digits(frac) => match (int.is_empty(), frac.is_empty()) {
            (true, true) => None,
            (true, false) => Some(format!("0.{frac}")),
            (false, true) => Some(int.to_string()),
            (false, false) => Some(s.to_string()),
        },
        Some(_) => None,
        None => (!s.is_empty() && digits(s)).then(|| s.to_string()),
    }
}
