//! Inventory reconciliation engine.
//!
//! Everything in here is synchronous and framework-agnostic: functions take the
//! lists they operate on as arguments and return new values. State ownership and
//! persistence live in [`crate::session`].

/// Catalog products and section lookup
pub mod catalog;
/// Partitioning entries into display groups
pub mod grouping;
/// Product name canonicalization
pub mod normalize;
/// Restock list entries and quantity merging
pub mod restock;
/// Fuzzy name matching for near-duplicate warnings
pub mod similarity;
/// Stock-take entries, unit totals and duplicate checks
pub mod stock_take;

/// Picks a local id for a new list entry.
///
/// The result is the current time in milliseconds unless an existing id is
/// already at or past it, in which case it is one past the largest existing id.
#[must_use]
pub fn next_local_id<I>(existing_ids: I, now_millis: i64) -> i64
where
    I: IntoIterator<Item = i64>,
{
    existing_ids
        .into_iter()
        .max()
        .map_or(now_millis, |max| now_millis.max(max.saturating_add(1)))
}

/// Parses the leading integer of `text` the way a lenient form field would.
///
/// Accepts optional surrounding whitespace, an optional sign and then digits;
/// anything after the digits is ignored (`"3 cases"` is 3, `"2.5"` is 2).
pub(crate) fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Digit runs longer than i64 saturate instead of failing.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Parses the leading decimal number of `text`, ignoring anything after it.
///
/// Accepts an optional sign, digits with at most one decimal point (`".5"` and
/// `"2."` are fine) and an optional exponent, so `"0.5 open"` is 0.5.
pub(crate) fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_next_local_id_uses_clock_when_list_empty() {
        assert_eq!(next_local_id(Vec::new(), 1_000), 1_000);
    }

    #[test]
    fn test_next_local_id_stays_ahead_of_existing() {
        assert_eq!(next_local_id(vec![5, 1_000], 1_000), 1_001);
        assert_eq!(next_local_id(vec![5, 7], 1_000), 1_000);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  3 cases"), Some(3));
        assert_eq!(parse_leading_int("2.5"), Some(2));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("0.5"), Some(0.5));
        assert_eq!(parse_leading_float(" 0.5 open"), Some(0.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("2."), Some(2.0));
        assert_eq!(parse_leading_float("-0.25"), Some(-0.25));
        assert_eq!(parse_leading_float("1e-1x"), Some(0.1));
        assert_eq!(parse_leading_float("3e"), Some(3.0));
        assert_eq!(parse_leading_float("half"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float(""), None);
    }
}
