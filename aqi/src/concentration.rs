//! Unit conversion: raw channel readings to a corrected PM2.5 concentration.

/// Parse the leading integer out of `text`.
///
/// Leading whitespace is skipped, then an optional sign, then the longest run
/// of ASCII digits; anything after that is ignored (`"12.7"` is 12,
/// `"42ug"` is 42). Returns `None` if there are no digits in that position.
pub fn parse_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate rather than wrap on absurdly long digit runs.
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as i64)
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// [`parse_int`], with unparsable text read as 0.
///
/// Note that this makes missing or corrupt readings look like clean air.
pub fn parse_int_or_zero(text: &str) -> i64 {
    parse_int(text).unwrap_or(0)
}

/// Average the two particulate channels and apply the EPA draft correction
/// for wood smoke on PurpleAir sensors:
///
/// `0.52 * average - 0.085 * humidity + 5.71`
///
/// The result is passed through as-is; small readings in humid air come out
/// negative.
pub fn correct_concentration(adj1: i64, adj2: i64, humidity: i64) -> f64 {
    let average = (adj1 as f64 + adj2 as f64) / 2.0;
    (0.52 * average) - (0.085 * humidity as f64) + 5.71
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parse_plain_integers() {
        assert_eq!(parse_int_or_zero("0"), 0);
        assert_eq!(parse_int_or_zero("49237"), 49237);
        assert_eq!(parse_int_or_zero("-3"), -3);
        assert_eq!(parse_int_or_zero("+8"), 8);
        assert_eq!(parse_int_or_zero("  17"), 17);
    }

    #[test]
    fn parse_stops_at_first_non_digit() {
        assert_eq!(parse_int_or_zero("12.7"), 12);
        assert_eq!(parse_int_or_zero("42ug/m3"), 42);
        assert_eq!(parse_int_or_zero("-0.5"), 0);
    }

    #[test]
    fn parse_garbage_is_zero() {
        // Sharp edge: unparsable input silently reads as zero.
        assert_eq!(parse_int_or_zero(""), 0);
        assert_eq!(parse_int_or_zero("n/a"), 0);
        assert_eq!(parse_int_or_zero("-"), 0);
        assert_eq!(parse_int_or_zero("x12"), 0);
    }

    #[test]
    fn parse_reports_missing_digits() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("7 days"), Some(7));
        assert_eq!(parse_int("n/a"), None);
        assert_eq!(parse_int(" "), None);
    }

    #[test]
    fn parse_saturates() {
        assert_eq!(parse_int_or_zero("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn correction_matches_epa_formula() {
        // 0.52*50 - 0.085*50 + 5.71 = 26.0 - 4.25 + 5.71
        assert!(close(correct_concentration(50, 50, 50), 27.46));
        // Odd sums average to a half.
        assert!(close(correct_concentration(40, 42, 50), 22.78));
        assert!(close(correct_concentration(41, 42, 0), 0.52 * 41.5 + 5.71));
    }

    #[test]
    fn correction_handles_saturated_channels() {
        let pm = correct_concentration(i64::MAX, i64::MAX, 0);
        assert!(pm.is_finite());
        assert!(pm > 350.5);
    }

    #[test]
    fn correction_can_go_negative() {
        let pm = correct_concentration(0, 0, 100);
        assert!(close(pm, -2.79));
        assert!(pm < 0.0);
    }
}
