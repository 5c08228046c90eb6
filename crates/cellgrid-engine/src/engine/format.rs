/// Fractional digits kept when rendering numbers.
const DISPLAY_DECIMALS: usize = 10;

/// Format a number for display.
///
/// Rounds to ten fractional digits and drops trailing zeros, so `10/3`
/// renders as `3.3333333333` and `4/2` as `2`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let mut text = format!("{:.*}", DISPLAY_DECIMALS, n);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Round a number to the precision it is displayed with.
pub fn round_to_display(n: f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    format_number(n).parse().unwrap_or(n)
}

#[cfg(test)]
mod tests {
    use super::{format_number, round_to_display};

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(150.0), "150");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_rounds_to_ten_places() {
        assert_eq!(format_number(10.0 / 3.0), "3.3333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_tiny_negative_rounds_to_zero() {
        assert_eq!(format_number(-1e-12), "0");
    }

    #[test]
    fn test_large_values_stay_positional() {
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn test_round_to_display_matches_shown_text() {
        assert_eq!(round_to_display(10.0 / 3.0), 3.3333333333);
        assert_eq!(round_to_display(0.1 + 0.2), 0.3);
        assert_eq!(round_to_display(-1e-12), 0.0);
        assert_eq!(round_to_display(42.0), 42.0);
    }
}
