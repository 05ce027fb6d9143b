//! Significant-digit number formatting.

/// Shortest rendering of `value` at the given number of significant digits.
///
/// Positional notation when the decimal exponent is in `[-4, digits)`,
/// exponent notation otherwise; trailing zeros are trimmed either way.
pub fn format_sig(value: f64, digits: usize) -> String {
    debug_assert!(digits > 0);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    // The exponent of the *rounded* value decides the notation, so format
    // scientifically first and inspect the result.
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp_text)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp_text.parse::<i32>() else {
        return sci;
    };
    if (-4..digits as i32).contains(&exp) {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_trailing_zeros(&format!("{value:.decimals$}"))
    } else {
        format!("{}e{exp}", trim_trailing_zeros(mantissa))
    }
}

fn trim_trailing_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::format_sig;

    #[test]
    fn positional_rounding() {
        assert_eq!(format_sig(41.869_941_14, 7), "41.86994");
        assert_eq!(format_sig(250.446_63, 7), "250.4466");
        assert_eq!(format_sig(0.357_142_857, 5), "0.35714");
        assert_eq!(format_sig(17.857_142_857, 7), "17.85714");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_sig(18.0, 7), "18");
        assert_eq!(format_sig(36.0, 7), "36");
        assert_eq!(format_sig(2.5, 7), "2.5");
        assert_eq!(format_sig(10.0, 3), "10");
    }

    #[test]
    fn rounding_can_bump_the_exponent() {
        assert_eq!(format_sig(9.999_999_9, 7), "10");
        assert_eq!(format_sig(0.999_999_99, 7), "1");
    }

    #[test]
    fn small_values_stay_positional_down_to_e_minus_4() {
        assert_eq!(format_sig(0.000_123_456_78, 7), "0.0001234568");
        assert_eq!(format_sig(0.000_012_345_678, 7), "1.234568e-5");
    }

    #[test]
    fn large_values_switch_to_exponent_notation() {
        assert_eq!(format_sig(1_234_567.0, 7), "1234567");
        assert_eq!(format_sig(12_345_678.0, 7), "1.234568e7");
        assert_eq!(format_sig(15_000_000_000.0, 7), "1.5e10");
    }

    #[test]
    fn negatives_and_zero() {
        assert_eq!(format_sig(-41.869_941_14, 7), "-41.86994");
        assert_eq!(format_sig(-0.001_234, 7), "-0.001234");
        assert_eq!(format_sig(0.0, 7), "0");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(format_sig(f64::INFINITY, 7), "inf");
        assert_eq!(format_sig(f64::NEG_INFINITY, 7), "-inf");
        assert_eq!(format_sig(f64::NAN, 7), "NaN");
    }
}
