pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    format!("{value:.decimals$}")
}

/// 2-decimal string for the numeric readout (time, position, velocity).
pub fn format_readout(value: f64) -> String {
    format_fixed(value, 2)
}

/// 1-decimal time string used as the shared x-axis label of all series.
pub fn format_time_label(seconds: f64) -> String {
    format_fixed(seconds, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_uses_two_decimals() {
        assert_eq!(format_readout(4.0), "4.00");
        assert_eq!(format_readout(-0.125), "-0.12");
    }

    #[test]
    fn time_label_uses_one_decimal() {
        assert_eq!(format_time_label(2.0), "2.0");
        assert_eq!(format_time_label(0.05), "0.1");
    }

    #[test]
    fn non_finite_values_never_panic() {
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 2), "Inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Inf");
    }
}
