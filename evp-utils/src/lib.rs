//! Shared arithmetic helpers for EVP crates.
//!
//! Every percentage and growth figure the dashboard reports flows through
//! this module, so the rounding rule and the empty-input neutral values are
//! defined in exactly one place.

/// Percentage and growth arithmetic.
pub mod math {
    /// Round to the nearest integer with halves going toward positive
    /// infinity, matching JavaScript's `Math.round`.
    ///
    /// `f64::round` sends -62.5 to -63; `Math.round` sends it to -62. The
    /// dashboard's published figures use the latter, so parity matters for
    /// negative growth rates.
    pub fn js_round(value: f64) -> i64 {
        (value + 0.5).floor() as i64
    }

    /// Integer percentage `count / denominator * 100`, rounded.
    ///
    /// Returns 0 when the denominator is 0 so callers never divide by zero
    /// on an empty subset.
    pub fn percent_of(count: u64, denominator: u64) -> i64 {
        if denominator == 0 {
            return 0;
        }
        js_round(count as f64 / denominator as f64 * 100.0)
    }

    /// Period-over-period growth `(current - previous) / previous * 100`,
    /// as a rounded integer percentage. 0 when `previous` is 0.
    pub fn growth_percent(current: u64, previous: u64) -> i64 {
        if previous == 0 {
            return 0;
        }
        js_round((current as f64 - previous as f64) / previous as f64 * 100.0)
    }

    /// First-vs-last growth ratio `(last - first) / first`. 0 when `first`
    /// is 0.
    pub fn growth_ratio(first: u64, last: u64) -> f64 {
        if first == 0 {
            return 0.0;
        }
        (last as f64 - first as f64) / first as f64
    }

    /// Rounded mean of a sum over `count` items. 0 when `count` is 0.
    pub fn mean_rounded(sum: u64, count: u64) -> u64 {
        if count == 0 {
            return 0;
        }
        js_round(sum as f64 / count as f64) as u64
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_js_round_positive() {
            assert_eq!(js_round(37.4), 37);
            assert_eq!(js_round(37.5), 38);
            assert_eq!(js_round(60.0), 60);
        }

        #[test]
        fn test_js_round_negative_half_goes_up() {
            // Math.round(-62.5) === -62, f64::round would give -63
            assert_eq!(js_round(-62.5), -62);
            assert_eq!(js_round(-62.6), -63);
            assert_eq!(js_round(-0.5), 0);
        }

        #[test]
        fn test_percent_of() {
            assert_eq!(percent_of(7, 10), 70);
            assert_eq!(percent_of(1, 3), 33);
            assert_eq!(percent_of(2, 3), 67);
            assert_eq!(percent_of(0, 10), 0);
            assert_eq!(percent_of(5, 0), 0);
        }

        #[test]
        fn test_growth_percent() {
            assert_eq!(growth_percent(8, 5), 60);
            assert_eq!(growth_percent(3, 8), -62);
            assert_eq!(growth_percent(5, 5), 0);
            assert_eq!(growth_percent(5, 0), 0);
        }

        #[test]
        fn test_growth_ratio() {
            assert_eq!(growth_ratio(100, 150), 0.5);
            assert_eq!(growth_ratio(100, 50), -0.5);
            assert_eq!(growth_ratio(0, 50), 0.0);
        }

        #[test]
        fn test_mean_rounded() {
            assert_eq!(mean_rounded(470, 3), 157);
            assert_eq!(mean_rounded(0, 0), 0);
        }
    }
}
