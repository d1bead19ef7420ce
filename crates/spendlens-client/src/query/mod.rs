pub mod by_category;
pub mod by_month;
pub mod params;
pub mod recent;

/// Two-decimal rounding with halves going up, e.g. `66.665 -> 66.67`.
/// Results are not renormalized, so a set of percentages may sum to slightly
/// more or less than 100.
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

pub fn share_of(part: f64, whole: f64) -> f64 {
    round_percentage(part / whole * 100.0)
}

#[cfg(test)]
mod tests {
    use super::{round_percentage, share_of};

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_percentage(66.666_666), 66.67);
        assert_eq!(round_percentage(33.333_333), 33.33);
        assert_eq!(round_percentage(100.0), 100.0);
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_percentage(12.125), 12.13);
        assert_eq!(round_percentage(-12.125), -12.12);
    }

    #[test]
    fn thirds_do_not_renormalize() {
        let third = share_of(1.0, 3.0);
        assert_eq!(third, 33.33);
        assert!((third * 3.0 - 100.0).abs() < 0.1);
    }
}
