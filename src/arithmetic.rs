/// Space calculator — Arithmetic Primitives
///
/// All numeric values: f64. Unchecked helpers follow IEEE-754 semantics
/// exactly; checked helpers reject NaN and infinities.

use crate::error::{FuelError, Result};

/// Distance covered at constant `speed` over `time`. No unit conversion.
pub fn distance(speed: f64, time: f64) -> f64 {
    speed * time
}

/// `value >= threshold`. NaN on either side compares false.
pub fn meets_threshold(value: f64, threshold: f64) -> bool {
    value >= threshold
}

/// Reject NaN and infinities, naming the offending input.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FuelError::NonFinite { field, value })
    }
}

/// Checked distance: both inputs and the product must be finite.
pub fn checked_distance(speed: f64, time: f64) -> Result<f64> {
    let speed = ensure_finite("speed", speed)?;
    let time = ensure_finite("time", time)?;
    ensure_finite("distance", distance(speed, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance(3.0, 4.0), 12.0);
        assert_eq!(distance(0.0, 1_000.0), 0.0);
        assert_eq!(distance(-5.0, 2.0), -10.0);
        assert_eq!(distance(-5.0, -2.0), 10.0);
        assert_eq!(distance(2.5, 0.5), 1.25);
    }

    #[test]
    fn test_meets_threshold_boundary() {
        assert!(meets_threshold(100.0, 100.0));
        assert!(meets_threshold(100.5, 100.0));
        assert!(!meets_threshold(99.999, 100.0));
        assert!(!meets_threshold(f64::NAN, 100.0));
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("amount", 7.5), Ok(7.5));
        assert!(matches!(
            ensure_finite("amount", f64::INFINITY),
            Err(FuelError::NonFinite { field: "amount", .. })
        ));
        assert!(ensure_finite("amount", f64::NAN).is_err());
    }

    #[test]
    fn test_checked_distance_overflow() {
        assert_eq!(checked_distance(10.0, 3.0), Ok(30.0));
        assert!(matches!(
            checked_distance(f64::MAX, 2.0),
            Err(FuelError::NonFinite { field: "distance", .. })
        ));
        assert!(matches!(
            checked_distance(1.0, f64::NEG_INFINITY),
            Err(FuelError::NonFinite { field: "time", .. })
        ));
    }
}
