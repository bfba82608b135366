//! Boundary value normalization
//!
//! Clamps applied when transcoding *into* the OH dialect, which carries
//! the strict numeric contract. Conversions among the HE dialects never
//! clamp.

use serde_json::Number;

/// Clamp a scalar into `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Clamp an integer millisecond value into `[min, max]`.
pub fn clamp_int(value: i64, min: i64, max: i64) -> i64 {
    value.min(max).max(min)
}

/// Clamp a JSON number into `[min, max]`.
///
/// In-range values are returned unchanged so that integer inputs stay
/// integers on the wire; out-of-range values collapse to the integer
/// bound.
pub fn clamp_number(value: &Number, min: i64, max: i64) -> Number {
    let v = value.as_f64().unwrap_or(min as f64);
    if v < min as f64 {
        Number::from(min)
    } else if v > max as f64 {
        Number::from(max)
    } else {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clamp_bounds_both_sides() {
        assert_eq!(clamp(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp(42.5, 0.0, 100.0), 42.5);
        assert_eq!(clamp_int(12_000, 0, 10_000), 10_000);
        assert_eq!(clamp_int(-3, 1, 5000), 1);
    }

    #[test]
    fn clamp_is_idempotent() {
        for value in [-250.0, -100.0, -1.5, 0.0, 33.3, 100.0, 250.0] {
            let once = clamp(value, -100.0, 100.0);
            assert_eq!(clamp(once, -100.0, 100.0), once);
        }
    }

    #[test]
    fn clamp_number_preserves_in_range_values_verbatim() {
        let int = Number::from(80);
        assert_eq!(clamp_number(&int, 0, 100), int);

        let float = Number::from_f64(33.5).unwrap();
        assert_eq!(clamp_number(&float, 0, 100), float);
    }

    #[test]
    fn clamp_number_collapses_out_of_range_to_integer_bound() {
        assert_eq!(clamp_number(&Number::from(150), 0, 100), Number::from(100));
        assert_eq!(
            clamp_number(&Number::from_f64(-120.5).unwrap(), -100, 100),
            Number::from(-100)
        );
    }
}
