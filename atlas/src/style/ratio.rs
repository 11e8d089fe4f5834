/// Normalize `value` into its position within `[min, max]`.
///
/// Values below `min` map to `0.0` and values above `max` map to `1.0`;
/// anything in between is interpolated linearly.
///
/// The domain is not validated. With `min == max` an in-range value divides
/// zero by zero and the result is `NaN`, which flows into whatever style is
/// computed from it. Callers that care should check [`is_degenerate`] first.
pub fn ratio(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        return 0.0;
    }
    if value > max {
        return 1.0;
    }
    (value - min) / (max - min)
}

/// Whether `[min, max]` is empty or a single point.
pub fn is_degenerate(min: f64, max: f64) -> bool {
    min >= max || min.is_nan() || max.is_nan()
}
