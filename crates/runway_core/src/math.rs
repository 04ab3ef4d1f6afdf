//! Numeric helpers shared by the cost, revenue and analysis modules

/// Divide, returning 0.0 when the denominator is zero.
///
/// Runway, ratio and sweep calculations all go through this helper so a
/// zero burn or empty team never produces `NaN` or `inf`.
#[inline]
#[must_use]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `part / whole` expressed as a percentage, 0.0 for an empty whole
#[inline]
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    safe_div(part, whole) * 100.0
}

/// Logistic curve with the given steepness, centred on `midpoint`
#[inline]
#[must_use]
pub fn logistic(x: f64, steepness: f64, midpoint: f64) -> f64 {
    1.0 / (1.0 + (-steepness * (x - midpoint)).exp())
}
