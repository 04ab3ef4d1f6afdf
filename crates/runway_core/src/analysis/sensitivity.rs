//! Team-size runway sensitivity

use std::ops::RangeInclusive;

use crate::math::safe_div;
use crate::model::SensitivityPoint;

/// Team sizes swept
pub const SENSITIVITY_TEAM_SIZES: RangeInclusive<u32> = 5..=29;

/// Runway across [`SENSITIVITY_TEAM_SIZES`].
///
/// Burn is rescaled linearly by `size / current_headcount`, assuming every
/// cost line grows with the team. This is a first-order approximation and
/// does not re-run the cost model. An empty current team leaves burn
/// unscaled.
pub fn runway_sensitivity(
    raise_dollars: f64,
    monthly_burn: f64,
    current_headcount: u32,
) -> Vec<SensitivityPoint> {
    SENSITIVITY_TEAM_SIZES
        .map(|team_size| {
            let ratio = if current_headcount == 0 {
                1.0
            } else {
                f64::from(team_size) / f64::from(current_headcount)
            };
            SensitivityPoint {
                team_size,
                runway: safe_div(raise_dollars, monthly_burn * ratio),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_covers_25_sizes() {
        let points = runway_sensitivity(5_000_000.0, 200_000.0, 5);
        assert_eq!(points.len(), 25);
        assert_eq!(points.first().unwrap().team_size, 5);
        assert_eq!(points.last().unwrap().team_size, 29);
    }

    #[test]
    fn test_current_size_matches_actual_runway() {
        let points = runway_sensitivity(5_000_000.0, 200_000.0, 10);
        let at_ten = points.iter().find(|p| p.team_size == 10).unwrap();
        assert!((at_ten.runway - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_runway_strictly_decreasing() {
        let points = runway_sensitivity(5_000_000.0, 150_000.0, 7);
        assert!(points.windows(2).all(|w| w[0].runway > w[1].runway));
    }

    #[test]
    fn test_empty_team_uses_unit_ratio() {
        let points = runway_sensitivity(5_000_000.0, 250_000.0, 0);
        assert!(points.iter().all(|p| (p.runway - 20.0).abs() < 1e-9));
    }

    #[test]
    fn test_zero_burn() {
        let points = runway_sensitivity(5_000_000.0, 0.0, 5);
        assert!(points.iter().all(|p| p.runway == 0.0));
    }
}
