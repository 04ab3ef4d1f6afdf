//! Month-by-month cash position

use crate::model::{CashPoint, DerivedMetrics};

/// Fraction of the raise below which the with-revenue curve is floored
pub const CASH_FLOOR_FRACTION: f64 = 0.3;

/// Cash remaining at each month of the horizon, with and without revenue.
///
/// Burn is held constant. The with-revenue position nets cumulative
/// revenue against cumulative burn and never drops below
/// `-CASH_FLOOR_FRACTION * raise`. The revenue-free position is unbounded.
pub fn cash_projection(metrics: &DerivedMetrics) -> Vec<CashPoint> {
    let raise = metrics.raise_dollars;
    let burn = metrics.monthly_burn();
    let floor = -raise * CASH_FLOOR_FRACTION;

    metrics
        .revenue
        .cumulative_revenue
        .iter()
        .enumerate()
        .map(|(month, &earned)| {
            let cumulative_burn = burn * month as f64;
            CashPoint {
                month,
                cumulative_burn,
                cash_without_revenue: raise - cumulative_burn,
                cash_with_revenue: (raise - (cumulative_burn - earned)).max(floor),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssumptionsBuilder;
    use crate::metrics::calculate_metrics;
    use crate::model::InputAssumptions;

    #[test]
    fn test_one_point_per_month() {
        let metrics = calculate_metrics(&InputAssumptions::default());
        let points = cash_projection(&metrics);

        assert_eq!(points.len(), 25);
        assert_eq!(points[0].cash_without_revenue, 5_000_000.0);
        assert_eq!(points[0].cumulative_burn, 0.0);
        // Month 0 revenue already counts toward cash
        assert!((points[0].cash_with_revenue - 5_002_300.0).abs() < 1e-6);
    }

    #[test]
    fn test_cash_without_revenue_is_linear() {
        let metrics = calculate_metrics(&InputAssumptions::default());
        let burn = metrics.monthly_burn();
        for point in cash_projection(&metrics) {
            let expected = 5_000_000.0 - burn * point.month as f64;
            assert!((point.cash_without_revenue - expected).abs() < 1e-6);
            assert!((point.cumulative_burn - burn * point.month as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn test_with_revenue_floored_at_thirty_percent_of_raise() {
        // No hotels ever, so cash only falls
        let inputs = AssumptionsBuilder::new()
            .raise_millions(1.0)
            .target_hotels(0)
            .hotels_at_start(0)
            .build();
        let metrics = calculate_metrics(&inputs);
        let points = cash_projection(&metrics);

        let last = points.last().unwrap();
        assert!(last.cash_without_revenue < -300_000.0);
        assert_eq!(last.cash_with_revenue, -300_000.0);
        assert!(points.iter().all(|p| p.cash_with_revenue >= -300_000.0));
    }

    #[test]
    fn test_revenue_only_improves_cash() {
        let metrics = calculate_metrics(&InputAssumptions::default());
        assert!(
            cash_projection(&metrics)
                .iter()
                .all(|p| p.cash_with_revenue >= p.cash_without_revenue)
        );
    }
}
