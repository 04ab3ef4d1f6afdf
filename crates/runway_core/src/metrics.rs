//! Metrics aggregation
//!
//! Combines the cost and revenue models into the full [`DerivedMetrics`]
//! record. [`calculate_metrics`] is the single entry point for a projection.

use crate::costs::compute_costs;
use crate::math::{percent_of, safe_div};
use crate::model::{CostBreakdown, DerivedMetrics, InputAssumptions, RevenueSeries};
use crate::revenue::compute_revenue;

const MONTHS_PER_YEAR: f64 = 12.0;

/// First month whose revenue meets or exceeds `monthly_burn`.
///
/// Later dips below burn are not reconsidered.
pub fn breakeven_month(monthly_revenue: &[f64], monthly_burn: f64) -> Option<usize> {
    monthly_revenue
        .iter()
        .position(|&revenue| revenue >= monthly_burn)
}

/// Combine cost and revenue projections into the derived metrics
pub fn aggregate(
    costs: CostBreakdown,
    revenue: RevenueSeries,
    inputs: &InputAssumptions,
) -> DerivedMetrics {
    let raise_dollars = inputs.raise_dollars();
    let monthly_burn = costs.monthly_burn;

    let total_needed = monthly_burn * f64::from(inputs.raise.runway_months);
    let actual_runway = safe_div(raise_dollars, monthly_burn);
    let breakeven_month = breakeven_month(&revenue.monthly_revenue, monthly_burn);

    let people_pct = percent_of(costs.categories.people, costs.annual_burn);
    let marketing_pct = percent_of(costs.categories.marketing, costs.annual_burn);
    let avg_monthly_revenue_per_hotel = inputs.revenue.revenue_per_hotel();
    let eng_ratio = percent_of(
        f64::from(inputs.team.engineers),
        f64::from(costs.total_headcount),
    );

    DerivedMetrics {
        raise_dollars,
        total_needed,
        surplus: raise_dollars - total_needed,
        actual_runway,
        breakeven_month,
        people_pct,
        eng_ratio,
        marketing_pct,
        avg_monthly_revenue_per_hotel,
        annual_revenue_per_hotel: avg_monthly_revenue_per_hotel * MONTHS_PER_YEAR,
        revenue_per_employee: safe_div(revenue.arr, f64::from(costs.total_headcount)),
        costs,
        revenue,
    }
}

/// Run a full projection for one assumption set.
///
/// Total and deterministic: every call recomputes everything from `inputs`.
pub fn calculate_metrics(inputs: &InputAssumptions) -> DerivedMetrics {
    let costs = compute_costs(inputs);
    let revenue = compute_revenue(inputs);
    let metrics = aggregate(costs, revenue, inputs);

    tracing::debug!(
        monthly_burn = metrics.costs.monthly_burn,
        actual_runway = metrics.actual_runway,
        breakeven_month = ?metrics.breakeven_month,
        arr = metrics.revenue.arr,
        "projection recomputed"
    );

    metrics
}
