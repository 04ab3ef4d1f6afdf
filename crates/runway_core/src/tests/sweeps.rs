//! Scenario and sensitivity generators driven by real projections

use super::sample_plans;
use crate::analysis::{SCENARIO_RAISE_AMOUNTS, category_data, runway_sensitivity, scenarios};
use crate::config::AssumptionsBuilder;
use crate::metrics::calculate_metrics;

#[test]
fn test_scenarios_hold_burn_constant() {
    let metrics = calculate_metrics(&AssumptionsBuilder::new().engineers(6, 220.0).build());
    let burn = metrics.monthly_burn();
    let rows = scenarios(burn);

    assert_eq!(rows.len(), SCENARIO_RAISE_AMOUNTS.len());
    for row in &rows {
        // Burn is not re-derived at each raise level
        assert_eq!(row.monthly_burn, burn);
        assert_eq!(row.runway, row.raise_amount * 1e6 / burn);
    }
    assert!(rows.windows(2).all(|w| w[0].runway < w[1].runway));
}

#[test]
fn test_scenario_at_plan_raise_matches_actual_runway() {
    let metrics = calculate_metrics(&AssumptionsBuilder::new().raise_millions(6.0).build());
    let row = scenarios(metrics.monthly_burn())
        .into_iter()
        .find(|r| r.raise_amount == 6.0)
        .unwrap();
    assert!((row.runway - metrics.actual_runway).abs() < 1e-9);
}

#[test]
fn test_sensitivity_decreasing_for_every_plan() {
    for plan in sample_plans() {
        let metrics = calculate_metrics(&plan);
        let points = runway_sensitivity(
            metrics.raise_dollars,
            metrics.monthly_burn(),
            metrics.total_headcount(),
        );
        assert_eq!(points.len(), 25);
        assert!(points.windows(2).all(|w| w[0].runway > w[1].runway));
    }
}

#[test]
fn test_sensitivity_is_linear_not_a_cost_rerun() {
    let base = AssumptionsBuilder::new().build();
    let metrics = calculate_metrics(&base);
    let points = runway_sensitivity(
        metrics.raise_dollars,
        metrics.monthly_burn(),
        metrics.total_headcount(),
    );

    // Doubling the team halves runway in the sweep...
    let at_5 = points.iter().find(|p| p.team_size == 5).unwrap().runway;
    let at_10 = points.iter().find(|p| p.team_size == 10).unwrap().runway;
    assert!((at_5 / at_10 - 2.0).abs() < 1e-9);

    // ...while a full re-run keeps fixed spend fixed and lands higher
    let doubled = calculate_metrics(
        &AssumptionsBuilder::from_inputs(base)
            .engineers(4, 250.0)
            .product(2, 170.0)
            .founders(4, 200.0)
            .build(),
    );
    assert!(doubled.actual_runway > at_10);
}

#[test]
fn test_category_rows_for_every_plan() {
    for plan in sample_plans() {
        let metrics = calculate_metrics(&plan);
        let rows = category_data(&metrics);
        assert_eq!(rows.len(), 6);
        let total: f64 = rows.iter().map(|r| r.value).sum();
        assert!((total - metrics.annual_burn()).abs() < 1e-6 * metrics.annual_burn());
    }
}
