//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `reference_plan` - Hand-checked figures for the default plan
//! - `properties` - Invariants checked across a spread of assumption sets
//! - `edge_cases` - Zero guards, empty ramp windows, short horizons
//! - `sweeps` - Scenario and sensitivity generators against the engine

mod sweeps;

use crate::config::AssumptionsBuilder;
use crate::model::{InputAssumptions, OfficeModel, RevenueModel};

/// A spread of plans covering every office model, revenue model and a
/// range of horizons and ramp offsets
fn sample_plans() -> Vec<InputAssumptions> {
    let mut plans = vec![InputAssumptions::default()];
    for (i, office) in OfficeModel::ALL.into_iter().enumerate() {
        for (j, model) in RevenueModel::ALL.into_iter().enumerate() {
            let horizon = 12 + 6 * (i as u32) + 2 * (j as u32);
            plans.push(
                AssumptionsBuilder::new()
                    .raise_millions(2.5 + i as f64 * 3.0)
                    .runway_months(horizon)
                    .engineers(2 + j as u32 * 3, 180.0 + 20.0 * i as f64)
                    .sales_bd(i as u32, 120.0)
                    .office(office, ["Austin", "Berlin", "Nowhere"][j])
                    .revenue_model(model)
                    .target_hotels(500 + 1_500 * j as u32)
                    .hotels_at_start(5 * i as u32)
                    .months_to_first_revenue(1 + i as u32 * 2)
                    .buffer_pct(10.0 + 5.0 * j as f64)
                    .build()
                    .normalized(),
            );
        }
    }
    plans
}
