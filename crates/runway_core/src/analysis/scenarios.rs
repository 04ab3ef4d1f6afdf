//! Raise-amount scenarios

use crate::math::safe_div;
use crate::model::ScenarioRow;

/// Raise amounts compared, in millions of dollars
pub const SCENARIO_RAISE_AMOUNTS: [f64; 6] = [3.0, 4.0, 5.0, 6.0, 8.0, 10.0];

/// Minimum runway most seed rounds need to reach the next milestone
pub const SHORT_RUNWAY_MONTHS: f64 = 18.0;
/// Comfortable runway
pub const TARGET_RUNWAY_MONTHS: f64 = 24.0;

/// Runway at each of [`SCENARIO_RAISE_AMOUNTS`] for a fixed monthly burn.
///
/// Burn is held constant across the sweep; a larger raise is not assumed
/// to fund a larger team.
pub fn scenarios(monthly_burn: f64) -> Vec<ScenarioRow> {
    SCENARIO_RAISE_AMOUNTS
        .iter()
        .map(|&raise_amount| {
            let runway = safe_div(raise_amount * 1_000_000.0, monthly_burn);
            ScenarioRow {
                raise_amount,
                monthly_burn,
                runway,
                runway_years: runway / 12.0,
                covers_18_months: runway >= SHORT_RUNWAY_MONTHS,
                covers_24_months: runway >= TARGET_RUNWAY_MONTHS,
            }
        })
        .collect()
}
