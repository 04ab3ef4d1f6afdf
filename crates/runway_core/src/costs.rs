//! Cost model
//!
//! Derives the monthly burn decomposition from team, location and spend
//! assumptions. Inputs given in thousands are scaled to dollars here.

use crate::model::{CategoryTotals, CostBreakdown, InputAssumptions, Role};

/// Benefits and payroll tax load applied on top of base salaries
pub const BENEFITS_MULTIPLIER: f64 = 1.25;

const THOUSAND: f64 = 1_000.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly base payroll in dollars, before benefits
pub fn monthly_payroll(inputs: &InputAssumptions) -> f64 {
    let annual_thousands: f64 = Role::ALL
        .iter()
        .map(|&role| f64::from(inputs.team.headcount(role)) * inputs.compensation.salary(role))
        .sum();
    annual_thousands * THOUSAND / MONTHS_PER_YEAR
}

/// Monthly office cost: seat cost x headcount x city multiplier
pub fn monthly_office(inputs: &InputAssumptions) -> f64 {
    inputs.location.office.cost_per_seat()
        * f64::from(inputs.team.total())
        * inputs.location.city_multiplier()
}

/// Compute the full burn decomposition.
///
/// The contingency buffer is reported as its own category so the six
/// category totals add up to `annual_burn`.
pub fn compute_costs(inputs: &InputAssumptions) -> CostBreakdown {
    let spend = &inputs.spend;

    let monthly_payroll = monthly_payroll(inputs);
    let monthly_payroll_loaded = monthly_payroll * BENEFITS_MULTIPLIER;
    let monthly_office = monthly_office(inputs);

    let monthly_marketing = spend.marketing_monthly * THOUSAND;
    let monthly_infra = spend.infra_monthly * THOUSAND;
    let monthly_dev_tools = spend.dev_tools_monthly * THOUSAND;
    let monthly_legal = spend.legal_accounting_annual * THOUSAND / MONTHS_PER_YEAR;
    let monthly_travel = spend.travel_monthly * THOUSAND;
    let monthly_other = monthly_legal + monthly_travel;

    let monthly_burn_base = monthly_payroll_loaded
        + monthly_office
        + monthly_marketing
        + monthly_infra
        + monthly_dev_tools
        + monthly_other;
    let monthly_burn = monthly_burn_base * (1.0 + spend.buffer_pct / 100.0);
    let annual_burn = monthly_burn * MONTHS_PER_YEAR;

    let categories = CategoryTotals {
        people: monthly_payroll_loaded * MONTHS_PER_YEAR,
        office: monthly_office * MONTHS_PER_YEAR,
        marketing: monthly_marketing * MONTHS_PER_YEAR,
        dev: (monthly_infra + monthly_dev_tools) * MONTHS_PER_YEAR,
        other: monthly_other * MONTHS_PER_YEAR,
        buffer: (monthly_burn - monthly_burn_base) * MONTHS_PER_YEAR,
    };

    CostBreakdown {
        total_headcount: inputs.team.total(),
        monthly_payroll,
        monthly_payroll_loaded,
        monthly_office,
        monthly_marketing,
        monthly_infra,
        monthly_dev_tools,
        monthly_legal,
        monthly_travel,
        monthly_other,
        monthly_burn_base,
        monthly_burn,
        annual_burn,
        categories,
    }
}
