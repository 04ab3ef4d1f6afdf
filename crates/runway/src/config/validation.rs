use runway_core::model::{InputAssumptions, Role};

use super::ConfigError;

/// Longest projection horizon accepted at the boundary
pub const MAX_RUNWAY_MONTHS: u32 = 120;

/// Largest total team accepted at the boundary
pub const MAX_TEAM_SIZE: u32 = 10_000;

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate that a monetary or rate input is a finite, non-negative number
fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(invalid(field, "Value must be a finite number"));
    }
    if value < 0.0 {
        return Err(invalid(field, format!("Value cannot be negative ({value})")));
    }
    Ok(())
}

/// Validate an assumption set before it reaches the engine.
///
/// The engine trusts its inputs, so this is where negative spend or a
/// runaway horizon is caught.
pub fn validate_assumptions(inputs: &InputAssumptions) -> Result<(), ConfigError> {
    non_negative("raise.amount_millions", inputs.raise.amount_millions)?;

    if inputs.raise.runway_months > MAX_RUNWAY_MONTHS {
        return Err(invalid(
            "raise.runway_months",
            format!("Runway cannot exceed {MAX_RUNWAY_MONTHS} months"),
        ));
    }

    if inputs.team.total() > MAX_TEAM_SIZE {
        return Err(invalid(
            "team",
            format!("Total headcount cannot exceed {MAX_TEAM_SIZE}"),
        ));
    }

    for role in Role::ALL {
        non_negative(
            &format!("compensation.{}", role_key(role)),
            inputs.compensation.salary(role),
        )?;
    }

    let spend = &inputs.spend;
    non_negative("spend.marketing_monthly", spend.marketing_monthly)?;
    non_negative("spend.infra_monthly", spend.infra_monthly)?;
    non_negative("spend.dev_tools_monthly", spend.dev_tools_monthly)?;
    non_negative("spend.legal_accounting_annual", spend.legal_accounting_annual)?;
    non_negative("spend.travel_monthly", spend.travel_monthly)?;
    non_negative("spend.buffer_pct", spend.buffer_pct)?;

    let revenue = &inputs.revenue;
    non_negative("revenue.monthly_subscription", revenue.monthly_subscription)?;
    non_negative("revenue.commission_pct", revenue.commission_pct)?;
    non_negative("revenue.avg_bookings_per_hotel", revenue.avg_bookings_per_hotel)?;
    non_negative("revenue.avg_booking_value", revenue.avg_booking_value)?;
    non_negative("revenue.avg_length_of_stay", revenue.avg_length_of_stay)?;

    if revenue.commission_pct > 100.0 {
        return Err(invalid(
            "revenue.commission_pct",
            "Commission cannot exceed 100%",
        ));
    }

    Ok(())
}

fn role_key(role: Role) -> &'static str {
    match role {
        Role::Engineer => "engineer",
        Role::SalesBd => "sales_bd",
        Role::Product => "product",
        Role::Ops => "ops",
        Role::Founder => "founder",
    }
}
