//! Field-by-field edits
//!
//! Each `--set key=value` edits one field of the assumption record, the
//! same way a form control would. Keys are dotted paths matching the YAML
//! layout.

use std::str::FromStr;

use runway_core::model::InputAssumptions;

use super::ConfigError;

/// Every editable field, in form order
pub const FIELDS: &[&str] = &[
    "raise.amount_millions",
    "raise.runway_months",
    "team.engineers",
    "team.sales_bd",
    "team.product",
    "team.ops",
    "team.founders",
    "compensation.engineer",
    "compensation.sales_bd",
    "compensation.product",
    "compensation.ops",
    "compensation.founder",
    "location.office",
    "location.city",
    "spend.marketing_monthly",
    "spend.infra_monthly",
    "spend.dev_tools_monthly",
    "spend.legal_accounting_annual",
    "spend.travel_monthly",
    "spend.buffer_pct",
    "revenue.model",
    "revenue.monthly_subscription",
    "revenue.commission_pct",
    "revenue.avg_bookings_per_hotel",
    "revenue.avg_booking_value",
    "revenue.avg_length_of_stay",
    "adoption.target_hotels",
    "adoption.hotels_at_start",
    "adoption.months_to_first_revenue",
];

fn parse<T: FromStr>(field: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Set a single field by its dotted key
pub fn set_field(inputs: &mut InputAssumptions, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "raise.amount_millions" => inputs.raise.amount_millions = parse(key, value)?,
        "raise.runway_months" => inputs.raise.runway_months = parse(key, value)?,

        "team.engineers" => inputs.team.engineers = parse(key, value)?,
        "team.sales_bd" => inputs.team.sales_bd = parse(key, value)?,
        "team.product" => inputs.team.product = parse(key, value)?,
        "team.ops" => inputs.team.ops = parse(key, value)?,
        "team.founders" => inputs.team.founders = parse(key, value)?,

        "compensation.engineer" => inputs.compensation.engineer = parse(key, value)?,
        "compensation.sales_bd" => inputs.compensation.sales_bd = parse(key, value)?,
        "compensation.product" => inputs.compensation.product = parse(key, value)?,
        "compensation.ops" => inputs.compensation.ops = parse(key, value)?,
        "compensation.founder" => inputs.compensation.founder = parse(key, value)?,

        // Closed set: unknown keys surface as AssumptionError
        "location.office" => inputs.location.office = value.parse()?,
        "location.city" => inputs.location.city = value.to_string(),

        "spend.marketing_monthly" => inputs.spend.marketing_monthly = parse(key, value)?,
        "spend.infra_monthly" => inputs.spend.infra_monthly = parse(key, value)?,
        "spend.dev_tools_monthly" => inputs.spend.dev_tools_monthly = parse(key, value)?,
        "spend.legal_accounting_annual" => {
            inputs.spend.legal_accounting_annual = parse(key, value)?
        }
        "spend.travel_monthly" => inputs.spend.travel_monthly = parse(key, value)?,
        "spend.buffer_pct" => inputs.spend.buffer_pct = parse(key, value)?,

        "revenue.model" => inputs.revenue.model = value.parse()?,
        "revenue.monthly_subscription" => {
            inputs.revenue.monthly_subscription = parse(key, value)?
        }
        "revenue.commission_pct" => inputs.revenue.commission_pct = parse(key, value)?,
        "revenue.avg_bookings_per_hotel" => {
            inputs.revenue.avg_bookings_per_hotel = parse(key, value)?
        }
        "revenue.avg_booking_value" => inputs.revenue.avg_booking_value = parse(key, value)?,
        "revenue.avg_length_of_stay" => inputs.revenue.avg_length_of_stay = parse(key, value)?,

        "adoption.target_hotels" => inputs.adoption.target_hotels = parse(key, value)?,
        "adoption.hotels_at_start" => inputs.adoption.hotels_at_start = parse(key, value)?,
        "adoption.months_to_first_revenue" => {
            inputs.adoption.months_to_first_revenue = parse(key, value)?
        }

        _ => return Err(ConfigError::UnknownField(key.to_string())),
    }

    tracing::debug!(field = key, value, "Applied override");
    Ok(())
}

/// Apply a `key=value` override
pub fn apply_override(inputs: &mut InputAssumptions, spec: &str) -> Result<(), ConfigError> {
    let (key, value) = spec
        .split_once('=')
        .ok_or_else(|| ConfigError::MalformedOverride(spec.to_string()))?;
    set_field(inputs, key.trim(), value.trim())
}
