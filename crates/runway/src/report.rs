//! Plain-text rendering of every projection view
//!
//! Each renderer writes into any [`std::fmt::Write`] sink so the binary can
//! print to stdout and tests can render into a `String`.

use std::fmt::{self, Write};

use runway_core::model::{
    CITY_MULTIPLIERS, CashPoint, CategoryTotal, DerivedMetrics, InputAssumptions, OfficeModel,
    Role, ScenarioRow, SensitivityPoint,
};

use crate::recommendations::Recommendation;
use crate::util::format::{
    format_compact_currency, format_count, format_currency, format_months, format_percent,
};

const LABEL_WIDTH: usize = 28;

/// Label padded to the column, always followed by at least one space
fn line(out: &mut impl Write, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(out, "  {label:<LABEL_WIDTH$} {value}")
}

/// Headline figures, burn breakdown, revenue ramp and ratios
pub fn render_projection(
    out: &mut impl Write,
    inputs: &InputAssumptions,
    metrics: &DerivedMetrics,
) -> fmt::Result {
    let costs = &metrics.costs;

    writeln!(out, "Runway projection")?;
    line(out, "Raise", format_compact_currency(metrics.raise_dollars))?;
    line(
        out,
        "Planned runway",
        format!("{} months", inputs.raise.runway_months),
    )?;
    line(out, "Monthly burn", format_currency(costs.monthly_burn))?;
    line(out, "Annual burn", format_compact_currency(costs.annual_burn))?;
    line(out, "Actual runway", format_months(metrics.actual_runway))?;
    line(
        out,
        "Needed for planned runway",
        format_compact_currency(metrics.total_needed),
    )?;
    let surplus_label = if metrics.surplus < 0.0 {
        "Deficit"
    } else {
        "Surplus"
    };
    line(out, surplus_label, format_currency(metrics.surplus.abs()))?;
    line(
        out,
        "Team",
        format!(
            "{} ({} engineering)",
            costs.total_headcount,
            format_percent(metrics.eng_ratio)
        ),
    )?;
    writeln!(out)?;

    render_team(out, inputs)?;
    writeln!(out)?;

    writeln!(out, "Monthly burn breakdown")?;
    line(out, "Payroll", format_currency(costs.monthly_payroll))?;
    line(
        out,
        "Payroll (loaded)",
        format_currency(costs.monthly_payroll_loaded),
    )?;
    line(
        out,
        format!(
            "{} in {}",
            inputs.location.office.label(),
            inputs.location.city
        )
        .as_str(),
        format_currency(costs.monthly_office),
    )?;
    line(out, "Marketing", format_currency(costs.monthly_marketing))?;
    line(out, "Infrastructure", format_currency(costs.monthly_infra))?;
    line(out, "Dev tools", format_currency(costs.monthly_dev_tools))?;
    line(out, "Legal / accounting", format_currency(costs.monthly_legal))?;
    line(out, "Travel / events", format_currency(costs.monthly_travel))?;
    line(out, "Base burn", format_currency(costs.monthly_burn_base))?;
    line(
        out,
        format!("Buffer ({}%)", inputs.spend.buffer_pct).as_str(),
        format_currency(costs.monthly_buffer()),
    )?;
    writeln!(out)?;

    render_revenue(out, inputs, metrics)?;
    writeln!(out)?;

    writeln!(out, "Ratios")?;
    line(out, "People % of burn", format_percent(metrics.people_pct))?;
    line(out, "Marketing % of burn", format_percent(metrics.marketing_pct))?;
    line(out, "Engineering % of team", format_percent(metrics.eng_ratio))?;
    writeln!(out)?;

    writeln!(out, "Unit economics")?;
    line(
        out,
        "Revenue per hotel (monthly)",
        format_currency(metrics.avg_monthly_revenue_per_hotel),
    )?;
    line(
        out,
        "Revenue per hotel (annual)",
        format_currency(metrics.annual_revenue_per_hotel),
    )?;
    if metrics.total_headcount() == 0 {
        line(out, "ARR per employee", "N/A")
    } else {
        line(
            out,
            "ARR per employee",
            format_compact_currency(metrics.revenue_per_employee),
        )
    }
}

/// Headcount and salary per role
fn render_team(out: &mut impl Write, inputs: &InputAssumptions) -> fmt::Result {
    writeln!(out, "Team by role")?;
    for role in Role::ALL {
        let headcount = inputs.team.headcount(role);
        if headcount == 0 {
            continue;
        }
        line(
            out,
            role.label(),
            format!(
                "{} x {}",
                format_count(headcount),
                format_currency(inputs.compensation.salary(role) * 1_000.0)
            ),
        )?;
    }
    Ok(())
}

/// Month-by-month ramp table plus exit figures
pub fn render_revenue(
    out: &mut impl Write,
    inputs: &InputAssumptions,
    metrics: &DerivedMetrics,
) -> fmt::Result {
    let model = inputs.revenue.model;
    let revenue = &metrics.revenue;

    writeln!(out, "Revenue ({})", model.label())?;
    write!(out, "  {:>5}  {:>7}", "Month", "Hotels")?;
    if model.shows_saas() {
        write!(out, "  {:>12}", "SaaS")?;
    }
    if model.shows_commission() {
        write!(out, "  {:>12}", "Commission")?;
    }
    writeln!(out, "  {:>12}  {:>12}", "Total", "Cumulative")?;

    for month in 0..revenue.len() {
        let marker = if metrics.breakeven_month == Some(month) {
            " <- breakeven"
        } else {
            ""
        };
        write!(
            out,
            "  {:>5}  {:>7}",
            month,
            format_count(revenue.hotels_by_month[month])
        )?;
        if model.shows_saas() {
            write!(
                out,
                "  {:>12}",
                format_currency(revenue.saas_by_month[month])
            )?;
        }
        if model.shows_commission() {
            write!(
                out,
                "  {:>12}",
                format_currency(revenue.commission_by_month[month])
            )?;
        }
        writeln!(
            out,
            "  {:>12}  {:>12}{marker}",
            format_currency(revenue.monthly_revenue[month]),
            format_compact_currency(revenue.cumulative_revenue[month])
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Exit")?;
    line(out, "ARR at exit", format_compact_currency(revenue.arr))?;
    if model.shows_saas() {
        line(out, "  SaaS", format_compact_currency(revenue.annual_saas))?;
    }
    if model.shows_commission() {
        line(
            out,
            "  Commission",
            format_compact_currency(revenue.annual_commission),
        )?;
    }
    line(
        out,
        format!("Steady state at {} hotels", format_count(inputs.adoption.target_hotels)).as_str(),
        format_compact_currency(revenue.target_annual_revenue),
    )?;
    line(
        out,
        "Revenue over horizon",
        format_compact_currency(revenue.total()),
    )?;
    match metrics.breakeven_month {
        Some(month) => line(out, "Breakeven", format!("month {month}")),
        None => line(out, "Breakeven", "not within horizon"),
    }
}

/// Budget categories with their share of annual burn
pub fn render_categories(
    out: &mut impl Write,
    rows: &[CategoryTotal],
    annual_burn: f64,
) -> fmt::Result {
    writeln!(out, "Budget categories (annual)")?;
    for row in rows {
        let share = if annual_burn > 0.0 {
            row.value / annual_burn * 100.0
        } else {
            0.0
        };
        writeln!(
            out,
            "  {:<LABEL_WIDTH$} {:>12}  {:>4}",
            row.name,
            format_compact_currency(row.value),
            format_percent(share)
        )?;
    }
    Ok(())
}

/// Cash left each month, with and without revenue
pub fn render_cash(out: &mut impl Write, points: &[CashPoint]) -> fmt::Result {
    writeln!(out, "Cash runway")?;
    writeln!(
        out,
        "  {:>5}  {:>12}  {:>14}  {:>14}",
        "Month", "Burned", "No revenue", "With revenue"
    )?;
    for point in points {
        writeln!(
            out,
            "  {:>5}  {:>12}  {:>14}  {:>14}",
            point.month,
            format_compact_currency(point.cumulative_burn),
            format_compact_currency(point.cash_without_revenue),
            format_compact_currency(point.cash_with_revenue)
        )?;
    }
    Ok(())
}

/// Raise-amount comparison table
pub fn render_scenarios(out: &mut impl Write, rows: &[ScenarioRow]) -> fmt::Result {
    let check = |ok: bool| if ok { "yes" } else { "no" };

    writeln!(out, "Raise scenarios (burn held constant)")?;
    writeln!(
        out,
        "  {:>7}  {:>12}  {:>9}  {:>6}  {:>5}  {:>5}",
        "Raise", "Burn/mo", "Runway", "Years", "18mo", "24mo"
    )?;
    for row in rows {
        writeln!(
            out,
            "  {:>7}  {:>12}  {:>9}  {:>6.1}  {:>5}  {:>5}",
            format!("${}M", row.raise_amount),
            format_currency(row.monthly_burn),
            format_months(row.runway),
            row.runway_years,
            check(row.covers_18_months),
            check(row.covers_24_months)
        )?;
    }
    Ok(())
}

/// Team-size sensitivity table, marking the current team size
pub fn render_sensitivity(
    out: &mut impl Write,
    points: &[SensitivityPoint],
    current_headcount: u32,
) -> fmt::Result {
    writeln!(out, "Runway by team size (burn scaled linearly)")?;
    writeln!(out, "  {:>4}  {:>9}", "Team", "Runway")?;
    for point in points {
        let marker = if point.team_size == current_headcount {
            " <- current"
        } else {
            ""
        };
        writeln!(
            out,
            "  {:>4}  {:>9}{marker}",
            point.team_size,
            format_months(point.runway)
        )?;
    }
    Ok(())
}

pub fn render_recommendations(out: &mut impl Write, recs: &[Recommendation]) -> fmt::Result {
    writeln!(out, "Recommendations")?;
    for rec in recs {
        writeln!(out, "  [{}] {}", rec.kind.tag(), rec.title)?;
        writeln!(out, "      {}", rec.message)?;
    }
    Ok(())
}

/// City multiplier table and office seat costs
pub fn render_cities(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "Office cost per seat (monthly)")?;
    for office in OfficeModel::ALL {
        line(
            out,
            &format!("{} ({})", office.label(), office.as_str()),
            format_currency(office.cost_per_seat()),
        )?;
    }
    writeln!(out)?;
    writeln!(out, "City multipliers (unknown cities use 1.00)")?;
    for (city, multiplier) in CITY_MULTIPLIERS {
        line(out, city, format!("{multiplier:.2}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_core::config::AssumptionsBuilder;
    use runway_core::model::RevenueModel;
    use runway_core::{
        calculate_metrics, cash_projection, category_data, runway_sensitivity, scenarios,
    };

    #[test]
    fn test_projection_report() {
        let inputs = InputAssumptions::default();
        let metrics = calculate_metrics(&inputs);
        let mut out = String::new();
        render_projection(&mut out, &inputs, &metrics).unwrap();

        assert!(out.contains("Monthly burn"));
        assert!(out.contains("$190,526"));
        assert!(out.contains("26.2 mo"));
        assert!(out.contains("Surplus"));
        assert!(out.contains("<- breakeven"));
        assert!(out.contains("Hybrid (flex space) in San Francisco $4,050"));
        assert!(out.contains("Engineers"));
        assert!(!out.contains("Sales / BD"));
        assert!(out.contains("$5,520"));
        assert!(out.contains("$3.86M"));
        // One table row per month
        assert!(out.matches("\n  ").count() > 25);
    }

    #[test]
    fn test_revenue_columns_follow_model() {
        let inputs = AssumptionsBuilder::new()
            .revenue_model(RevenueModel::Saas)
            .build()
            .normalized();
        let metrics = calculate_metrics(&inputs);
        let mut out = String::new();
        render_revenue(&mut out, &inputs, &metrics).unwrap();

        assert!(out.contains("SaaS"));
        assert!(!out.contains("Commission"));
    }

    #[test]
    fn test_long_labels_keep_a_gap() {
        let inputs = InputAssumptions::default();
        let metrics = calculate_metrics(&inputs);
        let mut out = String::new();
        render_revenue(&mut out, &inputs, &metrics).unwrap();
        assert!(out.contains("Steady state at 3,500 hotels $19.32M"));

        let mut out = String::new();
        line(&mut out, &"x".repeat(40), "$1").unwrap();
        assert!(out.ends_with(" $1\n"));
    }

    #[test]
    fn test_empty_team_has_no_arr_per_employee() {
        let inputs = AssumptionsBuilder::new().no_team().build();
        let metrics = calculate_metrics(&inputs);
        let mut out = String::new();
        render_projection(&mut out, &inputs, &metrics).unwrap();
        assert!(out.contains("N/A"));
    }

    #[test]
    fn test_cash_table() {
        let inputs = AssumptionsBuilder::new()
            .raise_millions(1.0)
            .target_hotels(0)
            .hotels_at_start(0)
            .build();
        let metrics = calculate_metrics(&inputs);
        let mut out = String::new();
        render_cash(&mut out, &cash_projection(&metrics)).unwrap();

        assert!(out.contains("With revenue"));
        // 25 months plus two header lines
        assert_eq!(out.lines().count(), 27);
        assert!(out.contains("-$300.0K"));
    }

    #[test]
    fn test_deficit_label() {
        let inputs = AssumptionsBuilder::new().raise_millions(2.0).build();
        let metrics = calculate_metrics(&inputs);
        let mut out = String::new();
        render_projection(&mut out, &inputs, &metrics).unwrap();
        assert!(out.contains("Deficit"));
    }

    #[test]
    fn test_categories_table() {
        let metrics = calculate_metrics(&InputAssumptions::default());
        let mut out = String::new();
        render_categories(&mut out, &category_data(&metrics), metrics.annual_burn()).unwrap();

        assert!(out.contains("People (salaries + benefits)"));
        assert!(out.contains("$1.34M"));
        assert!(out.contains("Contingency Buffer"));
    }

    #[test]
    fn test_scenarios_table() {
        let mut out = String::new();
        render_scenarios(&mut out, &scenarios(200_000.0)).unwrap();
        assert!(out.contains("$3M"));
        assert!(out.contains("15.0 mo"));
        assert!(out.contains("$10M"));
        assert!(out.contains("50.0 mo"));
    }

    #[test]
    fn test_sensitivity_marks_current_team() {
        let points = runway_sensitivity(5_000_000.0, 200_000.0, 8);
        let mut out = String::new();
        render_sensitivity(&mut out, &points, 8).unwrap();
        assert_eq!(out.matches("<- current").count(), 1);
    }

    #[test]
    fn test_cities_table() {
        let mut out = String::new();
        render_cities(&mut out).unwrap();
        assert!(out.contains("dedicated_office"));
        assert!(out.contains("Tel Aviv"));
        assert!(out.contains("0.75"));
    }
}
