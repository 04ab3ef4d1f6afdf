//! Derived records
//!
//! Output types produced by the cost, revenue and analysis modules. They
//! are recomputed from scratch on every call and carry no identity.

use serde::{Deserialize, Serialize};

/// Budget category in fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    People,
    Office,
    Marketing,
    DevInfra,
    LegalOther,
    Buffer,
}

impl BudgetCategory {
    /// All categories in display order
    pub const ALL: [BudgetCategory; 6] = [
        BudgetCategory::People,
        BudgetCategory::Office,
        BudgetCategory::Marketing,
        BudgetCategory::DevInfra,
        BudgetCategory::LegalOther,
        BudgetCategory::Buffer,
    ];

    /// Get a display label for the category
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::People => "People (salaries + benefits)",
            Self::Office => "Office & Location",
            Self::Marketing => "Marketing & Growth",
            Self::DevInfra => "Dev & Infrastructure",
            Self::LegalOther => "Legal / Travel / Other",
            Self::Buffer => "Contingency Buffer",
        }
    }
}

/// Annualized total per budget category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub people: f64,
    pub office: f64,
    pub marketing: f64,
    pub dev: f64,
    pub other: f64,
    /// Contingency on top of base burn, kept visible so the totals sum to
    /// annual burn
    pub buffer: f64,
}

impl CategoryTotals {
    #[must_use]
    pub fn get(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::People => self.people,
            BudgetCategory::Office => self.office,
            BudgetCategory::Marketing => self.marketing,
            BudgetCategory::DevInfra => self.dev,
            BudgetCategory::LegalOther => self.other,
            BudgetCategory::Buffer => self.buffer,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        BudgetCategory::ALL.iter().map(|&c| self.get(c)).sum()
    }
}

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: BudgetCategory,
    pub name: String,
    /// Annual dollars
    pub value: f64,
}

/// Monthly burn decomposition, all figures in dollars
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub total_headcount: u32,
    pub monthly_payroll: f64,
    /// Payroll including benefits and payroll taxes
    pub monthly_payroll_loaded: f64,
    pub monthly_office: f64,
    pub monthly_marketing: f64,
    pub monthly_infra: f64,
    pub monthly_dev_tools: f64,
    pub monthly_legal: f64,
    pub monthly_travel: f64,
    /// Legal plus travel
    pub monthly_other: f64,
    /// Burn before the contingency buffer
    pub monthly_burn_base: f64,
    pub monthly_burn: f64,
    pub annual_burn: f64,
    pub categories: CategoryTotals,
}

impl CostBreakdown {
    /// Monthly contingency amount
    #[must_use]
    pub fn monthly_buffer(&self) -> f64 {
        self.monthly_burn - self.monthly_burn_base
    }
}

/// Month-by-month revenue projection over months `0..=runway_months`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    pub hotels_by_month: Vec<u32>,
    pub saas_by_month: Vec<f64>,
    pub commission_by_month: Vec<f64>,
    pub monthly_revenue: Vec<f64>,
    pub cumulative_revenue: Vec<f64>,

    /// Final month of the ramp, annualized
    pub annual_saas: f64,
    /// Final month of the ramp, annualized
    pub annual_commission: f64,
    /// Annual recurring revenue at exit (`annual_saas + annual_commission`)
    pub arr: f64,

    /// Steady state at `target_hotels`, independent of the ramp
    pub target_annual_saas: f64,
    /// Steady state at `target_hotels`, independent of the ramp
    pub target_annual_commission: f64,
    pub target_annual_revenue: f64,
}

impl RevenueSeries {
    /// Number of months in the projection, including month 0
    #[must_use]
    pub fn len(&self) -> usize {
        self.monthly_revenue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monthly_revenue.is_empty()
    }

    /// Total revenue over the whole horizon
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cumulative_revenue.last().copied().unwrap_or(0.0)
    }
}

/// Everything derived from one assumption set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub raise_dollars: f64,
    pub costs: CostBreakdown,
    pub revenue: RevenueSeries,

    /// Cash needed to cover the planned runway at current burn
    pub total_needed: f64,
    /// `raise_dollars - total_needed`; negative is a deficit
    pub surplus: f64,
    /// Months the raise lasts at current burn
    pub actual_runway: f64,
    /// First month where revenue covers burn
    pub breakeven_month: Option<usize>,

    pub people_pct: f64,
    pub eng_ratio: f64,
    pub marketing_pct: f64,
    /// Steady-state revenue per hotel per month
    pub avg_monthly_revenue_per_hotel: f64,
    /// `avg_monthly_revenue_per_hotel * 12`
    pub annual_revenue_per_hotel: f64,
    /// Exit ARR per head; 0.0 for an empty team
    pub revenue_per_employee: f64,
}

impl DerivedMetrics {
    #[must_use]
    pub fn monthly_burn(&self) -> f64 {
        self.costs.monthly_burn
    }

    #[must_use]
    pub fn annual_burn(&self) -> f64 {
        self.costs.annual_burn
    }

    #[must_use]
    pub fn total_headcount(&self) -> u32 {
        self.costs.total_headcount
    }
}

/// One row of the raise-amount comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    /// Millions of dollars
    pub raise_amount: f64,
    pub monthly_burn: f64,
    pub runway: f64,
    pub runway_years: f64,
    pub covers_18_months: bool,
    pub covers_24_months: bool,
}

/// Cash position at the end of one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashPoint {
    pub month: usize,
    /// `monthly_burn * month`
    pub cumulative_burn: f64,
    /// Raise minus cumulative burn, ignoring revenue
    pub cash_without_revenue: f64,
    /// Raise minus net burn, floored at a fraction of the raise
    pub cash_with_revenue: f64,
}

/// One point of the team-size sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub team_size: u32,
    pub runway: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_totals_sum() {
        let totals = CategoryTotals {
            people: 1.0,
            office: 2.0,
            marketing: 3.0,
            dev: 4.0,
            other: 5.0,
            buffer: 6.0,
        };
        assert_eq!(totals.total(), 21.0);
        assert_eq!(totals.get(BudgetCategory::DevInfra), 4.0);
    }

    #[test]
    fn test_category_order_and_labels() {
        let labels: Vec<_> = BudgetCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels[0], "People (salaries + benefits)");
        assert_eq!(labels[5], "Contingency Buffer");
    }

    #[test]
    fn test_empty_series_total() {
        assert_eq!(RevenueSeries::default().total(), 0.0);
        assert!(RevenueSeries::default().is_empty());
    }
}
