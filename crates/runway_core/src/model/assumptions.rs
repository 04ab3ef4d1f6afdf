//! Input assumptions
//!
//! One immutable record per calculation. The front end builds it from
//! defaults, applies field edits, and hands a fresh value to the engine on
//! every change.
//!
//! Units follow the planning sheet the numbers come from: the raise is in
//! millions, salaries and most spend lines are in thousands, and the
//! per-hotel pricing fields are in plain dollars.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::location::LocationAssumptions;
use crate::error::AssumptionError;

/// Complete assumption set for one projection
///
/// # Conceptual Organization
///
/// **Funding**: `raise` (amount and planned horizon)
///
/// **Costs**: `team`, `compensation`, `location`, `spend`
///
/// **Revenue**: `revenue` (pricing) and `adoption` (hotel ramp)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputAssumptions {
    pub raise: RaiseAssumptions,
    pub team: TeamAssumptions,
    pub compensation: Compensation,
    pub location: LocationAssumptions,
    pub spend: SpendAssumptions,
    pub revenue: RevenueAssumptions,
    pub adoption: HotelAdoption,
}

impl InputAssumptions {
    /// Raise amount in dollars
    #[must_use]
    pub fn raise_dollars(&self) -> f64 {
        self.raise.amount_millions * 1_000_000.0
    }

    /// Apply the revenue-model convention.
    ///
    /// The engine always computes both revenue streams. A SaaS-only plan
    /// has no commission and a commission-only plan has no subscription, so
    /// the irrelevant pricing field is zeroed here instead of branching in
    /// the calculation.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        match self.revenue.model {
            RevenueModel::Saas => self.revenue.commission_pct = 0.0,
            RevenueModel::Commission => self.revenue.monthly_subscription = 0.0,
            RevenueModel::Hybrid => {}
        }
        self
    }
}

/// Funding round and planned horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaiseAssumptions {
    /// Raise amount in millions of dollars
    pub amount_millions: f64,
    /// Planned runway; also the projection horizon
    pub runway_months: u32,
}

impl Default for RaiseAssumptions {
    fn default() -> Self {
        Self {
            amount_millions: 5.0,
            runway_months: 24,
        }
    }
}

/// Team roles, in payroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Engineer,
    SalesBd,
    Product,
    Ops,
    Founder,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Engineer,
        Role::SalesBd,
        Role::Product,
        Role::Ops,
        Role::Founder,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Engineer => "Engineers",
            Role::SalesBd => "Sales / BD",
            Role::Product => "Product",
            Role::Ops => "Ops",
            Role::Founder => "Founders",
        }
    }
}

/// Headcount per role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamAssumptions {
    pub engineers: u32,
    pub sales_bd: u32,
    pub product: u32,
    pub ops: u32,
    pub founders: u32,
}

impl Default for TeamAssumptions {
    fn default() -> Self {
        Self {
            engineers: 2,
            sales_bd: 0,
            product: 1,
            ops: 0,
            founders: 2,
        }
    }
}

impl TeamAssumptions {
    #[must_use]
    pub fn headcount(&self, role: Role) -> u32 {
        match role {
            Role::Engineer => self.engineers,
            Role::SalesBd => self.sales_bd,
            Role::Product => self.product,
            Role::Ops => self.ops,
            Role::Founder => self.founders,
        }
    }

    pub fn set_headcount(&mut self, role: Role, count: u32) {
        match role {
            Role::Engineer => self.engineers = count,
            Role::SalesBd => self.sales_bd = count,
            Role::Product => self.product = count,
            Role::Ops => self.ops = count,
            Role::Founder => self.founders = count,
        }
    }

    /// Total headcount, saturating at `u32::MAX`
    #[must_use]
    pub fn total(&self) -> u32 {
        Role::ALL
            .iter()
            .map(|&role| self.headcount(role))
            .fold(0u32, u32::saturating_add)
    }
}

/// Annual salary per role, in thousands of dollars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compensation {
    pub engineer: f64,
    pub sales_bd: f64,
    pub product: f64,
    pub ops: f64,
    pub founder: f64,
}

impl Default for Compensation {
    fn default() -> Self {
        Self {
            engineer: 250.0,
            sales_bd: 110.0,
            product: 170.0,
            ops: 90.0,
            founder: 200.0,
        }
    }
}

impl Compensation {
    #[must_use]
    pub fn salary(&self, role: Role) -> f64 {
        match role {
            Role::Engineer => self.engineer,
            Role::SalesBd => self.sales_bd,
            Role::Product => self.product,
            Role::Ops => self.ops,
            Role::Founder => self.founder,
        }
    }

    pub fn set_salary(&mut self, role: Role, salary: f64) {
        match role {
            Role::Engineer => self.engineer = salary,
            Role::SalesBd => self.sales_bd = salary,
            Role::Product => self.product = salary,
            Role::Ops => self.ops = salary,
            Role::Founder => self.founder = salary,
        }
    }
}

/// Non-payroll spend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendAssumptions {
    /// Thousands per month
    pub marketing_monthly: f64,
    /// Thousands per month
    pub infra_monthly: f64,
    /// Thousands per month
    pub dev_tools_monthly: f64,
    /// Thousands per year
    pub legal_accounting_annual: f64,
    /// Thousands per month
    pub travel_monthly: f64,
    /// Contingency buffer on top of base burn, in percent
    pub buffer_pct: f64,
}

impl Default for SpendAssumptions {
    fn default() -> Self {
        Self {
            marketing_monthly: 25.0,
            infra_monthly: 10.0,
            dev_tools_monthly: 3.0,
            legal_accounting_annual: 50.0,
            travel_monthly: 8.0,
            buffer_pct: 15.0,
        }
    }
}

/// Which revenue streams the plan relies on
///
/// Only affects presentation and [`InputAssumptions::normalized`]; the
/// engine computes both streams regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueModel {
    Saas,
    Commission,
    #[default]
    Hybrid,
}

impl RevenueModel {
    pub const ALL: [RevenueModel; 3] = [
        RevenueModel::Saas,
        RevenueModel::Commission,
        RevenueModel::Hybrid,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RevenueModel::Saas => "saas",
            RevenueModel::Commission => "commission",
            RevenueModel::Hybrid => "hybrid",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RevenueModel::Saas => "SaaS Subscription per Property",
            RevenueModel::Commission => "Per-Booking Commission",
            RevenueModel::Hybrid => "Hybrid (SaaS + Low Commission)",
        }
    }

    /// Whether the subscription series is displayed
    #[must_use]
    pub fn shows_saas(self) -> bool {
        matches!(self, RevenueModel::Saas | RevenueModel::Hybrid)
    }

    /// Whether the commission series is displayed
    #[must_use]
    pub fn shows_commission(self) -> bool {
        matches!(self, RevenueModel::Commission | RevenueModel::Hybrid)
    }
}

impl fmt::Display for RevenueModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevenueModel {
    type Err = AssumptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RevenueModel::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| AssumptionError::UnknownRevenueModel(s.to_string()))
    }
}

/// Pricing per hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueAssumptions {
    pub model: RevenueModel,
    /// Dollars per property per month
    pub monthly_subscription: f64,
    /// Percent of booking value taken as commission
    pub commission_pct: f64,
    pub avg_bookings_per_hotel: f64,
    /// Nightly rate in dollars
    pub avg_booking_value: f64,
    /// Nights per booking
    pub avg_length_of_stay: f64,
}

impl Default for RevenueAssumptions {
    fn default() -> Self {
        Self {
            model: RevenueModel::Hybrid,
            monthly_subscription: 100.0,
            commission_pct: 2.0,
            avg_bookings_per_hotel: 30.0,
            avg_booking_value: 300.0,
            avg_length_of_stay: 2.0,
        }
    }
}

impl RevenueAssumptions {
    /// Commission earned per hotel per month.
    ///
    /// Booking value is a nightly rate, so length of stay multiplies it.
    #[must_use]
    pub fn commission_per_hotel(&self) -> f64 {
        self.avg_bookings_per_hotel
            * self.avg_booking_value
            * self.avg_length_of_stay
            * (self.commission_pct / 100.0)
    }

    /// Subscription plus commission for one hotel in one month
    #[must_use]
    pub fn revenue_per_hotel(&self) -> f64 {
        self.monthly_subscription + self.commission_per_hotel()
    }
}

/// Hotel acquisition ramp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelAdoption {
    /// Hotels live at the end of the runway
    pub target_hotels: u32,
    /// Hotels live at month 0
    pub hotels_at_start: u32,
    /// Months before the ramp begins
    pub months_to_first_revenue: u32,
}

impl Default for HotelAdoption {
    fn default() -> Self {
        Self {
            target_hotels: 3500,
            hotels_at_start: 5,
            months_to_first_revenue: 3,
        }
    }
}
