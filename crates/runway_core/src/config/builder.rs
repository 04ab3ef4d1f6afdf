//! Assumptions Builder
//!
//! Fluent API over [`InputAssumptions`]. Starts from the default plan and
//! overrides only what is named.

use crate::model::{InputAssumptions, OfficeModel, RevenueModel, Role};

/// Builder for an assumption set
#[derive(Debug, Clone, Default)]
pub struct AssumptionsBuilder {
    inputs: InputAssumptions,
}

impl AssumptionsBuilder {
    /// Start from the default plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing assumption set
    #[must_use]
    pub fn from_inputs(inputs: InputAssumptions) -> Self {
        Self { inputs }
    }

    // ========================================================================
    // Raise
    // ========================================================================

    #[must_use]
    pub fn raise_millions(mut self, amount: f64) -> Self {
        self.inputs.raise.amount_millions = amount;
        self
    }

    #[must_use]
    pub fn runway_months(mut self, months: u32) -> Self {
        self.inputs.raise.runway_months = months;
        self
    }

    // ========================================================================
    // Team
    // ========================================================================

    /// Set headcount and annual salary (thousands) for a role
    #[must_use]
    pub fn role(mut self, role: Role, headcount: u32, salary_thousands: f64) -> Self {
        self.inputs.team.set_headcount(role, headcount);
        self.inputs.compensation.set_salary(role, salary_thousands);
        self
    }

    #[must_use]
    pub fn engineers(self, headcount: u32, salary_thousands: f64) -> Self {
        self.role(Role::Engineer, headcount, salary_thousands)
    }

    #[must_use]
    pub fn sales_bd(self, headcount: u32, salary_thousands: f64) -> Self {
        self.role(Role::SalesBd, headcount, salary_thousands)
    }

    #[must_use]
    pub fn product(self, headcount: u32, salary_thousands: f64) -> Self {
        self.role(Role::Product, headcount, salary_thousands)
    }

    #[must_use]
    pub fn ops(self, headcount: u32, salary_thousands: f64) -> Self {
        self.role(Role::Ops, headcount, salary_thousands)
    }

    #[must_use]
    pub fn founders(self, headcount: u32, salary_thousands: f64) -> Self {
        self.role(Role::Founder, headcount, salary_thousands)
    }

    /// Remove every role from the team
    #[must_use]
    pub fn no_team(mut self) -> Self {
        for role in Role::ALL {
            self.inputs.team.set_headcount(role, 0);
        }
        self
    }

    // ========================================================================
    // Location and spend
    // ========================================================================

    #[must_use]
    pub fn office(mut self, office: OfficeModel, city: impl Into<String>) -> Self {
        self.inputs.location.office = office;
        self.inputs.location.city = city.into();
        self
    }

    /// Marketing spend, thousands per month
    #[must_use]
    pub fn marketing(mut self, thousands_per_month: f64) -> Self {
        self.inputs.spend.marketing_monthly = thousands_per_month;
        self
    }

    /// Infrastructure and dev tooling, thousands per month
    #[must_use]
    pub fn infra(mut self, infra: f64, dev_tools: f64) -> Self {
        self.inputs.spend.infra_monthly = infra;
        self.inputs.spend.dev_tools_monthly = dev_tools;
        self
    }

    /// Legal (thousands per year) and travel (thousands per month)
    #[must_use]
    pub fn other_costs(mut self, legal_annual: f64, travel_monthly: f64) -> Self {
        self.inputs.spend.legal_accounting_annual = legal_annual;
        self.inputs.spend.travel_monthly = travel_monthly;
        self
    }

    #[must_use]
    pub fn buffer_pct(mut self, pct: f64) -> Self {
        self.inputs.spend.buffer_pct = pct;
        self
    }

    /// Zero every non-payroll spend line and the buffer
    #[must_use]
    pub fn no_spend(self) -> Self {
        self.marketing(0.0)
            .infra(0.0, 0.0)
            .other_costs(0.0, 0.0)
            .buffer_pct(0.0)
    }

    // ========================================================================
    // Revenue
    // ========================================================================

    #[must_use]
    pub fn revenue_model(mut self, model: RevenueModel) -> Self {
        self.inputs.revenue.model = model;
        self
    }

    /// Subscription in dollars per property per month
    #[must_use]
    pub fn subscription(mut self, dollars: f64) -> Self {
        self.inputs.revenue.monthly_subscription = dollars;
        self
    }

    #[must_use]
    pub fn commission_pct(mut self, pct: f64) -> Self {
        self.inputs.revenue.commission_pct = pct;
        self
    }

    /// Booking volume and value: bookings per hotel per month, nightly rate,
    /// nights per stay
    #[must_use]
    pub fn bookings(mut self, per_hotel: f64, nightly_value: f64, nights: f64) -> Self {
        self.inputs.revenue.avg_bookings_per_hotel = per_hotel;
        self.inputs.revenue.avg_booking_value = nightly_value;
        self.inputs.revenue.avg_length_of_stay = nights;
        self
    }

    // ========================================================================
    // Adoption
    // ========================================================================

    #[must_use]
    pub fn target_hotels(mut self, hotels: u32) -> Self {
        self.inputs.adoption.target_hotels = hotels;
        self
    }

    #[must_use]
    pub fn hotels_at_start(mut self, hotels: u32) -> Self {
        self.inputs.adoption.hotels_at_start = hotels;
        self
    }

    #[must_use]
    pub fn months_to_first_revenue(mut self, months: u32) -> Self {
        self.inputs.adoption.months_to_first_revenue = months;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> InputAssumptions {
        self.inputs
    }
}
