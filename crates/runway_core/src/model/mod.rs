mod assumptions;
mod location;
mod results;

pub use assumptions::{
    Compensation, HotelAdoption, InputAssumptions, RaiseAssumptions, RevenueAssumptions,
    RevenueModel, Role, SpendAssumptions, TeamAssumptions,
};
pub use location::{
    CITY_MULTIPLIERS, DEFAULT_CITY_MULTIPLIER, LocationAssumptions, OfficeModel, city_multiplier,
};
pub use results::{
    BudgetCategory, CashPoint, CategoryTotal, CategoryTotals, CostBreakdown, DerivedMetrics, RevenueSeries,
    ScenarioRow, SensitivityPoint,
};
