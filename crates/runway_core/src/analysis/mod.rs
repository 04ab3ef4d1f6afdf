//! Derived views over a projection
//!
//! Small pure generators that feed comparison tables and charts:
//!
//! - [`category_data`]: the six budget categories in display order
//! - [`scenarios`]: runway at a fixed set of raise amounts
//! - [`runway_sensitivity`]: runway across a range of team sizes
//! - [`cash_projection`]: cash left each month, with and without revenue
//!
//! The sweeps hold burn fixed or rescale it linearly. They are first-order
//! approximations and do not re-run the cost model.
//!
//! ```ignore
//! use runway_core::{calculate_metrics, scenarios, runway_sensitivity};
//!
//! let metrics = calculate_metrics(&inputs);
//! let rows = scenarios(metrics.monthly_burn());
//! let curve = runway_sensitivity(
//!     metrics.raise_dollars,
//!     metrics.monthly_burn(),
//!     metrics.total_headcount(),
//! );
//! ```

mod cash;
mod categories;
mod scenarios;
mod sensitivity;

pub use cash::{CASH_FLOOR_FRACTION, cash_projection};
pub use categories::category_data;
pub use scenarios::{
    SCENARIO_RAISE_AMOUNTS, SHORT_RUNWAY_MONTHS, TARGET_RUNWAY_MONTHS, scenarios,
};
pub use sensitivity::{SENSITIVITY_TEAM_SIZES, runway_sensitivity};
