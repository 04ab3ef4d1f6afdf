//! Assumption set construction
//!
//! [`InputAssumptions`] can be built field by field, deserialized with serde,
//! or assembled with the fluent builder:
//!
//! ```ignore
//! use runway_core::config::AssumptionsBuilder;
//! use runway_core::model::{OfficeModel, RevenueModel};
//!
//! let inputs = AssumptionsBuilder::new()
//!     .raise_millions(3.0)
//!     .runway_months(18)
//!     .engineers(3, 180.0)
//!     .founders(2, 150.0)
//!     .office(OfficeModel::FullyRemote, "Remote (distributed)")
//!     .revenue_model(RevenueModel::Saas)
//!     .subscription(150.0)
//!     .build();
//! ```
//!
//! [`InputAssumptions`]: crate::model::InputAssumptions

pub mod builder;

pub use builder::AssumptionsBuilder;
