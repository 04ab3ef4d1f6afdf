//! Startup runway projection library
//!
//! This crate maps a set of startup operating assumptions to a complete
//! monthly financial projection. It supports:
//! - Burn decomposition (payroll, office, marketing, infra, other, buffer)
//! - Hotel-adoption ramp on a logistic curve
//! - Dual revenue streams (per-property SaaS + per-booking commission)
//! - Runway, breakeven month and summary ratios
//! - Raise-amount scenarios and team-size sensitivity sweeps
//!
//! Every calculation is a pure function of an immutable [`InputAssumptions`]
//! value. Nothing is cached between calls.
//!
//! # Builder DSL
//!
//! ```ignore
//! use runway_core::{AssumptionsBuilder, calculate_metrics};
//! use runway_core::model::OfficeModel;
//!
//! let inputs = AssumptionsBuilder::new()
//!     .raise_millions(6.0)
//!     .runway_months(24)
//!     .engineers(4, 220.0)
//!     .founders(2, 180.0)
//!     .office(OfficeModel::FullyRemote, "Lisbon")
//!     .target_hotels(2_000)
//!     .build();
//!
//! let metrics = calculate_metrics(&inputs);
//! println!("runway: {:.1} months", metrics.actual_runway);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod costs;
pub mod error;
pub mod math;
pub mod metrics;
pub mod revenue;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{cash_projection, category_data, runway_sensitivity, scenarios};
pub use config::AssumptionsBuilder;
pub use metrics::{aggregate, calculate_metrics};
pub use model::{DerivedMetrics, InputAssumptions};
