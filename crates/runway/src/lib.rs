//! Command-line front end for the runway projection engine
//!
//! Holds the mutable assumption record, loads it from YAML, applies
//! field-by-field overrides, and renders every view the engine produces:
//! - Burn decomposition and budget categories
//! - Monthly hotel ramp and revenue table
//! - Raise-amount scenarios and team-size sensitivity
//! - Threshold-based recommendations

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod logging;
pub mod recommendations;
pub mod report;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ConfigError, load_assumptions};
pub use logging::init_logging;
pub use recommendations::{Recommendation, RecommendationKind, generate_recommendations};
