//! Assumption files, field overrides and boundary validation
//!
//! An assumption file is YAML with the same sections as
//! [`InputAssumptions`]. Every section is optional; missing fields keep
//! the default plan's values:
//!
//! ```yaml
//! raise:
//!   amount_millions: 6
//! team:
//!   engineers: 4
//! location:
//!   office: fully_remote
//!   city: Lisbon
//! ```

use std::path::{Path, PathBuf};

use runway_core::error::AssumptionError;
use runway_core::model::InputAssumptions;

mod overrides;
mod validation;

pub use overrides::{FIELDS, apply_override, set_field};
pub use validation::{MAX_RUNWAY_MONTHS, MAX_TEAM_SIZE, validate_assumptions};

/// Errors from loading, editing or validating an assumption set
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse assumptions YAML: {0}")]
    Parse(String),

    #[error("Failed to serialize assumptions: {0}")]
    Serialize(String),

    #[error("Unknown assumption field: {0}")]
    UnknownField(String),

    #[error("Override must look like key=value, got '{0}'")]
    MalformedOverride(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },

    #[error(transparent)]
    Assumption(#[from] AssumptionError),

    #[error("Invalid parameter: {field} - {message}")]
    Invalid { field: String, message: String },
}

/// Parse an assumption set from YAML, overlaying the default plan
pub fn from_yaml(yaml: &str) -> Result<InputAssumptions, ConfigError> {
    serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Serialize an assumption set to YAML
pub fn to_yaml(inputs: &InputAssumptions) -> Result<String, ConfigError> {
    serde_saphyr::to_string(inputs).map_err(|e| ConfigError::Serialize(e.to_string()))
}

/// Load an assumption file, or the default plan when no path is given
pub fn load_assumptions(path: Option<&Path>) -> Result<InputAssumptions, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("No assumption file given, using defaults");
        return Ok(InputAssumptions::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let inputs = from_yaml(&content)?;
    tracing::info!(path = %path.display(), "Loaded assumptions");
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_core::model::{OfficeModel, RevenueModel};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_partial_yaml_overlays_defaults() {
        let yaml = "raise:\n  amount_millions: 6\nlocation:\n  office: fully_remote\n  city: Lisbon\n";
        let inputs = from_yaml(yaml).unwrap();

        assert_eq!(inputs.raise.amount_millions, 6.0);
        assert_eq!(inputs.raise.runway_months, 24);
        assert_eq!(inputs.location.office, OfficeModel::FullyRemote);
        assert_eq!(inputs.location.city, "Lisbon");
        assert_eq!(inputs.team.engineers, 2);
        assert_eq!(inputs.revenue.model, RevenueModel::Hybrid);
    }

    #[test]
    fn test_unknown_office_model_rejected() {
        let yaml = "location:\n  office: treehouse\n";
        assert!(matches!(from_yaml(yaml), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_yaml_round_trip_of_defaults() {
        let yaml = to_yaml(&InputAssumptions::default()).unwrap();
        assert!(yaml.contains("amount_millions"));
        assert_eq!(from_yaml(&yaml).unwrap(), InputAssumptions::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.yaml");
        fs::write(&path, "team:\n  engineers: 5\n  ops: 1\n").unwrap();

        let inputs = load_assumptions(Some(&path)).unwrap();
        assert_eq!(inputs.team.engineers, 5);
        assert_eq!(inputs.team.ops, 1);
        assert_eq!(inputs.team.founders, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_assumptions(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(load_assumptions(None).unwrap(), InputAssumptions::default());
    }
}
