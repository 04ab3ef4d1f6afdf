use std::fmt;

/// Errors raised when a closed-set key cannot be resolved
///
/// The engine itself is total over valid inputs. These errors only come
/// from turning an untyped key into one of the model enums, so a typo in
/// an office or revenue model fails fast instead of flowing into the
/// arithmetic as a missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssumptionError {
    /// Office model key is not one of the closed set
    UnknownOfficeModel(String),
    /// Revenue model key is not one of the closed set
    UnknownRevenueModel(String),
}

impl fmt::Display for AssumptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssumptionError::UnknownOfficeModel(key) => write!(
                f,
                "unknown office model '{key}' (expected fully_remote, hybrid or dedicated_office)"
            ),
            AssumptionError::UnknownRevenueModel(key) => write!(
                f,
                "unknown revenue model '{key}' (expected saas, commission or hybrid)"
            ),
        }
    }
}

impl std::error::Error for AssumptionError {}

pub type Result<T> = std::result::Result<T, AssumptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_bad_key() {
        let err = AssumptionError::UnknownOfficeModel("coworking".to_string());
        let msg = err.to_string();
        assert!(msg.contains("coworking"));
        assert!(msg.contains("dedicated_office"));

        let err = AssumptionError::UnknownRevenueModel("ads".to_string());
        assert!(err.to_string().contains("'ads'"));
    }
}
