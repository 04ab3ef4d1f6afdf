//! Office model and city cost lookups

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssumptionError;

/// Multiplier applied when a city is not in [`CITY_MULTIPLIERS`]
pub const DEFAULT_CITY_MULTIPLIER: f64 = 1.0;

/// Office cost multipliers relative to a baseline city
pub const CITY_MULTIPLIERS: &[(&str, f64)] = &[
    ("San Francisco", 1.35),
    ("New York", 1.30),
    ("London", 1.20),
    ("Tel Aviv", 1.10),
    ("Austin", 0.90),
    ("Miami", 0.95),
    ("Berlin", 0.85),
    ("Lisbon", 0.75),
    ("Remote (distributed)", 0.80),
];

/// Look up the office cost multiplier for a city.
///
/// Unknown cities fall back to [`DEFAULT_CITY_MULTIPLIER`].
#[must_use]
pub fn city_multiplier(city: &str) -> f64 {
    CITY_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == city)
        .map_or(DEFAULT_CITY_MULTIPLIER, |(_, multiplier)| *multiplier)
}

/// How the team is housed
///
/// This is a closed set: there is no sensible default seat cost, so an
/// unrecognized key is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeModel {
    FullyRemote,
    #[default]
    Hybrid,
    DedicatedOffice,
}

impl OfficeModel {
    pub const ALL: [OfficeModel; 3] = [
        OfficeModel::FullyRemote,
        OfficeModel::Hybrid,
        OfficeModel::DedicatedOffice,
    ];

    /// Monthly cost per seat in dollars, before the city multiplier
    #[must_use]
    pub fn cost_per_seat(self) -> f64 {
        match self {
            OfficeModel::FullyRemote => 150.0,
            OfficeModel::Hybrid => 600.0,
            OfficeModel::DedicatedOffice => 1200.0,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OfficeModel::FullyRemote => "fully_remote",
            OfficeModel::Hybrid => "hybrid",
            OfficeModel::DedicatedOffice => "dedicated_office",
        }
    }

    /// Human readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OfficeModel::FullyRemote => "Fully Remote",
            OfficeModel::Hybrid => "Hybrid (flex space)",
            OfficeModel::DedicatedOffice => "Dedicated Office",
        }
    }
}

impl fmt::Display for OfficeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfficeModel {
    type Err = AssumptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OfficeModel::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| AssumptionError::UnknownOfficeModel(s.to_string()))
    }
}

/// Where the team works
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationAssumptions {
    pub office: OfficeModel,
    /// Key into [`CITY_MULTIPLIERS`]
    pub city: String,
}

impl Default for LocationAssumptions {
    fn default() -> Self {
        Self {
            office: OfficeModel::Hybrid,
            city: "San Francisco".to_string(),
        }
    }
}

impl LocationAssumptions {
    #[must_use]
    pub fn city_multiplier(&self) -> f64 {
        city_multiplier(&self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_multipliers() {
        assert_eq!(city_multiplier("San Francisco"), 1.35);
        assert_eq!(city_multiplier("Lisbon"), 0.75);
        assert_eq!(city_multiplier("Remote (distributed)"), 0.80);
    }

    #[test]
    fn test_unknown_city_defaults_to_one() {
        assert_eq!(city_multiplier("Reykjavik"), DEFAULT_CITY_MULTIPLIER);
        // Lookup is exact, not case-folded
        assert_eq!(city_multiplier("san francisco"), DEFAULT_CITY_MULTIPLIER);
    }

    #[test]
    fn test_office_model_parse_round_trip() {
        for model in OfficeModel::ALL {
            assert_eq!(model.as_str().parse::<OfficeModel>(), Ok(model));
        }
    }

    #[test]
    fn test_unknown_office_model_fails_fast() {
        let err = "coworking".parse::<OfficeModel>().unwrap_err();
        assert_eq!(err, AssumptionError::UnknownOfficeModel("coworking".into()));
    }

    #[test]
    fn test_unknown_office_model_rejected_by_serde() {
        let result: Result<LocationAssumptions, _> =
            serde_json::from_str(r#"{"office": "treehouse", "city": "Austin"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_seat_costs() {
        assert_eq!(OfficeModel::FullyRemote.cost_per_seat(), 150.0);
        assert_eq!(OfficeModel::Hybrid.cost_per_seat(), 600.0);
        assert_eq!(OfficeModel::DedicatedOffice.cost_per_seat(), 1200.0);
    }
}
