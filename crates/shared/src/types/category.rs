//! Conversion categories.
//!
//! A category groups units that can be converted into each other and decides
//! which arithmetic applies to them.

use serde::{Deserialize, Serialize};

/// Category of convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Mass units (kg, g, lb).
    Weight,
    /// Distance units (cm, m, km, mile).
    Length,
    /// Static currency rates against USD.
    Currency,
    /// Temperature scales bridged through Celsius.
    Temperature,
    /// Surface units.
    Area,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Weight,
        Self::Length,
        Self::Currency,
        Self::Temperature,
        Self::Area,
    ];

    /// Returns the lowercase identifier used by callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Length => "length",
            Self::Currency => "currency",
            Self::Temperature => "temperature",
            Self::Area => "area",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "length" => Ok(Self::Length),
            "currency" => Ok(Self::Currency),
            "temperature" => Ok(Self::Temperature),
            "area" => Ok(Self::Area),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Weight.to_string(), "weight");
        assert_eq!(Category::Length.to_string(), "length");
        assert_eq!(Category::Currency.to_string(), "currency");
        assert_eq!(Category::Temperature.to_string(), "temperature");
        assert_eq!(Category::Area.to_string(), "area");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("weight").unwrap(), Category::Weight);
        assert_eq!(Category::from_str("Weight").unwrap(), Category::Weight);
        assert_eq!(Category::from_str(" area ").unwrap(), Category::Area);
        assert_eq!(
            Category::from_str("TEMPERATURE").unwrap(),
            Category::Temperature
        );

        assert!(Category::from_str("volume").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn test_category_round_trips_through_identifier() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
        }
    }

    #[test]
    fn test_category_serde_is_lowercase() {
        let json = serde_json::to_string(&Category::Currency).unwrap();
        assert_eq!(json, "\"currency\"");

        let parsed: Category = serde_json::from_str("\"length\"").unwrap();
        assert_eq!(parsed, Category::Length);
    }
}
