use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Placeholder shown for fields the API left out
pub const NOT_AVAILABLE: &str = "N/A";

/// Cylinder counts offered as a filter
pub const CYLINDER_OPTIONS: [u8; 9] = [2, 3, 4, 5, 6, 8, 10, 12, 16];

/// EPA size class of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum CarClass {
    CompactCar,
    MidsizeCar,
    MinicompactCar,
    Minivan,
    SmallSportUtilityVehicle,
    StandardSportUtilityVehicle,
    SubcompactCar,
    TwoSeater,
}

impl CarClass {
    /// Label the car API expects for the `class` filter
    pub fn label(self) -> &'static str {
        match self {
            CarClass::CompactCar => "Compact Car",
            CarClass::MidsizeCar => "Midsize Car",
            CarClass::MinicompactCar => "Minicompact Car",
            CarClass::Minivan => "Minivan",
            CarClass::SmallSportUtilityVehicle => "Small Sport Utility Vehicle",
            CarClass::StandardSportUtilityVehicle => "Standard Sport Utility Vehicle",
            CarClass::SubcompactCar => "Subcompact Car",
            CarClass::TwoSeater => "Two Seater",
        }
    }
}

/// Drivetrain layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Drive {
    Fwd,
    Rwd,
    Awd,
}

impl Drive {
    pub fn label(self) -> &'static str {
        match self {
            Drive::Fwd => "FWD",
            Drive::Rwd => "RWD",
            Drive::Awd => "AWD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    /// Single-character code used by the `transmission` filter
    ///
    /// Every selection is sent as `a`, manual included.
    // TODO: send `m` for Manual once product confirms manual-only searches are wanted.
    pub fn code(self) -> &'static str {
        match self {
            Transmission::Manual | Transmission::Automatic => "a",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Electric,
    Gas,
    Diesel,
}

impl FuelType {
    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Electric => "electric",
            FuelType::Gas => "gas",
            FuelType::Diesel => "diesel",
        }
    }
}

/// Engine cylinder count, restricted to [`CYLINDER_OPTIONS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cylinders(u8);

impl FromStr for Cylinders {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a cylinder count", s))?;

        if CYLINDER_OPTIONS.contains(&count) {
            Ok(Self(count))
        } else {
            Err(format!(
                "{} cylinders is not offered (choose one of {:?})",
                count, CYLINDER_OPTIONS
            ))
        }
    }
}

impl fmt::Display for Cylinders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One car as returned by the car API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarRecord {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
    /// Numeric for most plans, a notice string for premium-only fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cylinders: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combination_mpg: Option<Value>,
    /// Everything else the API sent (city_mpg, displacement, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Render an optional text field, falling back to [`NOT_AVAILABLE`]
pub fn text_or_na(field: Option<&str>) -> String {
    match field {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Render an optional JSON field, falling back to [`NOT_AVAILABLE`]
pub fn value_or_na(field: Option<&Value>) -> String {
    match field {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => text_or_na(Some(s)),
        Some(other) => other.to_string(),
    }
}

/// Row of the image metadata table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageMetadataRow {
    pub car_name: String,
    pub image_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_offered_cylinder_counts_only() {
        assert_eq!("8".parse::<Cylinders>().unwrap().to_string(), "8");
        assert_eq!(" 16 ".parse::<Cylinders>().unwrap().to_string(), "16");
        assert!("7".parse::<Cylinders>().is_err());
        assert!("v8".parse::<Cylinders>().is_err());
    }

    #[test]
    fn decodes_api_record_with_premium_placeholders() {
        let car: CarRecord = serde_json::from_value(json!({
            "make": "toyota",
            "model": "corolla",
            "year": 2020,
            "fuel_type": "gas",
            "class": "compact car",
            "transmission": "a",
            "drive": "fwd",
            "cylinders": 4,
            "combination_mpg": "this field is for premium subscribers only",
            "displacement": 1.8
        }))
        .unwrap();

        assert_eq!(car.make, "toyota");
        assert_eq!(value_or_na(car.cylinders.as_ref()), "4");
        assert_eq!(
            value_or_na(car.combination_mpg.as_ref()),
            "this field is for premium subscribers only"
        );
        assert_eq!(car.extra.get("displacement"), Some(&json!(1.8)));
    }

    #[test]
    fn missing_optional_fields_render_as_not_available() {
        let car: CarRecord = serde_json::from_value(json!({
            "make": "honda",
            "model": "civic",
            "year": 2019,
            "drive": null
        }))
        .unwrap();

        assert_eq!(text_or_na(car.fuel_type.as_deref()), NOT_AVAILABLE);
        assert_eq!(text_or_na(car.drive.as_deref()), NOT_AVAILABLE);
        assert_eq!(value_or_na(car.combination_mpg.as_ref()), NOT_AVAILABLE);
    }

    #[test]
    fn class_labels_match_api_vocabulary() {
        assert_eq!(CarClass::SmallSportUtilityVehicle.label(), "Small Sport Utility Vehicle");
        assert_eq!(CarClass::TwoSeater.label(), "Two Seater");
        assert_eq!(Drive::Awd.label(), "AWD");
    }
}
