use crate::models::{CarClass, Cylinders, Drive, FuelType, Transmission};
use crate::sources::FilterMapping;
use std::ops::RangeInclusive;

pub const MIN_MODEL_YEAR: u16 = 1980;
pub const MAX_MODEL_YEAR: u16 = 2024;
pub const DEFAULT_MIN_YEAR: u16 = 2000;
pub const MPG_FLOOR: u8 = 0;
pub const MPG_CEILING: u8 = 100;

/// What the user asked for, recreated on every search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSet {
    pub min_year: u16,
    pub max_year: u16,
    pub car_class: Option<CarClass>,
    pub make: Option<String>,
    pub cylinders: Option<Cylinders>,
    pub drive: Option<Drive>,
    pub electric: bool,
    pub gas: bool,
    pub diesel: bool,
    pub min_comb_mpg: u8,
    pub max_comb_mpg: u8,
    pub transmission: Option<Transmission>,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: MAX_MODEL_YEAR,
            car_class: None,
            make: None,
            cylinders: None,
            drive: None,
            electric: false,
            gas: false,
            diesel: false,
            min_comb_mpg: MPG_FLOOR,
            max_comb_mpg: MPG_CEILING,
            transmission: None,
        }
    }
}

impl PreferenceSet {
    pub fn years(&self) -> RangeInclusive<u16> {
        self.min_year..=self.max_year
    }

    /// The single fuel type that ends up in the query
    ///
    /// Flags are checked electric, gas, diesel and the last one set wins.
    pub fn fuel_type(&self) -> Option<FuelType> {
        let mut fuel = None;
        if self.electric {
            fuel = Some(FuelType::Electric);
        }
        if self.gas {
            fuel = Some(FuelType::Gas);
        }
        if self.diesel {
            fuel = Some(FuelType::Diesel);
        }
        fuel
    }
}

/// Translate preferences into API query parameters
pub fn build_filters(prefs: &PreferenceSet) -> FilterMapping {
    let mut filters = FilterMapping::new();

    if prefs.min_comb_mpg > MPG_FLOOR {
        filters.insert("min_comb_mpg", prefs.min_comb_mpg);
    }
    if prefs.max_comb_mpg < MPG_CEILING {
        filters.insert("max_comb_mpg", prefs.max_comb_mpg);
    }

    filters.insert("min_year", prefs.min_year);
    filters.insert("max_year", prefs.max_year);

    if let Some(fuel) = prefs.fuel_type() {
        filters.insert("fuel_type", fuel.as_str());
    }
    if let Some(transmission) = prefs.transmission {
        filters.insert("transmission", transmission.code());
    }
    if let Some(drive) = prefs.drive {
        filters.insert("drive", drive.label());
    }
    if let Some(cylinders) = prefs.cylinders {
        filters.insert("cylinders", cylinders);
    }
    if let Some(class) = prefs.car_class {
        filters.insert("class", class.label());
    }
    if let Some(make) = prefs.make.as_deref().map(str::trim) {
        if !make.is_empty() {
            filters.insert("make", make);
        }
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mpg_bounds_are_left_out() {
        let filters = build_filters(&PreferenceSet::default());

        assert_eq!(filters.get("min_comb_mpg"), None);
        assert_eq!(filters.get("max_comb_mpg"), None);
        assert_eq!(filters.get("min_year"), Some("2000"));
        assert_eq!(filters.get("max_year"), Some("2024"));
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn tightened_mpg_bounds_are_sent() {
        let prefs = PreferenceSet {
            min_comb_mpg: 20,
            max_comb_mpg: 45,
            ..PreferenceSet::default()
        };

        let filters = build_filters(&prefs);

        assert_eq!(filters.get("min_comb_mpg"), Some("20"));
        assert_eq!(filters.get("max_comb_mpg"), Some("45"));
    }

    #[test]
    fn later_fuel_flag_wins() {
        let prefs = PreferenceSet {
            electric: true,
            ..PreferenceSet::default()
        };
        assert_eq!(build_filters(&prefs).get("fuel_type"), Some("electric"));

        let prefs = PreferenceSet {
            gas: true,
            diesel: true,
            ..PreferenceSet::default()
        };
        assert_eq!(build_filters(&prefs).get("fuel_type"), Some("diesel"));

        let prefs = PreferenceSet {
            electric: true,
            gas: true,
            ..PreferenceSet::default()
        };
        assert_eq!(build_filters(&prefs).get("fuel_type"), Some("gas"));

        let prefs = PreferenceSet {
            electric: true,
            gas: true,
            diesel: true,
            ..PreferenceSet::default()
        };
        assert_eq!(build_filters(&prefs).get("fuel_type"), Some("diesel"));

        assert_eq!(build_filters(&PreferenceSet::default()).get("fuel_type"), None);
    }

    #[test]
    fn any_transmission_selection_is_sent_as_a() {
        let manual = PreferenceSet {
            transmission: Some(Transmission::Manual),
            ..PreferenceSet::default()
        };
        let automatic = PreferenceSet {
            transmission: Some(Transmission::Automatic),
            ..PreferenceSet::default()
        };

        assert_eq!(build_filters(&manual).get("transmission"), Some("a"));
        assert_eq!(build_filters(&automatic).get("transmission"), Some("a"));
        assert_eq!(build_filters(&PreferenceSet::default()).get("transmission"), None);
    }

    #[test]
    fn optional_selections_are_passed_through() {
        let prefs = PreferenceSet {
            min_year: 2015,
            max_year: 2018,
            car_class: Some(CarClass::MidsizeCar),
            make: Some("  Toyota ".to_string()),
            cylinders: Some("6".parse().unwrap()),
            drive: Some(Drive::Awd),
            ..PreferenceSet::default()
        };

        let filters = build_filters(&prefs);

        assert_eq!(filters.get("class"), Some("Midsize Car"));
        assert_eq!(filters.get("make"), Some("Toyota"));
        assert_eq!(filters.get("cylinders"), Some("6"));
        assert_eq!(filters.get("drive"), Some("AWD"));
        assert_eq!(filters.get("min_year"), Some("2015"));
        assert_eq!(filters.get("max_year"), Some("2018"));
        assert_eq!(filters.get("year"), None);
    }

    #[test]
    fn blank_make_is_no_constraint() {
        let prefs = PreferenceSet {
            make: Some("   ".to_string()),
            ..PreferenceSet::default()
        };

        assert_eq!(build_filters(&prefs).get("make"), None);
    }
}
