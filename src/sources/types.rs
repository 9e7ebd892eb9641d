use crate::models::CarRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters sent to the car API
///
/// Absent keys mean "no constraint". Inserting a key that is already
/// present replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterMapping(BTreeMap<String, String>);

impl FilterMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl ToString) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Copy of this mapping with `year` set for a single API call
    pub fn for_year(&self, year: u16) -> Self {
        let mut copy = self.clone();
        copy.insert("year", year);
        copy
    }
}

/// Outcome of one successful round trip to a car source
#[derive(Debug, Clone, PartialEq)]
pub enum YearResponse {
    /// HTTP 200 with a decoded list of cars
    Cars(Vec<CarRecord>),
    /// Any other status, with the raw body for display
    Rejected { status: u16, body: String },
}
