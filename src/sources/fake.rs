//! In-memory car source for pipeline tests.

use crate::models::CarRecord;
use crate::sources::traits::CarSource;
use crate::sources::types::{FilterMapping, YearResponse};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Map;
use std::collections::HashMap;
use std::sync::Mutex;

pub enum Reply {
    Cars(Vec<CarRecord>),
    Status(u16, &'static str),
    Unreachable,
}

/// Answers by `year`; years without a scripted reply return no cars
#[derive(Default)]
pub struct FakeSource {
    replies: HashMap<u16, Reply>,
    calls: Mutex<Vec<FilterMapping>>,
    fixed_status: Option<u16>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, year: u16, reply: Reply) -> Self {
        self.replies.insert(year, reply);
        self
    }

    /// Every call gets this status, whatever the year
    pub fn always_status(mut self, status: u16) -> Self {
        self.fixed_status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<FilterMapping> {
        self.calls.lock().unwrap().clone()
    }

    pub fn years_called(&self) -> Vec<u16> {
        self.calls()
            .iter()
            .filter_map(|f| f.get("year").and_then(|y| y.parse().ok()))
            .collect()
    }
}

#[async_trait]
impl CarSource for FakeSource {
    async fn fetch_cars(&self, filters: &FilterMapping) -> Result<YearResponse> {
        self.calls.lock().unwrap().push(filters.clone());

        if let Some(status) = self.fixed_status {
            return Ok(YearResponse::Rejected {
                status,
                body: "{\"error\": \"scripted failure\"}".to_string(),
            });
        }

        let year: u16 = filters
            .get("year")
            .and_then(|y| y.parse().ok())
            .ok_or_else(|| anyhow!("no year in filters"))?;

        match self.replies.get(&year) {
            Some(Reply::Cars(cars)) => Ok(YearResponse::Cars(cars.clone())),
            Some(Reply::Status(status, body)) => Ok(YearResponse::Rejected {
                status: *status,
                body: body.to_string(),
            }),
            Some(Reply::Unreachable) => Err(anyhow!("connection refused")),
            None => Ok(YearResponse::Cars(Vec::new())),
        }
    }

    fn source_name(&self) -> &'static str {
        "fake"
    }
}

pub fn car(make: &str, model: &str, year: i32) -> CarRecord {
    CarRecord {
        make: make.to_string(),
        model: model.to_string(),
        year,
        fuel_type: None,
        class: None,
        transmission: None,
        drive: None,
        cylinders: None,
        combination_mpg: None,
        extra: Map::new(),
    }
}
