use crate::config::Config;
use crate::models::CarRecord;
use crate::sources::traits::CarSource;
use crate::sources::types::{FilterMapping, YearResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("automatch/", env!("CARGO_PKG_VERSION"));

/// Client for the API Ninjas `/v1/cars` endpoint
pub struct NinjasClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl NinjasClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        info!("Car API client ready for {}", config.api_url);

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl CarSource for NinjasClient {
    async fn fetch_cars(&self, filters: &FilterMapping) -> Result<YearResponse> {
        debug!(
            "GET {} for year {} with {} params",
            self.api_url,
            filters.get("year").unwrap_or("?"),
            filters.len()
        );

        let response = self
            .client
            .get(&self.api_url)
            .header("X-Api-Key", &self.api_key)
            .query(filters)
            .send()
            .await
            .context("Failed to reach the car API")?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Car API returned status: {}", status);
            let body = response
                .text()
                .await
                .context("Failed to read response body")?;
            return Ok(YearResponse::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let cars: Vec<CarRecord> = response
            .json()
            .await
            .context("Failed to decode car API response")?;

        debug!("Car API returned {} cars", cars.len());

        Ok(YearResponse::Cars(cars))
    }

    fn source_name(&self) -> &'static str {
        "API Ninjas"
    }
}
