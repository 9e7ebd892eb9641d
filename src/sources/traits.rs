use crate::sources::types::{FilterMapping, YearResponse};
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can answer a car query
/// The pipeline only talks to this, so tests can swap in a fake
#[async_trait]
pub trait CarSource: Send + Sync {
    /// Issue exactly one query with the given filters
    ///
    /// `Err` means the call never produced a usable response
    /// (connection failure, timeout, undecodable body).
    async fn fetch_cars(&self, filters: &FilterMapping) -> Result<YearResponse>;

    /// Get the name of the data provider
    fn source_name(&self) -> &'static str;
}
