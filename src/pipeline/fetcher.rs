use crate::models::CarRecord;
use crate::pipeline::report::Notice;
use crate::sources::{CarSource, FilterMapping, YearResponse};
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Most cars a single search will show
pub const MAX_RESULTS: usize = 10;

/// Cars gathered across a year range plus what went wrong on the way
#[derive(Debug, Default)]
pub struct FetchSummary {
    pub cars: Vec<CarRecord>,
    pub notices: Vec<Notice>,
    pub requests: usize,
}

/// Query the source once per year, oldest first
///
/// A failed year adds notices and contributes no cars; the loop always
/// runs to the end of the range.
pub async fn fetch_year_range(
    source: &dyn CarSource,
    years: RangeInclusive<u16>,
    filters: &FilterMapping,
) -> FetchSummary {
    let mut summary = FetchSummary::default();

    for year in years {
        let call_filters = filters.for_year(year);
        summary.requests += 1;

        match source.fetch_cars(&call_filters).await {
            Ok(YearResponse::Cars(cars)) => {
                debug!("{}: {} cars for {}", source.source_name(), cars.len(), year);
                summary.cars.extend(cars);
            }
            Ok(YearResponse::Rejected { status, body }) => {
                warn!("{} rejected the query for {} ({})", source.source_name(), year, status);
                summary.notices.push(Notice::error(format!(
                    "Failed to fetch data from the API. Status code: {}",
                    status
                )));
                summary
                    .notices
                    .push(Notice::error(format!("Response content: {}", body)));
            }
            Err(err) => {
                warn!("Query for {} failed: {:#}", year, err);
                summary.notices.push(Notice::error(format!(
                    "Failed to fetch cars for {}: {:#}",
                    year, err
                )));
            }
        }
    }

    info!(
        "Collected {} cars from {} requests",
        summary.cars.len(),
        summary.requests
    );

    summary
}

/// Keep the first [`MAX_RESULTS`] cars in their original order
pub fn limit_results(mut cars: Vec<CarRecord>) -> Vec<CarRecord> {
    cars.truncate(MAX_RESULTS);
    cars
}
