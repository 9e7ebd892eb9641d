use crate::pipeline::fetcher::{fetch_year_range, limit_results, MAX_RESULTS};
use crate::pipeline::filters::{build_filters, PreferenceSet};
use crate::pipeline::images::ImageCatalog;
use crate::pipeline::report::{CarMatch, MatchReport, Notice};
use crate::sources::CarSource;
use chrono::Utc;
use tracing::info;

pub const NO_CARS_IN_RANGE: &str = "No cars found in the selected year range.";
pub const NO_CARS_MATCH: &str = "No cars match your criteria.";
pub const IMAGE_NOT_AVAILABLE: &str = "Image not available for this car.";
pub const METADATA_MISSING: &str =
    "Image metadata file not found. Ensure the CSV file is available.";

/// Answers one search: preferences in, render model out
pub struct MatchHandler<'a> {
    source: &'a dyn CarSource,
    catalog: &'a ImageCatalog,
}

impl<'a> MatchHandler<'a> {
    pub fn new(source: &'a dyn CarSource, catalog: &'a ImageCatalog) -> Self {
        Self { source, catalog }
    }

    pub async fn find_matches(&self, prefs: &PreferenceSet) -> MatchReport {
        let filters = build_filters(prefs);
        info!(
            "Searching {} for {}-{} with {} filters",
            self.source.source_name(),
            prefs.min_year,
            prefs.max_year,
            filters.len()
        );

        let fetched = fetch_year_range(self.source, prefs.years(), &filters).await;

        let mut report = MatchReport {
            generated_at: Utc::now(),
            source: self.source.source_name(),
            filters,
            requests: fetched.requests,
            total_found: fetched.cars.len(),
            notices: fetched.notices,
            matches: Vec::new(),
        };

        if fetched.cars.is_empty() {
            report.notices.push(Notice::warning(NO_CARS_IN_RANGE));
            return report;
        }

        let cars = limit_results(fetched.cars);
        if cars.is_empty() {
            report.notices.push(Notice::warning(NO_CARS_MATCH));
            return report;
        }

        report.notices.push(Notice::success(format!(
            "Found {} cars matching your preferences (showing top {}):",
            cars.len(),
            MAX_RESULTS
        )));

        if let Some(reason) = self.catalog.load_error() {
            report
                .notices
                .push(Notice::error(format!("{} ({})", METADATA_MISSING, reason)));
        }

        report.matches = cars
            .into_iter()
            .map(|car| {
                let image = self.catalog.find_image(&car.make, &car.model);
                CarMatch { car, image }
            })
            .collect();

        info!(
            "Showing {} cars, {} with images",
            report.matches.len(),
            report.matches.iter().filter(|m| m.image.is_some()).count()
        );

        report
    }
}
