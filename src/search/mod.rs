//! Search coordination.
//!
//! The coordinator expands one user request into its date-candidate window,
//! dispatches the bulk search, and merges every successful payload through
//! the normalizer into one aggregate report.

pub mod bulk;

use chrono::{Days, NaiveDate};
use log::{debug, info, warn};

use crate::client::FlightInventory;
use crate::config::DEFAULT_ELIGIBLE_FARES;
use crate::error_handling::{InfoType, ProcessingStats, SearchError};
use crate::models::{SearchKey, SearchQuery, SearchReport};
use crate::normalize;

/// Expands a base date and flexibility count into the candidate window.
///
/// The policy is forward-only: the base date followed by the `flexibility`
/// immediately following days, ascending, for `flexibility + 1` dates in
/// total. Flexibility 0 searches the exact date only. Deterministic: the
/// same inputs always produce the same window.
pub fn expand_dates(base: NaiveDate, flexibility: u32) -> Vec<NaiveDate> {
    (0..=u64::from(flexibility))
        .filter_map(|offset| base.checked_add_days(Days::new(offset)))
        .collect()
}

/// Top-level search entry point.
///
/// Runs one search in three steps: expand the query into per-date search
/// keys, dispatch them concurrently, and merge the normalized flights of
/// every successful date in candidate order. Failed dates are skipped,
/// counted, and logged rather than aborting the batch; only a batch where
/// every date failed escalates to [`SearchError::AllSearchesFailed`].
pub struct SearchCoordinator<C> {
    client: C,
    eligible_fares: Vec<String>,
    stats: ProcessingStats,
}

impl<C: FlightInventory> SearchCoordinator<C> {
    /// Creates a coordinator over the given inventory client with the
    /// default fare allow-list.
    pub fn new(client: C) -> Self {
        Self {
            client,
            eligible_fares: DEFAULT_ELIGIBLE_FARES
                .iter()
                .map(|fare| (*fare).to_string())
                .collect(),
            stats: ProcessingStats::new(),
        }
    }

    /// Replaces the fare-class allow-list used for cheapest-price selection.
    pub fn with_eligible_fares(mut self, eligible_fares: Vec<String>) -> Self {
        self.eligible_fares = eligible_fares;
        self
    }

    /// Statistics accumulated across searches run on this coordinator.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Runs one coordinated search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AllSearchesFailed`] only when every searched
    /// date failed with a transport error. A search that succeeds with zero
    /// flights is an `Ok` report with an empty flight list.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchReport, SearchError> {
        let dates = expand_dates(query.departure_date, query.flexibility);
        let keys: Vec<SearchKey> = dates
            .iter()
            .map(|date| SearchKey {
                origin: query.origin.clone(),
                destination: query.destination.clone(),
                departure_date: *date,
                return_date: None,
                adults: query.adults,
                children: query.children,
                infants: query.infants,
            })
            .collect();
        info!(
            "searching {} -> {} across {} date(s) starting {}",
            query.origin,
            query.destination,
            keys.len(),
            query.departure_date
        );

        let results = bulk::search_bulk(&self.client, &keys).await;

        let eligible: Vec<&str> = self.eligible_fares.iter().map(String::as_str).collect();
        let mut flights = Vec::new();
        let mut dates_failed = 0usize;
        let mut last_error = String::new();

        for result in &results {
            match &result.outcome {
                Ok(payload) => {
                    let booking_url = normalize::generate_booking_url(
                        &result.key.origin,
                        &result.key.destination,
                        result.key.departure_date,
                    );
                    let extracted =
                        normalize::extract_flights_with(payload, &booking_url, &eligible);
                    debug!(
                        "{}: {} flight(s)",
                        result.key.departure_date,
                        extracted.len()
                    );
                    if extracted.is_empty() {
                        self.stats.increment_info(InfoType::EmptySearchResult);
                    }
                    flights.extend(extracted);
                }
                Err(error) => {
                    dates_failed += 1;
                    last_error = error.message.clone();
                    self.stats.increment_error(error.error_type);
                    warn!(
                        "search for {} failed, skipping that date: {}",
                        result.key.departure_date, error
                    );
                }
            }
        }

        if dates_failed == results.len() && !results.is_empty() {
            return Err(SearchError::AllSearchesFailed {
                attempted: results.len(),
                last_error,
            });
        }
        if dates_failed > 0 {
            self.stats.increment_info(InfoType::PartialFailure);
        }

        Ok(SearchReport {
            flights,
            dates_searched: results.len(),
            dates_failed,
        })
    }
}
