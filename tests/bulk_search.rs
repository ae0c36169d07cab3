//! Bulk-orchestration invariants, driven by a scripted inventory double.
//!
//! The double is substituted by construction through the `FlightInventory`
//! trait, so these tests exercise the real fan-out/fan-in and coordinator
//! code paths with fully controlled per-key outcomes and completion order.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{json, Value};

use miles_search::error_handling::{ErrorType, FetchError};
use miles_search::search::bulk::search_bulk;
use miles_search::{
    FlightInventory, RawSearchResult, SearchCoordinator, SearchError, SearchKey, SearchQuery,
};

/// Per-date scripted outcome with an artificial completion delay, so tests
/// control which fetch finishes first regardless of dispatch order.
struct ScriptedInventory {
    outcomes: HashMap<NaiveDate, (u64, Result<Value, FetchError>)>,
}

impl ScriptedInventory {
    fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
        }
    }

    fn succeed_after(mut self, date: NaiveDate, delay_ms: u64, payload: Value) -> Self {
        self.outcomes.insert(date, (delay_ms, Ok(payload)));
        self
    }

    fn fail_after(mut self, date: NaiveDate, delay_ms: u64) -> Self {
        self.outcomes.insert(
            date,
            (
                delay_ms,
                Err(FetchError {
                    error_type: ErrorType::HttpRequestConnectError,
                    message: format!("scripted transport failure for {date}"),
                }),
            ),
        );
        self
    }
}

impl FlightInventory for ScriptedInventory {
    fn fetch(&self, key: &SearchKey) -> impl Future<Output = RawSearchResult> + Send {
        let scripted = self.outcomes.get(&key.departure_date).cloned();
        let key = key.clone();
        async move {
            let (delay_ms, outcome) = scripted.unwrap_or((
                0,
                Err(FetchError {
                    error_type: ErrorType::HttpRequestOtherError,
                    message: format!("no scripted outcome for {}", key.departure_date),
                }),
            ));
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            RawSearchResult { key, outcome }
        }
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
}

fn payload_with_miles(miles: u64) -> Value {
    json!({
        "requestedFlightSegmentList": [{
            "flightList": [{
                "airline": { "name": "GOL (G3)" },
                "fareList": [{ "type": "SMILES", "miles": miles }],
                "duration": { "hours": 1, "minutes": 15 },
                "departure": { "airport": { "code": "CNF" }, "date": "t0" },
                "arrival": { "airport": { "code": "GRU" }, "date": "t1" },
                "stops": 1
            }]
        }]
    })
}

#[tokio::test]
async fn results_are_index_aligned_regardless_of_completion_order() {
    // Earlier keys complete last; output order must still match input order
    let inventory = ScriptedInventory::new()
        .succeed_after(date(10), 80, payload_with_miles(10))
        .fail_after(date(11), 60)
        .succeed_after(date(12), 40, payload_with_miles(12))
        .fail_after(date(13), 20)
        .succeed_after(date(14), 0, payload_with_miles(14));

    let keys: Vec<SearchKey> = (10..15)
        .map(|day| SearchKey::one_way("CNF", "GRU", date(day)))
        .collect();

    let results = search_bulk(&inventory, &keys).await;

    assert_eq!(results.len(), keys.len());
    for (result, key) in results.iter().zip(&keys) {
        assert_eq!(&result.key, key);
    }
    assert!(results[0].outcome.is_ok());
    assert!(results[1].outcome.is_err());
    assert!(results[2].outcome.is_ok());
    assert!(results[3].outcome.is_err());
    assert!(results[4].outcome.is_ok());
}

#[tokio::test]
async fn one_failure_does_not_disturb_the_others() {
    let inventory = ScriptedInventory::new()
        .fail_after(date(10), 0)
        .succeed_after(date(11), 30, payload_with_miles(11))
        .succeed_after(date(12), 10, payload_with_miles(12));

    let keys: Vec<SearchKey> = (10..13)
        .map(|day| SearchKey::one_way("CNF", "GRU", date(day)))
        .collect();

    let results = search_bulk(&inventory, &keys).await;

    // The immediate failure at index 0 leaves both successes intact
    assert!(results[0].outcome.is_err());
    let second = results[1].outcome.as_ref().unwrap();
    assert_eq!(
        second["requestedFlightSegmentList"][0]["flightList"][0]["fareList"][0]["miles"],
        json!(11)
    );
    assert!(results[2].outcome.is_ok());
}

#[tokio::test]
async fn fetches_run_concurrently_not_serially() {
    // Eight 50ms fetches completing in well under 8 * 50ms proves they
    // overlap at the join barrier
    let mut inventory = ScriptedInventory::new();
    for day in 10..18 {
        inventory = inventory.succeed_after(date(day), 50, json!({}));
    }
    let keys: Vec<SearchKey> = (10..18)
        .map(|day| SearchKey::one_way("CNF", "GRU", date(day)))
        .collect();

    let started = std::time::Instant::now();
    let results = search_bulk(&inventory, &keys).await;
    let elapsed = started.elapsed();

    assert_eq!(results.len(), 8);
    assert!(
        elapsed < Duration::from_millis(250),
        "bulk search took {elapsed:?}, expected concurrent dispatch"
    );
}

#[tokio::test]
async fn empty_key_list_yields_empty_results() {
    let inventory = ScriptedInventory::new();
    let results = search_bulk(&inventory, &[]).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn coordinator_merges_in_candidate_date_order() {
    // Completion order is reversed (earliest date slowest); merged flights
    // must still follow the candidate window order
    let inventory = ScriptedInventory::new()
        .succeed_after(date(10), 60, payload_with_miles(10))
        .succeed_after(date(11), 30, payload_with_miles(11))
        .succeed_after(date(12), 0, payload_with_miles(12));

    let coordinator = SearchCoordinator::new(inventory);
    let mut query = SearchQuery::exact_date("CNF", "GRU", date(10));
    query.flexibility = 2;

    let report = coordinator.search(&query).await.unwrap();

    let costs: Vec<u64> = report.flights.iter().map(|f| f.miles_cost).collect();
    assert_eq!(costs, vec![10, 11, 12]);
    assert_eq!(report.dates_searched, 3);
    assert_eq!(report.dates_failed, 0);
}

#[tokio::test]
async fn coordinator_skips_failed_dates_without_aborting() {
    let inventory = ScriptedInventory::new()
        .succeed_after(date(10), 0, payload_with_miles(10))
        .fail_after(date(11), 0)
        .succeed_after(date(12), 0, payload_with_miles(12));

    let coordinator = SearchCoordinator::new(inventory);
    let mut query = SearchQuery::exact_date("CNF", "GRU", date(10));
    query.flexibility = 2;

    let report = coordinator.search(&query).await.unwrap();

    let costs: Vec<u64> = report.flights.iter().map(|f| f.miles_cost).collect();
    assert_eq!(costs, vec![10, 12]);
    assert_eq!(report.dates_searched, 3);
    assert_eq!(report.dates_failed, 1);
}

#[tokio::test]
async fn coordinator_reports_hard_failure_when_every_date_fails() {
    let mut inventory = ScriptedInventory::new();
    for day in 10..18 {
        inventory = inventory.fail_after(date(day), 0);
    }

    let coordinator = SearchCoordinator::new(inventory);
    let mut query = SearchQuery::exact_date("CNF", "GRU", date(10));
    query.flexibility = 7;

    let result = coordinator.search(&query).await;

    match result {
        Err(SearchError::AllSearchesFailed {
            attempted,
            last_error,
        }) => {
            assert_eq!(attempted, 8);
            assert!(last_error.contains("scripted transport failure"));
        }
        other => panic!("expected AllSearchesFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn coordinator_distinguishes_empty_success_from_hard_failure() {
    // Every date succeeds but reports zero itineraries: a legitimate
    // negative result, not an infrastructure problem
    let mut inventory = ScriptedInventory::new();
    for day in 10..14 {
        inventory = inventory.succeed_after(date(day), 0, json!({}));
    }

    let coordinator = SearchCoordinator::new(inventory);
    let mut query = SearchQuery::exact_date("CNF", "GRU", date(10));
    query.flexibility = 3;

    let report = coordinator.search(&query).await.unwrap();

    assert!(report.flights.is_empty());
    assert_eq!(report.dates_searched, 4);
    assert_eq!(report.dates_failed, 0);
}
