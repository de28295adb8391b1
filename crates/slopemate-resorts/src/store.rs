//! Per-resort weather fetch orchestration and the published snapshot.
//!
//! One `load_weather` call classifies the requested date once, fans out one
//! independent fetch per resort, waits for all of them, and replaces the
//! published snapshot wholesale. A failing resort never blanks out the
//! others; it is simply absent from the mapping.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use parking_lot::RwLock;

use slopemate_weather::{
    timestamp_utc, ErrorKind, WeatherError, WeatherFetch, WeatherReading,
};

use crate::catalog::Resort;
use crate::date::{canonical_day, classify, DateBucket};

/// Summary of the most recently observed failure in a run.
#[derive(Debug, Clone)]
pub struct LoadError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&WeatherError> for LoadError {
    fn from(err: &WeatherError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

/// The complete result of one orchestration run, replaced atomically.
/// Only successful resorts appear in the mapping.
#[derive(Debug, Clone, Default)]
pub struct WeatherSnapshot {
    pub weather_by_resort: HashMap<String, WeatherReading>,
    pub is_loading: bool,
    pub last_error: Option<LoadError>,
}

/// Holds the snapshot and drives fetch runs against the port.
pub struct ResortWeatherStore {
    port: Arc<dyn WeatherFetch>,
    state: RwLock<WeatherSnapshot>,
    /// Latest issued run token. A run whose token is no longer the latest
    /// at reduction time discards its result instead of publishing it, so
    /// a slow run for an old date can never clobber a newer one.
    generation: AtomicU64,
}

impl ResortWeatherStore {
    pub fn new(port: Arc<dyn WeatherFetch>) -> Self {
        Self {
            port,
            state: RwLock::new(WeatherSnapshot::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Current published snapshot.
    pub fn snapshot(&self) -> WeatherSnapshot {
        self.state.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn last_error_message(&self) -> Option<String> {
        self.state.read().last_error.as_ref().map(|e| e.message.clone())
    }

    /// Fetch weather for every resort on the selected date and publish the
    /// result. Always completes; per-resort failures are reduced into the
    /// snapshot rather than propagated.
    pub async fn load_weather(&self, resorts: &[Resort], date: DateTime<Utc>) {
        self.load_weather_at(resorts, date, Utc::now()).await;
    }

    async fn load_weather_at(&self, resorts: &[Resort], date: DateTime<Utc>, now: DateTime<Utc>) {
        if resorts.is_empty() {
            // The clear counts as a run: it takes a token so an in-flight
            // slow run cannot republish its mapping over it.
            let mut state = self.state.write();
            self.generation.fetch_add(1, Ordering::SeqCst);
            state.weather_by_resort.clear();
            state.is_loading = false;
            return;
        }

        // Token issuance and the loading bracket share one critical
        // section, and the publish below re-checks the token under the
        // same lock. A superseded run therefore can never write its
        // bracket on top of a newer run's published snapshot.
        let run = {
            let mut state = self.state.write();
            let run = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.is_loading = true;
            state.last_error = None;
            run
        };

        // One classification per run; every resort shares the same date.
        let bucket = classify(now, date);
        let target_day = canonical_day(date);
        tracing::info!(?bucket, %target_day, resorts = resorts.len(), "loading weather");

        let fetches = resorts.iter().map(|resort| async move {
            let outcome = fetch_outcome(self.port.as_ref(), resort, bucket, target_day).await;
            (resort.id.clone(), outcome)
        });

        // Full barrier: no early exit, no sibling cancellation. join_all
        // yields outcomes in catalog order, which makes the last-failure
        // reduction below deterministic.
        let outcomes = join_all(fetches).await;
        let (mapping, last_error) = reduce_outcomes(outcomes);

        let mut state = self.state.write();
        if self.generation.load(Ordering::SeqCst) != run {
            tracing::debug!(run, "discarding stale run result");
            return;
        }
        *state = WeatherSnapshot {
            weather_by_resort: mapping,
            is_loading: false,
            last_error,
        };
    }
}

/// One resort's outcome for the classified date.
async fn fetch_outcome(
    port: &dyn WeatherFetch,
    resort: &Resort,
    bucket: DateBucket,
    target_day: chrono::NaiveDate,
) -> Result<WeatherReading, WeatherError> {
    match bucket {
        // No matching upstream data exists; a call would only produce a
        // misleading provider error.
        DateBucket::Unsupported(_) => Err(WeatherError::NoDataAvailable),

        DateBucket::Today => {
            let bundle = port
                .fetch_forecast_bundle(resort.latitude, resort.longitude)
                .await?;
            Ok(WeatherReading::from_current(
                &bundle.current,
                bundle.daily.first(),
                &resort.name,
            ))
        }

        DateBucket::Future(_) => {
            let bundle = port
                .fetch_forecast_bundle(resort.latitude, resort.longitude)
                .await?;
            // Match by calendar day rather than offset index; the provider
            // may omit or reorder days.
            bundle
                .daily
                .iter()
                .find(|daily| canonical_day(timestamp_utc(daily.dt)) == target_day)
                .map(|daily| WeatherReading::from_daily(daily, &resort.name))
                .ok_or(WeatherError::NoDataAvailable)
        }
    }
}

/// Reduce per-resort outcomes into the mapping and a single summary error.
///
/// Failures are dropped from the mapping and collapse into one scalar,
/// last-observed error. Collecting every failure keyed by resort would be
/// strictly more informative; the scalar is kept for parity with the
/// published behavior and lives here so the policy can change without
/// touching the orchestrator.
fn reduce_outcomes(
    outcomes: Vec<(String, Result<WeatherReading, WeatherError>)>,
) -> (HashMap<String, WeatherReading>, Option<LoadError>) {
    let mut mapping = HashMap::new();
    let mut last_error = None;

    for (resort_id, outcome) in outcomes {
        match outcome {
            Ok(reading) => {
                mapping.insert(resort_id, reading);
            }
            Err(err) => {
                tracing::warn!(%resort_id, error = %err, "resort fetch failed");
                last_error = Some(LoadError::from(&err));
            }
        }
    }

    (mapping, last_error)
}
