//! Wire types for the One Call 3.0 API and the normalized reading built
//! from them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One successful forecast fetch: current conditions plus daily entries
/// (today first, then up to 7 future days in ascending order).
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastBundle {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather: Vec<ConditionTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub dt: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub temp: DayTemperature,
    pub feels_like: DayFeelsLike,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather: Vec<ConditionTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayTemperature {
    pub day: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayFeelsLike {
    pub day: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionTag {
    pub description: String,
    pub icon: String,
}

/// Timemachine endpoint response. The orchestrator never requests it (past
/// dates are rejected before any port call); the schema is kept so past-date
/// support can be added without a provider change.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalBundle {
    pub data: Vec<HistoricalSample>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalSample {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather: Vec<ConditionTag>,
}

const FALLBACK_DESCRIPTION: &str = "Unknown";
const FALLBACK_ICON: &str = "01d";

/// Normalized, display-ready weather for one resort and one day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub description: String,
    pub icon_code: String,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub resort_name: String,
    pub observed_at: DateTime<Utc>,
}

impl WeatherReading {
    /// Reading for "today" built from current conditions. Current weather
    /// carries no sun times of its own and borrows them from today's daily
    /// entry; without one, "now" stands in.
    pub fn from_current(
        current: &CurrentConditions,
        today_daily: Option<&DailyForecast>,
        resort_name: &str,
    ) -> Self {
        let (sunrise, sunset) = match today_daily {
            Some(daily) => (timestamp_utc(daily.sunrise), timestamp_utc(daily.sunset)),
            None => {
                let now = Utc::now();
                (now, now)
            }
        };
        let condition = current.weather.first();

        Self {
            temperature: current.temp,
            feels_like: current.feels_like,
            humidity: current.humidity,
            wind_speed: current.wind_speed,
            description: describe(condition),
            icon_code: icon(condition),
            sunrise,
            sunset,
            resort_name: resort_name.to_string(),
            observed_at: timestamp_utc(current.dt),
        }
    }

    /// Reading for a future day built from one daily forecast entry.
    pub fn from_daily(daily: &DailyForecast, resort_name: &str) -> Self {
        let condition = daily.weather.first();

        Self {
            temperature: daily.temp.day,
            feels_like: daily.feels_like.day,
            humidity: daily.humidity,
            wind_speed: daily.wind_speed,
            description: describe(condition),
            icon_code: icon(condition),
            sunrise: timestamp_utc(daily.sunrise),
            sunset: timestamp_utc(daily.sunset),
            resort_name: resort_name.to_string(),
            observed_at: timestamp_utc(daily.dt),
        }
    }

    /// Reading from a timemachine sample. Historical data has no sun times;
    /// "now" stands in. Unreachable through the orchestrator today, kept for
    /// the preserved historical port capability.
    pub fn from_historical(sample: &HistoricalSample, resort_name: &str) -> Self {
        let now = Utc::now();
        let condition = sample.weather.first();

        Self {
            temperature: sample.temp,
            feels_like: sample.feels_like,
            humidity: sample.humidity,
            wind_speed: sample.wind_speed,
            description: describe(condition),
            icon_code: icon(condition),
            sunrise: now,
            sunset: now,
            resort_name: resort_name.to_string(),
            observed_at: timestamp_utc(sample.dt),
        }
    }
}

/// Unix seconds to UTC, clamped to the epoch on out-of-range input.
pub fn timestamp_utc(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

fn describe(condition: Option<&ConditionTag>) -> String {
    condition
        .map(|c| c.description.clone())
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
}

fn icon(condition: Option<&ConditionTag>) -> String {
    condition
        .map(|c| c.icon.clone())
        .unwrap_or_else(|| FALLBACK_ICON.to_string())
}
