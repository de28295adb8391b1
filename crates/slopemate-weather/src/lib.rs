//! Weather provider access for SlopeMate
//!
//! Decodes the OpenWeatherMap One Call 3.0 schema and exposes it behind the
//! `WeatherFetch` trait so callers can swap the HTTP client for a fake.

pub mod client;
pub mod error;
pub mod types;

pub use client::{OpenWeatherClient, WeatherFetch};
pub use error::{ErrorKind, WeatherError};
pub use types::{
    timestamp_utc, ConditionTag, CurrentConditions, DailyForecast, DayFeelsLike, DayTemperature,
    ForecastBundle, HistoricalBundle, HistoricalSample, WeatherReading,
};
