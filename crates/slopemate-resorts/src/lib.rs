//! Resort catalog, date navigation, and the per-resort weather orchestrator.

pub mod catalog;
pub mod date;
pub mod store;

pub use catalog::{catalog, OperatingHours, Resort};
pub use date::{
    canonical_day, classify, DateBucket, DateNavigator, UnsupportedReason, CANONICAL_TZ,
    MAX_FORECAST_DAYS,
};
pub use store::{LoadError, ResortWeatherStore, WeatherSnapshot};
