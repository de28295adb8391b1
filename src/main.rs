use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use slopemate_resorts::{catalog, DateNavigator, ResortWeatherStore};
use slopemate_weather::OpenWeatherClient;

#[tokio::main]
async fn main() -> Result<()> {
    slopemate_core::init()?;

    let (config, _validation) = slopemate_core::Config::load_validated()?;
    let weather = &config.weather;

    let api_key = weather.resolve_api_key().unwrap_or_default();
    let client =
        OpenWeatherClient::with_options(api_key, weather.units.as_str(), weather.lang.as_str())?;

    let store = ResortWeatherStore::new(Arc::new(client));
    let resorts = catalog();

    // Optional day offset from today, clamped by the navigator to 0..=7.
    let offset: i64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(0);

    let mut navigator = DateNavigator::new(Utc::now());
    navigator.move_by(offset);
    let selected = navigator.selected();

    tracing::info!(%selected, "fetching resort weather");
    store.load_weather(&resorts, selected).await;

    let snapshot = store.snapshot();
    println!("Resort weather for {}", selected.format("%Y-%m-%d"));
    for resort in &resorts {
        match snapshot.weather_by_resort.get(&resort.id) {
            Some(reading) => println!(
                "  {:<12} {:>6.1}°C  feels {:>6.1}°C  wind {:>4.1} m/s  {}",
                resort.name,
                reading.temperature,
                reading.feels_like,
                reading.wind_speed,
                reading.description,
            ),
            None => println!("  {:<12} (no data)", resort.name),
        }
    }

    if let Some(message) = store.last_error_message() {
        println!("\nWarning: {}", message);
    }

    Ok(())
}
