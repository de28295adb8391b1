//! OpenWeatherMap One Call 3.0 client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{ForecastBundle, HistoricalBundle};

const ONE_CALL_API_BASE: &str = "https://api.openweathermap.org/data/3.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The fetch capability the orchestrator consumes.
///
/// `fetch_historical` is offered by the provider but never called by the
/// orchestrator: past dates are rejected before any port call. It stays on
/// the trait so past-date support needs no contract change.
#[async_trait]
pub trait WeatherFetch: Send + Sync {
    /// Current conditions plus daily forecasts for today and the next 7 days.
    async fn fetch_forecast_bundle(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastBundle, WeatherError>;

    /// Archived conditions around a past instant (timemachine endpoint).
    async fn fetch_historical(
        &self,
        latitude: f64,
        longitude: f64,
        at: DateTime<Utc>,
    ) -> Result<HistoricalBundle, WeatherError>;
}

pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    units: String,
    lang: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_options(api_key, "metric", "kr")
    }

    pub fn with_options(
        api_key: impl Into<String>,
        units: impl Into<String>,
        lang: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: ONE_CALL_API_BASE.to_string(),
            units: units.into(),
            lang: lang.into(),
        })
    }

    #[cfg(test)]
    pub fn new_with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            units: "metric".to_string(),
            lang: "kr".to_string(),
        }
    }

    fn check_request(&self, latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::MissingCredential);
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidRequest(format!(
                "coordinates out of range: {}, {}",
                latitude, longitude
            )));
        }
        Ok(())
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "One Call request failed");

        // A 401 is ambiguous upstream: a bad key and a missing One Call 3.0
        // subscription share the status code and differ only in the body.
        if status.as_u16() == 401 {
            if body.contains("Invalid API key") {
                return Err(WeatherError::MissingCredential);
            }
            return Err(WeatherError::SubscriptionRequired);
        }

        Err(WeatherError::RemoteStatus(status.as_u16()))
    }
}

#[async_trait]
impl WeatherFetch for OpenWeatherClient {
    #[instrument(skip(self), level = "info")]
    async fn fetch_forecast_bundle(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastBundle, WeatherError> {
        self.check_request(latitude, longitude)?;

        let url = format!("{}/onecall", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("exclude", "minutely,hourly".to_string()),
                ("appid", self.api_key.clone()),
                ("units", self.units.clone()),
                ("lang", self.lang.clone()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }

    #[instrument(skip(self), level = "info")]
    async fn fetch_historical(
        &self,
        latitude: f64,
        longitude: f64,
        at: DateTime<Utc>,
    ) -> Result<HistoricalBundle, WeatherError> {
        self.check_request(latitude, longitude)?;

        let url = format!("{}/onecall/timemachine", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("dt", at.timestamp().to_string()),
                ("appid", self.api_key.clone()),
                ("units", self.units.clone()),
                ("lang", self.lang.clone()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn one_call_body() -> serde_json::Value {
        serde_json::json!({
            "current": {
                "dt": 1767139200,
                "temp": -3.2,
                "feels_like": -8.0,
                "humidity": 78,
                "wind_speed": 12.4,
                "weather": [{"description": "snow", "icon": "13d"}]
            },
            "daily": [
                {
                    "dt": 1767139200,
                    "sunrise": 1767117600,
                    "sunset": 1767153600,
                    "temp": {"day": -1.0, "min": -7.0, "max": 0.5},
                    "feels_like": {"day": -4.0},
                    "humidity": 70,
                    "wind_speed": 8.0,
                    "weather": [{"description": "snow", "icon": "13d"}]
                }
            ]
        })
    }

    #[tokio::test]
    async fn fetch_forecast_bundle_decodes_one_call_schema() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/onecall"))
            .and(query_param("appid", "test_key"))
            .and(query_param("units", "metric"))
            .and(query_param("exclude", "minutely,hourly"))
            .respond_with(ResponseTemplate::new(200).set_body_json(one_call_body()))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::new_with_base_url("test_key", &mock_server.uri());
        let bundle = client.fetch_forecast_bundle(37.2067, 128.8390).await.unwrap();

        assert_eq!(bundle.current.temp, -3.2);
        assert_eq!(bundle.daily.len(), 1);
        assert_eq!(bundle.daily[0].temp.day, -1.0);
        assert_eq!(bundle.daily[0].weather[0].icon, "13d");
    }

    #[tokio::test]
    async fn invalid_api_key_body_maps_to_missing_credential() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/onecall"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"cod":401,"message":"Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::new_with_base_url("bad_key", &mock_server.uri());
        let err = client.fetch_forecast_bundle(37.0, 128.0).await.unwrap_err();

        assert!(matches!(err, WeatherError::MissingCredential));
    }

    #[tokio::test]
    async fn other_401_maps_to_subscription_required() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/onecall"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"cod":401,"message":"Please note that using One Call 3.0 requires a separate subscription"}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::new_with_base_url("free_tier_key", &mock_server.uri());
        let err = client.fetch_forecast_bundle(37.0, 128.0).await.unwrap_err();

        assert!(matches!(err, WeatherError::SubscriptionRequired));
    }

    #[tokio::test]
    async fn server_error_maps_to_remote_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/onecall"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::new_with_base_url("test_key", &mock_server.uri());
        let err = client.fetch_forecast_bundle(37.0, 128.0).await.unwrap_err();

        assert!(matches!(err, WeatherError::RemoteStatus(500)));
    }

    #[tokio::test]
    async fn empty_api_key_fails_before_any_request() {
        // No mock mounted: an attempted request would error differently.
        let client = OpenWeatherClient::new_with_base_url("", "http://127.0.0.1:9");
        let err = client.fetch_forecast_bundle(37.0, 128.0).await.unwrap_err();

        assert!(matches!(err, WeatherError::MissingCredential));
    }

    #[tokio::test]
    async fn out_of_range_coordinates_are_rejected() {
        let client = OpenWeatherClient::new_with_base_url("test_key", "http://127.0.0.1:9");
        let err = client.fetch_forecast_bundle(91.0, 0.0).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[tokio::test]
    async fn fetch_historical_uses_timemachine_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/onecall/timemachine"))
            .and(query_param("dt", "1700000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "dt": 1700000000,
                    "temp": 2.0,
                    "feels_like": 0.0,
                    "humidity": 60,
                    "wind_speed": 3.0,
                    "weather": [{"description": "mist", "icon": "50d"}]
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::new_with_base_url("test_key", &mock_server.uri());
        let at = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let bundle = client.fetch_historical(37.0, 128.0, at).await.unwrap();

        assert_eq!(bundle.data.len(), 1);
        assert_eq!(bundle.data[0].weather[0].description, "mist");
    }
}
