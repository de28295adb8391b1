//! Weather provider error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("OpenWeatherMap API key is not configured")]
    MissingCredential,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Weather request failed with HTTP {0}")]
    RemoteStatus(u16),

    #[error("One Call API 3.0 subscription required")]
    SubscriptionRequired,

    #[error("No weather data available for the requested date")]
    NoDataAvailable,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Coarse error category, usable where the full error cannot travel
/// (it is not `Clone` because of the wrapped `reqwest::Error`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingCredential,
    InvalidRequest,
    RemoteStatus,
    SubscriptionRequired,
    NoDataAvailable,
    Network,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::MissingCredential => ErrorKind::MissingCredential,
            WeatherError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            WeatherError::RemoteStatus(_) => ErrorKind::RemoteStatus,
            WeatherError::SubscriptionRequired => ErrorKind::SubscriptionRequired,
            WeatherError::NoDataAvailable => ErrorKind::NoDataAvailable,
            WeatherError::Network(_) => ErrorKind::Network,
        }
    }

    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::MissingCredential => {
                "The OpenWeatherMap API key is not configured.".to_string()
            }
            WeatherError::InvalidRequest(_) => "The request was invalid.".to_string(),
            WeatherError::RemoteStatus(code) => {
                format!("Could not load weather data. (HTTP {})", code)
            }
            WeatherError::SubscriptionRequired => {
                "A One Call API 3.0 subscription is required.".to_string()
            }
            WeatherError::NoDataAvailable => {
                "No weather data is available for that date.".to_string()
            }
            WeatherError::Network(_) => "Network error. Check your connection.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            WeatherError::MissingCredential.kind(),
            ErrorKind::MissingCredential
        );
        assert_eq!(WeatherError::RemoteStatus(502).kind(), ErrorKind::RemoteStatus);
        assert_eq!(WeatherError::NoDataAvailable.kind(), ErrorKind::NoDataAvailable);
    }

    #[test]
    fn user_message_includes_status_code() {
        let err = WeatherError::RemoteStatus(503);
        assert!(err.user_message().contains("503"));
    }

    #[test]
    fn user_messages_are_non_empty() {
        let errors = [
            WeatherError::MissingCredential,
            WeatherError::InvalidRequest("bad coords".into()),
            WeatherError::RemoteStatus(500),
            WeatherError::SubscriptionRequired,
            WeatherError::NoDataAvailable,
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
