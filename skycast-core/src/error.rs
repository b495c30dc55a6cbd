use thiserror::Error;

/// External service a [`WeatherError::NetworkFailure`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Geocoding,
    ReverseGeocoding,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::Geocoding => f.write_str("geocoding"),
            Service::ReverseGeocoding => f.write_str("reverse geocoding"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("geolocation permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("geolocation timed out")]
    Timeout,
    #[error("geolocation is not supported")]
    Unsupported,
}

/// Every failure the dashboard flows can surface to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    #[error("empty search query")]
    EmptyQuery,

    #[error("no place found for '{0}'")]
    NotFound(String),

    #[error("{service} request failed: {reason}")]
    NetworkFailure { service: Service, reason: String },

    #[error("forecast unavailable: {0}")]
    ForecastUnavailable(String),

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    #[error("locale '{tag}' could not be loaded: {reason}")]
    LocaleLoad { tag: String, reason: String },
}

impl WeatherError {
    /// Sentence shown to the user in place of the technical error.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::EmptyQuery => "Please enter a city name.".to_string(),
            WeatherError::NotFound(place) => {
                format!("No place called '{place}' was found. Check the city name.")
            }
            WeatherError::NetworkFailure { service: Service::Geocoding, .. } => {
                "Unable to fetch coordinates. Check your city name.".to_string()
            }
            WeatherError::NetworkFailure { service: Service::ReverseGeocoding, .. } => {
                "Unable to fetch city name.".to_string()
            }
            WeatherError::ForecastUnavailable(_) => "Unable to fetch weather data.".to_string(),
            WeatherError::Geolocation(GeolocationError::PermissionDenied) => {
                "User denied the request for Geolocation.".to_string()
            }
            WeatherError::Geolocation(GeolocationError::Unavailable) => {
                "Location information is unavailable.".to_string()
            }
            WeatherError::Geolocation(GeolocationError::Timeout) => {
                "The request to get user location timed out.".to_string()
            }
            WeatherError::Geolocation(GeolocationError::Unsupported) => {
                "Geolocation is not supported on this device.".to_string()
            }
            WeatherError::LocaleLoad { tag, .. } => format!("Unable to load language '{tag}'."),
        }
    }
}
