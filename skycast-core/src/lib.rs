//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - The weather code catalogue and icon/date presentation rules
//! - Forecast and geocoding provider abstractions with HTTP implementations
//! - Localized dictionaries and the view data assembled from a forecast
//! - The dashboard state and its search / locate flows
//! - Configuration & credentials handling
//!
//! It is used by `skycast-cli`, but can also be reused by other front ends.

pub mod app;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod locale;
pub mod model;
pub mod presentation;
pub mod provider;

pub use app::{AppState, Dashboard};
pub use catalog::WeatherCode;
pub use config::{Config, ProviderConfig};
pub use display::{DisplayOptions, HourlyStart, Stride, ViewModel};
pub use error::{GeolocationError, WeatherError};
pub use locale::{Lang, LocaleDictionary};
pub use model::{Coordinates, ForecastRecord, ForecastRequest, Place, VariableGroup};
pub use provider::{FixedPosition, ForecastProvider, GeocodingProvider, Geolocator};
