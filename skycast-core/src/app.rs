//! Dashboard state and the user-triggered flows that update it.
//!
//! Every flow takes `&mut self`, so flows on one dashboard run strictly one
//! after another and the last request issued is the last one applied.
//! A failed flow records a user message in [`AppState::error`] and leaves
//! the previously displayed forecast in place.

use std::path::Path;

use crate::{
    display::{self, DisplayOptions, HourlyStart, Stride, ViewModel},
    error::WeatherError,
    locale::{Lang, LocaleDictionary},
    model::{Coordinates, ForecastRecord, ForecastRequest},
    provider::{ForecastProvider, GeocodingProvider, Geolocator},
};

/// Everything the dashboard renders from. Replaced field by field by the
/// flows on [`Dashboard`], never shared.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub search: String,
    pub dark_mode: bool,
    pub show_more: bool,
    pub hourly_start: HourlyStart,
    pub coordinates: Option<Coordinates>,
    pub place_name: Option<String>,
    pub forecast: Option<ForecastRecord>,
    pub locale: Option<LocaleDictionary>,
    /// Message for the most recent failed flow; cleared by a successful fetch.
    pub error: Option<String>,
}

impl AppState {
    pub fn lang(&self) -> Lang {
        self.locale
            .as_ref()
            .map(LocaleDictionary::lang)
            .unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct Dashboard<F, G> {
    forecast: F,
    geocoder: G,
    state: AppState,
}

impl<F, G> Dashboard<F, G>
where
    F: ForecastProvider,
    G: GeocodingProvider,
{
    pub fn new(forecast: F, geocoder: G) -> Self {
        Self::with_state(forecast, geocoder, AppState::default())
    }

    pub fn with_state(forecast: F, geocoder: G, state: AppState) -> Self {
        Self {
            forecast,
            geocoder,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Resolve `query` to coordinates, then fetch its forecast. Nothing is
    /// fetched when the place cannot be resolved.
    pub async fn search(&mut self, query: &str) -> Result<(), WeatherError> {
        self.state.search = query.to_string();

        let query = query.trim();
        if query.is_empty() {
            return self.fail(WeatherError::EmptyQuery);
        }

        let place = match self.geocoder.resolve_coordinates(query).await {
            Ok(place) => place,
            Err(err) => return self.fail(err),
        };

        self.load_forecast(place.coordinates).await?;
        self.state.place_name = Some(place.name);
        Ok(())
    }

    /// Fetch the forecast for the device position, then name the place.
    /// A failed name lookup keeps the forecast and shows coordinates instead.
    pub async fn locate<L: Geolocator>(&mut self, geolocator: &L) -> Result<(), WeatherError> {
        let coordinates = match geolocator.current_position().await {
            Ok(coordinates) => coordinates,
            Err(err) => return self.fail(err.into()),
        };

        self.load_forecast(coordinates).await?;

        match self.geocoder.resolve_place_name(coordinates).await {
            Ok(name) => {
                self.state.search = name.clone();
                self.state.place_name = Some(name);
            }
            Err(err) => {
                tracing::warn!(
                    %coordinates,
                    error = %err,
                    "keeping forecast without a place name"
                );
                self.state.place_name = Some(coordinates.to_string());
            }
        }

        Ok(())
    }

    /// Swap the UI language. On failure the current dictionary stays.
    pub fn switch_locale(&mut self, tag: &str, dir: Option<&Path>) -> Result<(), WeatherError> {
        match LocaleDictionary::load(tag, dir) {
            Ok(dictionary) => {
                tracing::debug!(lang = %dictionary.lang(), "locale loaded");
                self.state.locale = Some(dictionary);
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn toggle_show_more(&mut self) -> bool {
        self.state.show_more = !self.state.show_more;
        self.state.show_more
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.state.dark_mode = !self.state.dark_mode;
        self.state.dark_mode
    }

    pub fn set_hourly_start(&mut self, start: HourlyStart) {
        self.state.hourly_start = start;
    }

    /// Render-ready view, or `None` while forecast or locale is still missing.
    pub fn view(&self) -> Option<ViewModel<'_>> {
        let forecast = self.state.forecast.as_ref()?;
        let locale = self.state.locale.as_ref()?;

        let place = match (&self.state.place_name, self.state.coordinates) {
            (Some(name), _) => name.clone(),
            (None, Some(coordinates)) => coordinates.to_string(),
            (None, None) => String::new(),
        };

        let options = DisplayOptions {
            stride: Stride::for_show_more(self.state.show_more),
            start: self.state.hourly_start,
        };

        Some(display::assemble(forecast, locale, &place, options))
    }

    async fn load_forecast(&mut self, coordinates: Coordinates) -> Result<(), WeatherError> {
        let request = ForecastRequest::new(coordinates);

        match self.forecast.fetch_forecast(&request).await {
            Ok(record) => {
                self.state.forecast = Some(record);
                self.state.coordinates = Some(coordinates);
                self.state.place_name = None;
                self.state.error = None;
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: WeatherError) -> Result<(), WeatherError> {
        self.state.error = Some(err.user_message());
        Err(err)
    }
}
