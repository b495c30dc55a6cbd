use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use inquire::{Confirm, Password, Select};
use skycast_core::{
    Config, Coordinates, Dashboard, FixedPosition, ForecastProvider, GeocodingProvider,
    HourlyStart, Lang, WeatherCode, WeatherError, catalog,
    presentation::{self, TimeOfDay},
    provider::{self, openweather},
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "Current, hourly and daily weather in your terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that renders a forecast.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Language tag: en, pt or es. Defaults to the configured language.
    #[arg(long)]
    pub lang: Option<String>,

    /// Show the hourly forecast every two hours instead of every four.
    #[arg(long)]
    pub more: bool,

    /// Start the hourly forecast at the location's current hour.
    #[arg(long)]
    pub from_now: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the geocoding API key and display defaults.
    Configure,

    /// Show the forecast for a city.
    Show {
        /// City or place name.
        city: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show the forecast for a position given as coordinates.
    Here {
        /// Latitude in degrees.
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude in degrees.
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Print the icon path and description for a weather code.
    Icon {
        /// Weather code as reported by the forecast provider.
        code: u16,

        /// Local timestamp, e.g. 2024-10-16T21:00; daytime if omitted.
        timestamp: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, view } => {
                let config = Config::load()?;
                let mut dash = Dashboard::new(
                    provider::forecast_from_config(&config)?,
                    provider::geocoder_from_config(&config)?,
                );
                prepare(&mut dash, &config, &view)?;

                let outcome = dash.search(&city).await;
                finish(&dash, outcome)
            }
            Command::Here { lat, lon, view } => {
                let config = Config::load()?;
                let position = match (lat, lon) {
                    (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)?),
                    _ => None,
                };

                let geocoder = match provider::geocoder_from_config(&config) {
                    Ok(geocoder) => geocoder,
                    Err(err) => {
                        tracing::warn!("{err:#}");
                        // Place names are optional here; the lookup will fail and
                        // the coordinates are shown instead.
                        openweather::OpenWeatherGeocoder::with_client(
                            provider::http_client(&config)?,
                            String::new(),
                            openweather::GEOCODING_URL,
                        )
                    }
                };

                let forecast = provider::forecast_from_config(&config)?;
                let mut dash = Dashboard::new(forecast, geocoder);
                prepare(&mut dash, &config, &view)?;

                let outcome = dash.locate(&FixedPosition(position)).await;
                finish(&dash, outcome)
            }
            Command::Icon { code, timestamp } => {
                let code = WeatherCode(code);
                let timestamp = timestamp.unwrap_or_default();

                println!("{}", presentation::icon_path(code, &timestamp));
                println!("{}", catalog::describe(code));
                if !timestamp.is_empty() {
                    println!("{}", TimeOfDay::of(&timestamp).as_str());
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let prompt = if config.is_geocoding_configured() {
        "OpenWeather API key (leave empty to keep the current one):"
    } else {
        "OpenWeather API key:"
    };
    let key = Password::new(prompt)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !key.trim().is_empty() {
        config.set_geocoding_api_key(key.trim().to_string());
    }

    let current = config.default_lang()?;
    let start = Lang::all().iter().position(|l| *l == current).unwrap_or(0);
    let lang = Select::new("Default language:", Lang::all().to_vec())
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read language")?;
    config.set_default_lang(lang);

    config.show_more = Confirm::new("Show the hourly forecast every two hours?")
        .with_default(config.show_more)
        .prompt()
        .context("Failed to read hourly preference")?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

/// Apply language and view preferences before the first fetch.
fn prepare<F, G>(
    dash: &mut Dashboard<F, G>,
    config: &Config,
    view: &ViewArgs,
) -> anyhow::Result<()>
where
    F: ForecastProvider,
    G: GeocodingProvider,
{
    let tag = match &view.lang {
        Some(tag) => tag.clone(),
        None => config.default_lang()?.as_str().to_string(),
    };

    dash.switch_locale(&tag, config.locale_dir.as_deref())
        .map_err(|err| anyhow!(err.user_message()))?;

    if view.more || config.show_more {
        dash.toggle_show_more();
    }
    if view.from_now {
        dash.set_hourly_start(HourlyStart::CurrentHour);
    }

    Ok(())
}

/// Print whatever can be rendered, then report the flow's error if any.
fn finish<F, G>(
    dash: &Dashboard<F, G>,
    outcome: Result<(), WeatherError>,
) -> anyhow::Result<()>
where
    F: ForecastProvider,
    G: GeocodingProvider,
{
    match dash.view() {
        Some(view) => print!("{}", render::render(&view)?),
        None => {
            if let Some(locale) = &dash.state().locale {
                eprintln!("{}", locale.label("tutorial"));
            }
        }
    }

    match outcome {
        Ok(()) => Ok(()),
        Err(err) if dash.view().is_some() => {
            eprintln!("{}", err.user_message());
            Ok(())
        }
        Err(err) => Err(anyhow!(err.user_message())),
    }
}
