use serde::{Deserialize, Serialize};

use crate::catalog::WeatherCode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> anyhow::Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            anyhow::bail!("Latitude {latitude} is outside -90..=90");
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            anyhow::bail!("Longitude {longitude} is outside -180..=180");
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A geocoded place: the provider's first candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: Option<String>,
    pub coordinates: Coordinates,
}

/// Forecast variable groups that can be requested independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableGroup {
    Current,
    Hourly,
    Daily,
}

impl VariableGroup {
    pub const ALL: [VariableGroup; 3] = [
        VariableGroup::Current,
        VariableGroup::Hourly,
        VariableGroup::Daily,
    ];

    /// Query parameter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableGroup::Current => "current",
            VariableGroup::Hourly => "hourly",
            VariableGroup::Daily => "daily",
        }
    }

    /// Comma separated variables requested for the group.
    pub fn variables(&self) -> &'static str {
        match self {
            VariableGroup::Current => {
                "temperature_2m,wind_speed_10m,wind_gusts_10m,relative_humidity_2m,surface_pressure,weathercode"
            }
            VariableGroup::Hourly => {
                "temperature_2m,wind_speed_10m,relative_humidity_2m,pressure_msl,cloudcover,precipitation,weathercode"
            }
            VariableGroup::Daily => {
                "weathercode,temperature_2m_max,temperature_2m_min,sunrise,sunset"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub coordinates: Coordinates,
    pub groups: Vec<VariableGroup>,
}

impl ForecastRequest {
    /// Request every variable group.
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            groups: VariableGroup::ALL.to_vec(),
        }
    }

    pub fn with_groups(coordinates: Coordinates, groups: &[VariableGroup]) -> Self {
        Self {
            coordinates,
            groups: groups.to_vec(),
        }
    }
}

/// One forecast snapshot for a location. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub hourly: HourlySeries,
    #[serde(default)]
    pub daily: DailySeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Local time at the location, `YYYY-MM-DDTHH:MM`.
    pub time: String,
    pub temperature_2m: f64,
    pub wind_speed_10m: f64,
    pub wind_gusts_10m: f64,
    pub relative_humidity_2m: f64,
    #[serde(default)]
    pub surface_pressure: Option<f64>,
    pub weathercode: WeatherCode,
}

/// Parallel per-hour sequences, all aligned on `time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub wind_speed_10m: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub pressure_msl: Vec<f64>,
    pub cloudcover: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub weathercode: Vec<WeatherCode>,
}

/// Parallel per-day sequences; index 0 is today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weathercode: Vec<WeatherCode>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    fn column_lengths(&self) -> [(&'static str, usize); 7] {
        [
            ("temperature_2m", self.temperature_2m.len()),
            ("wind_speed_10m", self.wind_speed_10m.len()),
            ("relative_humidity_2m", self.relative_humidity_2m.len()),
            ("pressure_msl", self.pressure_msl.len()),
            ("cloudcover", self.cloudcover.len()),
            ("precipitation", self.precipitation.len()),
            ("weathercode", self.weathercode.len()),
        ]
    }
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    fn column_lengths(&self) -> [(&'static str, usize); 5] {
        [
            ("weathercode", self.weathercode.len()),
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("sunrise", self.sunrise.len()),
            ("sunset", self.sunset.len()),
        ]
    }
}

impl ForecastRecord {
    /// Check that every column of `hourly` and `daily` lines up with its
    /// `time` column. Columns of an unrequested group are all empty and pass.
    pub fn validate(&self) -> anyhow::Result<()> {
        check_columns("hourly", self.hourly.len(), &self.hourly.column_lengths())?;
        check_columns("daily", self.daily.len(), &self.daily.column_lengths())?;
        Ok(())
    }
}

fn check_columns(
    section: &str,
    expected: usize,
    columns: &[(&str, usize)],
) -> anyhow::Result<()> {
    for (name, len) in columns {
        if *len != expected {
            anyhow::bail!("{section}.{name} has {len} entries but {section}.time has {expected}");
        }
    }
    Ok(())
}
