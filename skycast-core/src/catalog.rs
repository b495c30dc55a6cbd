//! Static catalogue of the weather codes reported by the forecast provider.
//!
//! Every lookup is total: codes outside the catalogue resolve to
//! [`UNKNOWN_DESCRIPTION`] and [`UNKNOWN_ICON`].

use serde::{Deserialize, Serialize};

pub const UNKNOWN_DESCRIPTION: &str = "Unknown weather";
pub const UNKNOWN_ICON: &str = "unknown";

/// Integer weather code as sent by the provider. The set is open; use
/// [`WeatherCode::is_known`] to check catalogue membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u16);

impl WeatherCode {
    pub const ALL: [WeatherCode; 26] = [
        WeatherCode(0),
        WeatherCode(1),
        WeatherCode(2),
        WeatherCode(3),
        WeatherCode(45),
        WeatherCode(48),
        WeatherCode(51),
        WeatherCode(53),
        WeatherCode(55),
        WeatherCode(61),
        WeatherCode(63),
        WeatherCode(65),
        WeatherCode(66),
        WeatherCode(67),
        WeatherCode(71),
        WeatherCode(73),
        WeatherCode(75),
        WeatherCode(77),
        WeatherCode(80),
        WeatherCode(81),
        WeatherCode(82),
        WeatherCode(85),
        WeatherCode(86),
        WeatherCode(95),
        WeatherCode(96),
        WeatherCode(99),
    ];

    pub fn is_known(self) -> bool {
        entry(self).is_some()
    }
}

impl std::fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// English description of `code`.
pub fn describe(code: WeatherCode) -> &'static str {
    entry(code).map_or(UNKNOWN_DESCRIPTION, |(description, _)| description)
}

/// Icon name without the day/night suffix or extension.
pub fn icon_base_name(code: WeatherCode) -> &'static str {
    entry(code).map_or(UNKNOWN_ICON, |(_, icon)| icon)
}

fn entry(code: WeatherCode) -> Option<(&'static str, &'static str)> {
    let pair = match code.0 {
        0 => ("Clear sky", "clear"),
        1 => ("Mainly clear", "clear"),
        2 => ("Partly cloudy", "partly-cloudy"),
        3 => ("Cloudy", "cloudy"),
        45 => ("Fog", "fog"),
        48 => ("Depositing rime fog", "fog"),
        51 => ("Light drizzle", "partly-cloudy-drizzle"),
        53 => ("Moderate drizzle", "partly-cloudy-drizzle"),
        55 => ("Heavy drizzle", "drizzle"),
        61 => ("Light rain", "raindrop"),
        63 => ("Moderate rain", "raindrops"),
        65 => ("Heavy rain", "rain"),
        66 => ("Light freezing rain", "light-freezing-rain"),
        67 => ("Heavy freezing rain", "heavy-freezing-rain"),
        71 => ("Light snow", "snowflake"),
        73 => ("Moderate snow", "snowflake"),
        75 => ("Heavy snow", "snowflake"),
        77 => ("Snow grains", "snow"),
        80 => ("Light showers of rain", "rain"),
        81 => ("Moderate showers of rain", "moderate-showers-of-rain"),
        82 => ("Heavy showers of rain", "heavy-showers-of-rain"),
        85 => ("Light showers of snow", "snow"),
        86 => ("Heavy showers of snow", "snow"),
        95 => ("Thunderstorms", "thunderstorms"),
        96 => ("Thunderstorms with light hail", "thunderstorms"),
        99 => ("Thunderstorms with heavy hail", "thunderstorms"),
        _ => return None,
    };
    Some(pair)
}
