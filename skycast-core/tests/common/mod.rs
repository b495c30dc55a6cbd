#![allow(dead_code)]

use serde_json::{Value, json};
use skycast_core::{
    Dashboard,
    provider::{openmeteo::OpenMeteoClient, openweather::OpenWeatherGeocoder},
};
use wiremock::MockServer;

pub const API_KEY: &str = "TEST_KEY";

pub fn forecast_client(server: &MockServer) -> OpenMeteoClient {
    OpenMeteoClient::with_client(
        reqwest::Client::new(),
        format!("{}/v1/forecast", server.uri()),
    )
}

pub fn geocoder(server: &MockServer) -> OpenWeatherGeocoder {
    OpenWeatherGeocoder::with_client(
        reqwest::Client::new(),
        API_KEY.to_string(),
        format!("{}/geo/1.0", server.uri()),
    )
}

pub fn dashboard(server: &MockServer) -> Dashboard<OpenMeteoClient, OpenWeatherGeocoder> {
    Dashboard::new(forecast_client(server), geocoder(server))
}

/// Open-Meteo shaped payload: 24 hourly and 3 daily entries for Madrid.
pub fn forecast_body(weathercode: u16) -> Value {
    let times: Vec<_> = (0..24).map(|h| format!("2024-10-16T{h:02}:00")).collect();
    let temperatures: Vec<_> = (0..24).map(|h| 12.0 + f64::from(h) * 0.4).collect();
    json!({
        "latitude": 40.4,
        "longitude": -3.7,
        "timezone": "Europe/Madrid",
        "current": {
            "time": "2024-10-16T14:00",
            "interval": 900,
            "temperature_2m": 19.8,
            "wind_speed_10m": 11.3,
            "wind_gusts_10m": 27.7,
            "relative_humidity_2m": 71,
            "surface_pressure": 941.5,
            "weathercode": weathercode
        },
        "hourly": {
            "time": times,
            "temperature_2m": temperatures,
            "wind_speed_10m": vec![9.0; 24],
            "relative_humidity_2m": vec![70; 24],
            "pressure_msl": vec![1015.2; 24],
            "cloudcover": vec![80; 24],
            "precipitation": vec![0.2; 24],
            "weathercode": vec![weathercode; 24]
        },
        "daily": {
            "time": ["2024-10-16", "2024-10-17", "2024-10-18"],
            "weathercode": [weathercode, 2, 95],
            "temperature_2m_max": [20.9, 18.2, 17.5],
            "temperature_2m_min": [12.4, 10.0, 9.6],
            "sunrise": ["2024-10-16T08:21", "2024-10-17T08:22", "2024-10-18T08:23"],
            "sunset": ["2024-10-16T19:15", "2024-10-17T19:13", "2024-10-18T19:12"]
        }
    })
}

pub fn madrid_candidates() -> Value {
    json!([{
        "name": "Madrid",
        "local_names": { "es": "Madrid" },
        "lat": 40.4167,
        "lon": -3.7033,
        "country": "ES",
        "state": "Community of Madrid"
    }])
}
