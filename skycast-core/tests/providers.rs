mod common;

use serde_json::json;
use skycast_core::{
    Coordinates, ForecastProvider, ForecastRequest, GeocodingProvider, VariableGroup, WeatherCode,
    WeatherError, error::Service,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn coords(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates::new(latitude, longitude).unwrap()
}

#[tokio::test]
async fn forecast_request_carries_coordinates_groups_and_timezone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "40.4"))
        .and(query_param("longitude", "-3.7"))
        .and(query_param("timezone", "auto"))
        .and(query_param("current", VariableGroup::Current.variables()))
        .and(query_param("hourly", VariableGroup::Hourly.variables()))
        .and(query_param("daily", VariableGroup::Daily.variables()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::forecast_body(61)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = ForecastRequest::new(coords(40.4, -3.7));
    let record = common::forecast_client(&server)
        .fetch_forecast(&request)
        .await
        .unwrap();

    let current = record.current.expect("current requested");
    assert_eq!(current.weathercode, WeatherCode(61));
    assert_eq!(record.hourly.len(), 24);
    assert_eq!(record.daily.len(), 3);
    assert_eq!(record.timezone.as_deref(), Some("Europe/Madrid"));
}

#[tokio::test]
async fn daily_only_request_decodes_partial_record() {
    let server = MockServer::start().await;
    let body = json!({
        "latitude": 40.4,
        "longitude": -3.7,
        "daily": {
            "time": ["2024-10-16"],
            "weathercode": [0],
            "temperature_2m_max": [25.1],
            "temperature_2m_min": [14.0],
            "sunrise": ["2024-10-16T08:21"],
            "sunset": ["2024-10-16T19:15"]
        }
    });
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("daily", VariableGroup::Daily.variables()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let request = ForecastRequest::with_groups(coords(40.4, -3.7), &[VariableGroup::Daily]);
    let record = common::forecast_client(&server)
        .fetch_forecast(&request)
        .await
        .unwrap();

    assert!(record.current.is_none());
    assert!(record.hourly.is_empty());
    assert_eq!(record.daily.temperature_2m_max, vec![25.1]);
}

#[tokio::test]
async fn server_error_is_forecast_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let request = ForecastRequest::new(coords(1.0, 2.0));
    let err = common::forecast_client(&server)
        .fetch_forecast(&request)
        .await
        .unwrap_err();

    match &err {
        WeatherError::ForecastUnavailable(reason) => assert!(reason.contains("503")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "Unable to fetch weather data.");
}

#[tokio::test]
async fn misaligned_series_are_rejected() {
    let server = MockServer::start().await;
    let mut body = common::forecast_body(0);
    body["hourly"]["temperature_2m"] = json!([1.0, 2.0]);
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let request = ForecastRequest::new(coords(1.0, 2.0));
    let err = common::forecast_client(&server)
        .fetch_forecast(&request)
        .await
        .unwrap_err();

    match err {
        WeatherError::ForecastUnavailable(reason) => {
            assert!(reason.contains("misaligned"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_forecast_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>oops</html>"),
        )
        .mount(&server)
        .await;

    let request = ForecastRequest::new(coords(1.0, 2.0));
    let err = common::forecast_client(&server)
        .fetch_forecast(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, WeatherError::ForecastUnavailable(_)));
}

#[tokio::test]
async fn direct_geocoding_uses_first_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "Madrid"))
        .and(query_param("limit", "1"))
        .and(query_param("appid", common::API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::madrid_candidates()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let place = common::geocoder(&server)
        .resolve_coordinates("Madrid")
        .await
        .unwrap();

    assert_eq!(place.name, "Madrid");
    assert_eq!(place.country.as_deref(), Some("ES"));
    assert_eq!(place.coordinates, coords(40.4167, -3.7033));
}

#[tokio::test]
async fn empty_candidate_list_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = common::geocoder(&server)
        .resolve_coordinates("Nonexistentville")
        .await
        .unwrap_err();
    assert_eq!(err, WeatherError::NotFound("Nonexistentville".to_string()));
}

#[tokio::test]
async fn reverse_geocoding_returns_first_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/reverse"))
        .and(query_param("lat", "38.7"))
        .and(query_param("lon", "-9.1"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Lisbon", "lat": 38.7077, "lon": -9.1365, "country": "PT" },
            { "name": "Ignored", "lat": 0.0, "lon": 0.0 }
        ])))
        .mount(&server)
        .await;

    let name = common::geocoder(&server)
        .resolve_place_name(coords(38.7, -9.1))
        .await
        .unwrap();
    assert_eq!(name, "Lisbon");
}

#[tokio::test]
async fn rejected_api_key_is_a_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/reverse"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "cod": 401, "message": "Invalid API key" })),
        )
        .mount(&server)
        .await;

    let err = common::geocoder(&server)
        .resolve_place_name(coords(0.0, 0.0))
        .await
        .unwrap_err();

    match &err {
        WeatherError::NetworkFailure { service, reason } => {
            assert_eq!(*service, Service::ReverseGeocoding);
            assert!(reason.contains("401"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.user_message().contains("Invalid API key"));
}
