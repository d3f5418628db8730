//! Property tests for the chart orchestration service, driven through test
//! doubles for both external collaborators.

mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use natal_rust::models::Body;
use natal_rust::services::{BirthInput, ChartError, ChartService};

use support::{
    CountingEphemeris, EmptyGeocoder, FailingEphemeris, FailingGeocoder, FixedGeocoder,
};

fn birth_input() -> BirthInput {
    BirthInput {
        name: "Ada Lovelace".to_string(),
        birth_date: "1815-12-10".to_string(),
        birth_time: "10:30".to_string(),
        birth_place: "London".to_string(),
    }
}

#[tokio::test]
async fn test_chart_has_ten_planets_in_canonical_order() {
    let ephemeris = Arc::new(CountingEphemeris::new());
    let service = ChartService::new(Arc::new(FixedGeocoder::paris()), ephemeris.clone());

    let chart = service.compute_chart(&birth_input()).await.unwrap();

    assert_eq!(chart.planets.len(), 10);
    for (position, body) in chart.planets.iter().zip(Body::ALL) {
        assert_eq!(position.name, body.display_name());
        assert!(
            (0.0..360.0).contains(&position.longitude),
            "{} out of range: {}",
            position.name,
            position.longitude
        );
    }
    assert_eq!(ephemeris.position_calls.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn test_chart_has_twelve_houses_numbered_ascending() {
    let service = ChartService::new(
        Arc::new(FixedGeocoder::paris()),
        Arc::new(CountingEphemeris::new()),
    );

    let chart = service.compute_chart(&birth_input()).await.unwrap();

    assert_eq!(chart.houses.len(), 12);
    for (i, cusp) in chart.houses.iter().enumerate() {
        assert_eq!(cusp.house, (i + 1) as u8);
        assert!((0.0..360.0).contains(&cusp.longitude));
    }
}

#[tokio::test]
async fn test_name_is_echoed_verbatim() {
    let service = ChartService::new(
        Arc::new(FixedGeocoder::paris()),
        Arc::new(CountingEphemeris::new()),
    );

    let chart = service.compute_chart(&birth_input()).await.unwrap();
    assert_eq!(chart.name, "Ada Lovelace");
}

#[tokio::test]
async fn test_unknown_place_short_circuits_before_ephemeris() {
    let ephemeris = Arc::new(CountingEphemeris::new());
    let service = ChartService::new(Arc::new(EmptyGeocoder), ephemeris.clone());

    let err = service.compute_chart(&birth_input()).await.unwrap_err();

    assert!(matches!(err, ChartError::PlaceNotFound));
    assert_eq!(err.to_string(), "birth place not found");
    assert_eq!(ephemeris.total_calls(), 0);
}

#[tokio::test]
async fn test_single_body_failure_fails_whole_chart() {
    let ephemeris = Arc::new(FailingEphemeris::new(Body::Saturn));
    let service = ChartService::new(Arc::new(FixedGeocoder::paris()), ephemeris.clone());

    let err = service.compute_chart(&birth_input()).await.unwrap_err();
    assert!(matches!(err, ChartError::Ephemeris(_)));

    // Lookups run one at a time; Saturn is the seventh body, so the loop
    // stops there and later bodies are never requested.
    assert_eq!(ephemeris.position_calls.load(Ordering::SeqCst), 7);
}

#[tokio::test]
async fn test_geocoder_outage_is_reported_as_geocode_error() {
    let service = ChartService::new(
        Arc::new(FailingGeocoder),
        Arc::new(CountingEphemeris::new()),
    );

    let err = service.compute_chart(&birth_input()).await.unwrap_err();
    assert!(matches!(err, ChartError::Geocode(_)));
}

#[tokio::test]
async fn test_malformed_date_rejected_before_geocoding() {
    let service = ChartService::new(Arc::new(EmptyGeocoder), Arc::new(CountingEphemeris::new()));

    let mut input = birth_input();
    input.birth_date = "1815-13-10".to_string();

    // With an empty geocoder, reaching the lookup would yield PlaceNotFound;
    // invalid input must win instead.
    let err = service.compute_chart(&input).await.unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[tokio::test]
async fn test_empty_birth_place_rejected() {
    let service = ChartService::new(
        Arc::new(FixedGeocoder::paris()),
        Arc::new(CountingEphemeris::new()),
    );

    let mut input = birth_input();
    input.birth_place = "  ".to_string();

    let err = service.compute_chart(&input).await.unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput(_)));
}
