// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end rendering against a local fixture server.
//!
//! These cover the whole pipeline: concurrent loading with cache busting,
//! graceful degradation of auxiliary datasets, and the rendered layers.

use axum::http::StatusCode;
use common::{routes_with, FixtureServer, Reply};
use scenic_ny_map::error::AppError;
use scenic_ny_map::models::Shape;
use scenic_ny_map::services::layers::{
    BREWERIES_LAYER, CITIES_LAYER, CULTURAL_LAYER, ORCHARDS_LAYER, RESTAURANTS_LAYER,
    SCENIC_AREAS_LAYER, WATERFALLS_LAYER,
};
use std::time::Duration;

mod common;

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_scenic_area_and_city_scenario() {
    let server = FixtureServer::start_full().await;
    let map = server
        .shell(TIMEOUT)
        .render_page()
        .await
        .expect("Render should succeed");

    let scenic = map.layer(SCENIC_AREAS_LAYER).expect("Scenic layer present");
    assert_eq!(scenic.features.len(), 1);
    let area = &scenic.features[0];
    assert!(matches!(&area.shape, Shape::Polygon { ring, .. } if ring.len() == 4));
    assert!(area.tooltip.html.contains("9.2"), "tooltip: {}", area.tooltip.html);
    assert!(area.tooltip.sticky);

    let cities = map.layer(CITIES_LAYER).expect("City layer present");
    assert_eq!(cities.features.len(), 1);
    let city = &cities.features[0];
    match &city.shape {
        Shape::CircleMarker { style, radius, .. } => {
            // 2h 15m = 135 minutes on the green→orange segment
            assert_eq!(style.color, "rgb(200, 159, 9)");
            assert_eq!(style.fill_color.as_deref(), Some("rgb(200, 159, 9)"));
            assert_eq!(*radius, 6.0);
        }
        other => panic!("Expected a circle marker, got {:?}", other),
    }
    assert!(city.popup.html.contains("6,000"), "popup: {}", city.popup.html);
    assert!(city.popup.html.contains("View on Google Maps"));

    // Core layers are always on, auxiliary layers are toggleable
    assert!(!scenic.overlay && !cities.overlay);
    assert_eq!(
        map.overlay_names(),
        [
            WATERFALLS_LAYER,
            BREWERIES_LAYER,
            RESTAURANTS_LAYER,
            ORCHARDS_LAYER,
            CULTURAL_LAYER
        ]
    );
}

#[tokio::test]
async fn test_base_view_from_primary_document() {
    let server = FixtureServer::start_full().await;
    let map = server.shell(TIMEOUT).render_page().await.unwrap();

    assert_eq!(map.view.center, [42.3, -74.6]);
    assert_eq!(map.view.zoom, 8.0);
    assert_eq!(map.view.crs, "EPSG3857");
    let options = &map.view.tile_layer.options;
    assert_eq!(options["maxZoom"], 18);
    assert_eq!(options["subdomains"], "abcd");
    assert!(options["attribution"]
        .as_str()
        .unwrap()
        .contains("OpenStreetMap"));
}

#[tokio::test]
async fn test_record_level_filtering() {
    let server = FixtureServer::start_full().await;
    let map = server.shell(TIMEOUT).render_page().await.unwrap();

    // One waterfall has `lat: null`
    let waterfalls = map.layer(WATERFALLS_LAYER).unwrap();
    assert_eq!(waterfalls.features.len(), 2);
    assert!(waterfalls
        .features
        .iter()
        .all(|f| !f.tooltip.html.contains("Lost Falls")));

    // One brewery has a non-numeric latitude
    assert_eq!(map.layer(BREWERIES_LAYER).unwrap().features.len(), 1);

    // Permanently and temporarily closed restaurants are hidden
    let restaurants = map.layer(RESTAURANTS_LAYER).unwrap();
    assert_eq!(restaurants.features.len(), 1);
    assert!(restaurants.features[0].tooltip.html.contains("Phoenicia Diner"));
}

const LOOSELY_TYPED_PRIMARY: &str = r##"{
  "mapConfig": { "center": [42.3, -74.6], "zoom": 7.5 },
  "tileLayer": { "url": "https://{s}.tile.example/{z}/{x}/{y}.png", "attribution": "OSM" },
  "scenicAreas": [
    { "name": "Catskills", "score": "9.2", "driveTime": "2h 30m", "color": "#2E8B57",
      "coordinates": [[42.0, -74.5], [42.3, -74.0], [42.1, -73.9]] }
  ],
  "cities": [
    { "name": "Phoenicia", "population": 6000.0, "driveTime": "2h 15m",
      "scenicArea": "Catskills", "coordinates": [42.08, -74.31] }
  ]
}"##;

const LOOSELY_TYPED_RESTAURANTS: &str = r#"[
  { "name": "Sweet Sue's", "lat": 42.08, "lng": -74.31, "family_friendly": "yes" }
]"#;

#[tokio::test]
async fn test_loosely_typed_display_fields_still_render() {
    let mut routes = routes_with("map-data.json", Reply::Json(LOOSELY_TYPED_PRIMARY));
    for (file, reply) in routes.iter_mut() {
        if *file == "restaurants.json" {
            *reply = Reply::Json(LOOSELY_TYPED_RESTAURANTS);
        }
    }
    let server = FixtureServer::start(routes).await;
    let map = server
        .shell(TIMEOUT)
        .render_page()
        .await
        .expect("Fractional zoom should not fail the primary document");

    assert_eq!(map.view.zoom, 7.5);

    let scenic = map.layer(SCENIC_AREAS_LAYER).unwrap();
    assert_eq!(scenic.features.len(), 1);
    assert!(scenic.features[0].tooltip.html.contains("(Score 9.2)"));

    let cities = map.layer(CITIES_LAYER).unwrap();
    assert_eq!(cities.features.len(), 1);
    assert!(cities.features[0].popup.html.contains("6,000"));

    let restaurants = map.layer(RESTAURANTS_LAYER).unwrap();
    assert_eq!(restaurants.features.len(), 1);
    assert!(restaurants.features[0].popup.html.contains("Family-friendly"));
}

#[tokio::test]
async fn test_auxiliary_404_degrades_to_missing_layer() {
    let server =
        FixtureServer::start(routes_with("waterfalls.json", Reply::Status(StatusCode::NOT_FOUND)))
            .await;
    let map = server
        .shell(TIMEOUT)
        .render_page()
        .await
        .expect("Render should survive a missing auxiliary dataset");

    assert!(map.layer(WATERFALLS_LAYER).is_none());
    assert!(!map.overlay_names().contains(&WATERFALLS_LAYER));
    assert_eq!(map.layer(SCENIC_AREAS_LAYER).unwrap().features.len(), 1);
    assert_eq!(map.layer(CITIES_LAYER).unwrap().features.len(), 1);
    assert!(map.layer(BREWERIES_LAYER).is_some());
}

#[tokio::test]
async fn test_auxiliary_server_error_and_bad_json_degrade() {
    let mut routes = routes_with(
        "breweries.json",
        Reply::Status(StatusCode::INTERNAL_SERVER_ERROR),
    );
    routes.retain(|(f, _)| *f != "orchards_points.json");
    routes.push(("orchards_points.json", Reply::Json("{not json")));

    let server = FixtureServer::start(routes).await;
    let map = server.shell(TIMEOUT).render_page().await.unwrap();

    assert!(map.layer(BREWERIES_LAYER).is_none());
    assert!(map.layer(ORCHARDS_LAYER).is_none());
    assert!(map.layer(RESTAURANTS_LAYER).is_some());
}

#[tokio::test]
async fn test_slow_auxiliary_dataset_times_out() {
    let server = FixtureServer::start(routes_with(
        "restaurants.json",
        Reply::Slow(Duration::from_secs(10), "[]"),
    ))
    .await;

    let started = std::time::Instant::now();
    let map = server
        .shell(Duration::from_millis(500))
        .render_page()
        .await
        .expect("A slow auxiliary source must not fail the render");

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(map.layer(RESTAURANTS_LAYER).is_none());
    assert!(map.layer(WATERFALLS_LAYER).is_some());
}

#[tokio::test]
async fn test_primary_failure_is_fatal() {
    let server = FixtureServer::start(routes_with(
        "map-data.json",
        Reply::Status(StatusCode::SERVICE_UNAVAILABLE),
    ))
    .await;

    let err = server.shell(TIMEOUT).render_page().await.unwrap_err();
    assert!(matches!(err, AppError::PrimaryDataset(_)));
    assert!(err.is_fatal_render_error());
}

#[tokio::test]
async fn test_primary_with_invalid_structure_is_fatal() {
    let server = FixtureServer::start(routes_with(
        "map-data.json",
        Reply::Json(r#"{"scenicAreas": []}"#),
    ))
    .await;

    let err = server.shell(TIMEOUT).render_page().await.unwrap_err();
    assert!(matches!(err, AppError::PrimaryDataset(msg) if msg.contains("invalid structure")));
}

#[tokio::test]
async fn test_every_document_fetched_once_with_cache_buster() {
    let server = FixtureServer::start_full().await;
    server.shell(TIMEOUT).render_page().await.unwrap();

    let requests = server.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 6, "requests: {:?}", requests);

    let stamps: Vec<&str> = requests
        .iter()
        .map(|(path, query)| {
            let query = query.as_deref().unwrap_or_else(|| panic!("{} has no query", path));
            let stamp = query.strip_prefix("t=").expect("t parameter");
            assert!(stamp.parse::<i64>().is_ok(), "stamp {:?}", stamp);
            stamp
        })
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] == w[1]));

    let mut paths: Vec<&str> = requests.iter().map(|(p, _)| p.as_str()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 6);
}

#[tokio::test]
async fn test_cancelled_render_fails() {
    let server = FixtureServer::start(routes_with(
        "map-data.json",
        Reply::Slow(Duration::from_secs(10), common::MAP_DATA),
    ))
    .await;
    let shell = server.shell(Duration::from_secs(30));

    let cancel = shell.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        cancel.cancel();
    });

    let err = shell.render_page().await.unwrap_err();
    assert!(matches!(err, AppError::PrimaryDataset(msg) if msg.contains("Cancelled")));
}

#[tokio::test]
async fn test_rendering_twice_produces_independent_scenes() {
    let server = FixtureServer::start_full().await;
    let shell = server.shell(TIMEOUT);

    let first = shell.render_page().await.unwrap();
    let second = shell.render_page().await.unwrap();
    assert_eq!(first.feature_count(), second.feature_count());
    assert_eq!(first.layers.len(), second.layers.len());
}
