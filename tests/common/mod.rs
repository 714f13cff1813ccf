// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::extract::RawQuery;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use scenic_ny_map::models::PrimaryDocument;
use scenic_ny_map::services::{DatasetLoader, Datasets, MapShell};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const MAP_DATA: &str = include_str!("../fixtures/map-data.json");
pub const WATERFALLS: &str = include_str!("../fixtures/waterfalls.json");
pub const BREWERIES: &str = include_str!("../fixtures/breweries.json");
pub const RESTAURANTS: &str = include_str!("../fixtures/restaurants.json");
pub const ORCHARDS: &str = include_str!("../fixtures/orchards_points.json");
pub const CULTURAL_SITES: &str = include_str!("../fixtures/points_of_interest.json");

/// How a fixture route responds.
#[derive(Clone)]
#[allow(dead_code)]
pub enum Reply {
    Json(&'static str),
    Status(StatusCode),
    Slow(Duration, &'static str),
}

/// Local HTTP server standing in for the static data host.
#[allow(dead_code)]
pub struct FixtureServer {
    pub base_url: String,
    /// `(path, raw query)` of every request received.
    pub requests: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl FixtureServer {
    /// Serve `routes` under `/data/<file>`.
    pub async fn start(routes: Vec<(&'static str, Reply)>) -> Self {
        let requests: Arc<Mutex<Vec<(String, Option<String>)>>> = Arc::default();
        let mut router = Router::new();

        for (file, reply) in routes {
            let path = format!("/data/{}", file);
            let log = requests.clone();
            let logged_path = path.clone();
            router = router.route(
                &path,
                get(move |RawQuery(query): RawQuery| {
                    let reply = reply.clone();
                    let log = log.clone();
                    let logged_path = logged_path.clone();
                    async move {
                        log.lock().unwrap().push((logged_path, query));
                        match reply {
                            Reply::Json(body) => {
                                ([(header::CONTENT_TYPE, "application/json")], body).into_response()
                            }
                            Reply::Status(status) => status.into_response(),
                            Reply::Slow(delay, body) => {
                                tokio::time::sleep(delay).await;
                                ([(header::CONTENT_TYPE, "application/json")], body).into_response()
                            }
                        }
                    }
                }),
            );
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fixture server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/data", addr),
            requests,
        }
    }

    /// Every fixture document served normally.
    #[allow(dead_code)]
    pub async fn start_full() -> Self {
        Self::start(full_routes()).await
    }

    #[allow(dead_code)]
    pub fn shell(&self, timeout: Duration) -> MapShell {
        MapShell::with_loader(
            DatasetLoader::new(self.base_url.clone(), timeout),
            "http://127.0.0.1:9/geocoder",
        )
    }
}

#[allow(dead_code)]
pub fn full_routes() -> Vec<(&'static str, Reply)> {
    vec![
        ("map-data.json", Reply::Json(MAP_DATA)),
        ("waterfalls.json", Reply::Json(WATERFALLS)),
        ("breweries.json", Reply::Json(BREWERIES)),
        ("restaurants.json", Reply::Json(RESTAURANTS)),
        ("orchards_points.json", Reply::Json(ORCHARDS)),
        ("points_of_interest.json", Reply::Json(CULTURAL_SITES)),
    ]
}

/// Replace the reply for one file in the full route set.
#[allow(dead_code)]
pub fn routes_with(file: &'static str, reply: Reply) -> Vec<(&'static str, Reply)> {
    full_routes()
        .into_iter()
        .map(|(f, r)| if f == file { (f, reply.clone()) } else { (f, r) })
        .collect()
}

/// Datasets built from the fixture primary document, no auxiliary data.
#[allow(dead_code)]
pub fn fixture_primary() -> Datasets {
    let primary: PrimaryDocument =
        serde_json::from_str(MAP_DATA).expect("Fixture map-data.json should parse");
    Datasets::primary_only(primary)
}
