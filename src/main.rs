// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scenic NY Map renderer
//!
//! Loads the map datasets and writes the rendered scene (`scene.json`) and a
//! GeoJSON export (`scene.geojson`) for the static site.
//!
//! `scenic-ny-map search <query>` runs a place search instead and prints
//! where the map would move.

use anyhow::Context;
use scenic_ny_map::{
    config::Config,
    services::{export::to_feature_collection, focus_on, Geocoder, MapShell},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("search") {
        let config = Config::search_from_env().context("Failed to load configuration")?;
        return search(&config, &args[1..].join(" ")).await;
    }

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!(data = %config.data_base_url, "Rendering map");
    let shell = MapShell::new(&config);

    // Abort in-flight fetches on Ctrl-C
    let cancel = shell.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling dataset fetches");
            cancel.cancel();
        }
    });

    let map = shell.render_page().await?;

    tokio::fs::create_dir_all(&config.output_dir).await?;
    let scene_path = config.output_dir.join("scene.json");
    tokio::fs::write(&scene_path, serde_json::to_vec(&map)?).await?;

    let geojson_path = config.output_dir.join("scene.geojson");
    let collection = to_feature_collection(&map);
    tokio::fs::write(&geojson_path, collection.to_string()).await?;

    tracing::info!(
        scene = %scene_path.display(),
        geojson = %geojson_path.display(),
        features = map.feature_count(),
        "Scene written"
    );
    Ok(())
}

async fn search(config: &Config, query: &str) -> anyhow::Result<()> {
    let geocoder = Geocoder::new(config.geocoder_url.clone(), config.fetch_timeout)?;
    match geocoder.search(query).await? {
        Some(hit) => {
            let focus = focus_on(&hit, chrono::Utc::now());
            println!("{}", serde_json::to_string_pretty(&focus)?);
        }
        None => tracing::info!(query, "No place found"),
    }
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scenic_ny_map=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
