// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map shell: base map, controls, and renderer orchestration.

use crate::config::Config;
use crate::error::Result;
use crate::models::{Control, MapView, PrimaryDocument, RenderedMap, TileLayer};
use crate::services::geocoder::SEARCH_MARKER_TTL_SECS;
use crate::services::layers::{self, LayerCanvas};
use crate::services::loader::{DatasetLoader, Datasets};
use crate::time_utils::format_utc_rfc3339;
use tokio_util::sync::CancellationToken;

/// Renders the whole page from the configured datasets.
///
/// Every call loads fresh data and builds an independent scene; nothing is
/// shared between calls.
pub struct MapShell {
    loader: DatasetLoader,
    geocoder_url: String,
    cancel: CancellationToken,
}

impl MapShell {
    pub fn new(config: &Config) -> Self {
        Self::with_loader(
            DatasetLoader::new(config.data_base_url.clone(), config.fetch_timeout),
            config.geocoder_url.clone(),
        )
    }

    pub fn with_loader(loader: DatasetLoader, geocoder_url: impl Into<String>) -> Self {
        Self {
            loader,
            geocoder_url: geocoder_url.into(),
            cancel: CancellationToken::new(),
        }
    }

    /// Token that aborts in-flight dataset fetches when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Load every dataset once, then render all layers.
    ///
    /// Fails only if the primary dataset can't be loaded.
    pub async fn render_page(&self) -> Result<RenderedMap> {
        let datasets = self.loader.load(&self.cancel).await?;
        let map = self.compose(&datasets);
        tracing::info!(
            layers = map.layers.len(),
            features = map.feature_count(),
            overlays = ?map.overlay_names(),
            "Map rendered"
        );
        Ok(map)
    }

    /// Build the scene from already-loaded datasets.
    ///
    /// Render order: scenic areas, cities, train routes, then the optional
    /// point-of-interest layers.
    pub fn compose(&self, datasets: &Datasets) -> RenderedMap {
        let primary = &datasets.primary;
        let mut canvas = LayerCanvas::new();

        canvas.layer(layers::SCENIC_AREAS_LAYER, |h| {
            layers::scenic::render(&primary.scenic_areas, h)
        });
        canvas.layer(layers::CITIES_LAYER, |h| {
            layers::cities::render(&primary.cities, h)
        });
        canvas.layer(layers::TRAIN_ROUTES_LAYER, |h| {
            layers::trains::render(&primary.train_routes, h)
        });
        canvas.layer(layers::WATERFALLS_LAYER, |h| {
            layers::waterfalls::render(&datasets.waterfalls, h)
        });
        canvas.layer(layers::BREWERIES_LAYER, |h| {
            layers::breweries::render(&datasets.breweries, h)
        });
        canvas.layer(layers::RESTAURANTS_LAYER, |h| {
            layers::restaurants::render(&datasets.restaurants, h)
        });
        canvas.layer(layers::ORCHARDS_LAYER, |h| {
            layers::orchards::render(&datasets.orchards, h)
        });
        canvas.layer(layers::CULTURAL_LAYER, |h| {
            layers::cultural::render(&datasets.cultural_sites, h)
        });

        let (layers, overlays) = canvas.finish();
        RenderedMap {
            generated_at: format_utc_rfc3339(chrono::Utc::now()),
            view: self.base_view(primary, overlays),
            layers,
        }
    }

    fn base_view(&self, primary: &PrimaryDocument, overlays: Vec<String>) -> MapView {
        let tile = &primary.tile_layer;
        let mut options = serde_json::Map::new();
        options.insert(
            "attribution".to_string(),
            serde_json::Value::String(tile.attribution.clone()),
        );
        // Dataset options win over the attribution default.
        options.extend(tile.options.clone());

        MapView {
            center: primary.map_config.center,
            zoom: primary.map_config.zoom,
            crs: "EPSG3857".to_string(),
            tile_layer: TileLayer {
                url: tile.url.clone(),
                options,
            },
            controls: vec![
                Control::Fullscreen {
                    position: "topleft".to_string(),
                    title: "Full Screen".to_string(),
                    title_cancel: "Exit Full Screen".to_string(),
                },
                Control::Layers { overlays },
                Control::Search {
                    placeholder: "Search place…".to_string(),
                    geocoder_url: self.geocoder_url.clone(),
                    marker_ttl_secs: SEARCH_MARKER_TTL_SECS,
                },
            ],
        }
    }
}
