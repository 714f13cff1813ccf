// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dataset loading.
//!
//! All documents are fetched concurrently, each exactly once, with a
//! cache-busting `t` query parameter. Every fetch races a timeout and a
//! cancellation token:
//! - the primary document is required; any failure aborts the render
//! - an auxiliary document that fails in any way becomes an empty list

use crate::error::{AppError, Result};
use crate::models::lenient::decode_records;
use crate::models::{Brewery, CulturalSite, Orchard, PrimaryDocument, Restaurant, Waterfall};
use crate::time_utils::cache_bust_stamp;
use futures_util::future::join_all;
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const PRIMARY_DOCUMENT: &str = "map-data.json";

/// The optional point-of-interest documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxDataset {
    Waterfalls,
    Breweries,
    Restaurants,
    Orchards,
    CulturalSites,
}

impl AuxDataset {
    pub const ALL: [AuxDataset; 5] = [
        Self::Waterfalls,
        Self::Breweries,
        Self::Restaurants,
        Self::Orchards,
        Self::CulturalSites,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Waterfalls => "waterfalls.json",
            Self::Breweries => "breweries.json",
            Self::Restaurants => "restaurants.json",
            Self::Orchards => "orchards_points.json",
            Self::CulturalSites => "points_of_interest.json",
        }
    }
}

/// Everything a render needs, loaded once.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub primary: PrimaryDocument,
    pub waterfalls: Vec<Waterfall>,
    pub breweries: Vec<Brewery>,
    pub restaurants: Vec<Restaurant>,
    pub orchards: Vec<Orchard>,
    pub cultural_sites: Vec<CulturalSite>,
}

impl Datasets {
    /// Datasets with only the primary document and no auxiliary records.
    pub fn primary_only(primary: PrimaryDocument) -> Self {
        Self {
            primary,
            waterfalls: Vec::new(),
            breweries: Vec::new(),
            restaurants: Vec::new(),
            orchards: Vec::new(),
            cultural_sites: Vec::new(),
        }
    }
}

/// Why a single fetch failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Document not found")]
    NotFound,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Invalid JSON: {0}")]
    InvalidData(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Cancelled")]
    Cancelled,
}

/// Fetches the static JSON datasets.
#[derive(Clone)]
pub struct DatasetLoader {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl DatasetLoader {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Load the primary document and every auxiliary document.
    pub async fn load(&self, cancel: &CancellationToken) -> Result<Datasets> {
        let stamp = cache_bust_stamp(chrono::Utc::now());

        let (primary, aux) = tokio::join!(
            self.fetch_json(PRIMARY_DOCUMENT, stamp, cancel),
            join_all(
                AuxDataset::ALL
                    .iter()
                    .map(|kind| self.fetch_aux(*kind, stamp, cancel))
            ),
        );

        let primary = primary.map_err(|e| {
            tracing::error!(document = PRIMARY_DOCUMENT, error = %e, "Failed to load primary dataset");
            AppError::PrimaryDataset(e.to_string())
        })?;
        let primary: PrimaryDocument = serde_json::from_value(primary).map_err(|e| {
            tracing::error!(document = PRIMARY_DOCUMENT, error = %e, "Primary dataset has invalid structure");
            AppError::PrimaryDataset(format!("invalid structure: {}", e))
        })?;

        let mut datasets = Datasets::primary_only(primary);
        for (kind, items) in aux {
            let label = kind.file_name();
            match kind {
                AuxDataset::Waterfalls => datasets.waterfalls = decode_records(label, items),
                AuxDataset::Breweries => datasets.breweries = decode_records(label, items),
                AuxDataset::Restaurants => datasets.restaurants = decode_records(label, items),
                AuxDataset::Orchards => datasets.orchards = decode_records(label, items),
                AuxDataset::CulturalSites => {
                    datasets.cultural_sites = decode_records(label, items)
                }
            }
        }

        tracing::info!(
            scenic_areas = datasets.primary.scenic_areas.len(),
            cities = datasets.primary.cities.len(),
            train_routes = datasets.primary.train_routes.len(),
            waterfalls = datasets.waterfalls.len(),
            breweries = datasets.breweries.len(),
            restaurants = datasets.restaurants.len(),
            orchards = datasets.orchards.len(),
            cultural_sites = datasets.cultural_sites.len(),
            "Datasets loaded"
        );
        Ok(datasets)
    }

    /// Fetch an auxiliary document, degrading every failure to no records.
    async fn fetch_aux(
        &self,
        kind: AuxDataset,
        stamp: i64,
        cancel: &CancellationToken,
    ) -> (AuxDataset, Vec<Value>) {
        let items = match self.fetch_json(kind.file_name(), stamp, cancel).await {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                tracing::warn!(document = kind.file_name(), "Expected a JSON array, ignoring document");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(document = kind.file_name(), error = %e, "Auxiliary dataset unavailable, layer omitted");
                Vec::new()
            }
        };
        (kind, items)
    }

    /// GET `{base_url}/{file}?t={stamp}` and parse the body as JSON.
    async fn fetch_json(
        &self,
        file: &str,
        stamp: i64,
        cancel: &CancellationToken,
    ) -> std::result::Result<Value, FetchError> {
        let url = format!("{}/{}", self.base_url, file);

        let fetch = async {
            let response = self
                .http
                .get(&url)
                .query(&[("t", stamp.to_string())])
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(FetchError::NotFound);
            }
            if !response.status().is_success() {
                return Err(FetchError::Status(response.status().as_u16()));
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| FetchError::InvalidData(e.to_string()))
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            outcome = tokio::time::timeout(self.timeout, fetch) => {
                outcome.unwrap_or(Err(FetchError::Timeout(self.timeout)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aux_file_names_are_distinct() {
        let mut names: Vec<&str> = AuxDataset::ALL.iter().map(|k| k.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), AuxDataset::ALL.len());
        assert!(!names.contains(&PRIMARY_DOCUMENT));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let loader = DatasetLoader::new("http://localhost:9999/data/", Duration::from_secs(1));
        assert_eq!(loader.base_url(), "http://localhost:9999/data");
    }
}
