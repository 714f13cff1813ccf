// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Place search through a Nominatim-compatible geocoder.
//!
//! The geocoder itself is an external collaborator: a query goes in, a
//! bounding box, center point and display name come out. This module turns
//! a hit into a map focus (padded bounds plus a temporary marker that
//! expires after [`SEARCH_MARKER_TTL_SECS`]).

use crate::error::{AppError, Result};
use crate::models::LatLng;
use crate::services::popup::escape_html;
use chrono::{DateTime, Duration, Utc};
use geo::{coord, Rect};
use serde::{Deserialize, Serialize};

pub const SEARCH_MARKER_TTL_SECS: u64 = 8;
const BOUNDS_PADDING: f64 = 0.2;
const USER_AGENT: &str = concat!("scenic-ny-map/", env!("CARGO_PKG_VERSION"));

/// Latitude/longitude bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Grow the box by `ratio` of its size on every side.
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_pad = (self.north - self.south).abs() * ratio;
        let lng_pad = (self.east - self.west).abs() * ratio;
        Self {
            south: self.south - lat_pad,
            west: self.west - lng_pad,
            north: self.north + lat_pad,
            east: self.east + lng_pad,
        }
    }

    /// Bounds of a `geo` rectangle with `x = lng, y = lat`.
    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        }
    }
}

/// A single geocoding result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeHit {
    pub name: String,
    pub center: LatLng,
    pub bbox: Bounds,
}

/// Nominatim JSON result; coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
    /// `[south, north, west, east]`
    boundingbox: [String; 4],
}

impl NominatimPlace {
    fn into_hit(self) -> Option<GeocodeHit> {
        let num = |s: &str| s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        let [south, north, west, east] = &self.boundingbox;
        // Rect orders the corners, so a swapped box still comes out south-west first.
        let rect = Rect::new(
            coord! { x: num(west)?, y: num(south)? },
            coord! { x: num(east)?, y: num(north)? },
        );
        Some(GeocodeHit {
            center: [num(&self.lat)?, num(&self.lon)?],
            bbox: Bounds::from_rect(rect),
            name: self.display_name,
        })
    }
}

/// Client for the place-search collaborator.
#[derive(Clone)]
pub struct Geocoder {
    http: reqwest::Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Geocoder(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Look up a free-text place query, returning the best hit if any.
    pub async fn search(&self, query: &str) -> Result<Option<GeocodeHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Geocoder(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Geocoder(format!("HTTP {}", response.status())));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| AppError::Geocoder(format!("invalid response: {}", e)))?;

        let hit = places.into_iter().find_map(NominatimPlace::into_hit);
        tracing::debug!(query, found = hit.is_some(), "Place search");
        Ok(hit)
    }
}

/// Marker dropped at a search result and removed after a fixed delay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryMarker {
    pub position: LatLng,
    pub popup_html: String,
    pub placed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TemporaryMarker {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Where the map moves after a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFocus {
    pub fit_bounds: Bounds,
    pub marker: TemporaryMarker,
}

/// Fit the padded result bounds and drop a temporary marker at its center.
pub fn focus_on(hit: &GeocodeHit, placed_at: DateTime<Utc>) -> SearchFocus {
    SearchFocus {
        fit_bounds: hit.bbox.pad(BOUNDS_PADDING),
        marker: TemporaryMarker {
            position: hit.center,
            popup_html: format!("<b>{}</b>", escape_html(&hit.name)),
            placed_at,
            expires_at: placed_at + Duration::seconds(SEARCH_MARKER_TTL_SECS as i64),
        },
    }
}
