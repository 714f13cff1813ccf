// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Primary map document: base map settings, scenic areas, cities and trains.

use super::lenient::{lenient_records, loose_count, loose_f64, LatLng, LoosePoint};
use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

/// The primary dataset (`map-data.json`).
///
/// `mapConfig` and `tileLayer` are required; a document without them is
/// unusable and fails to decode. The record lists tolerate bad entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryDocument {
    pub map_config: MapConfig,
    pub tile_layer: TileLayerConfig,
    #[serde(default, deserialize_with = "lenient_records")]
    pub scenic_areas: Vec<ScenicArea>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub cities: Vec<City>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub train_routes: Vec<TrainRoute>,
}

/// Initial map view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    pub center: LatLng,
    /// Leaflet zoom; fractional levels are allowed.
    pub zoom: f64,
}

/// Raster tile source for the base map.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TileLayerConfig {
    pub url: String,
    #[serde(default)]
    pub attribution: String,
    /// Extra tile layer options, passed through to the map untouched.
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

/// A scenic region drawn as a filled polygon.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenicArea {
    pub name: String,
    #[serde(default, deserialize_with = "loose_f64")]
    pub score: f64,
    pub drive_time: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub coordinates: Vec<LoosePoint>,
}

impl ScenicArea {
    /// Boundary polygon, or `None` if fewer than three vertices are valid.
    ///
    /// Geo coordinates are `x = lng, y = lat`; the ring is closed by `geo`.
    pub fn boundary(&self) -> Option<Polygon<f64>> {
        let coords: Vec<Coord<f64>> = self
            .coordinates
            .iter()
            .filter_map(|p| p.get())
            .map(|[lat, lng]| Coord { x: lng, y: lat })
            .collect();
        if coords.len() < 3 {
            return None;
        }
        Some(Polygon::new(LineString::from(coords), vec![]))
    }
}

/// A town or city, colored by drive time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    #[serde(default, deserialize_with = "loose_count")]
    pub population: u64,
    pub drive_time: String,
    /// Display name of the scenic area; not checked against the area list.
    #[serde(default)]
    pub scenic_area: String,
    #[serde(default)]
    pub coordinates: LoosePoint,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "google_maps_url")]
    pub google_maps_url: Option<String>,
}

/// A passenger rail line with its stops in itinerary order.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainRoute {
    pub name: String,
    pub operator: String,
    pub color: String,
    #[serde(default, deserialize_with = "lenient_records")]
    pub stops: Vec<Stop>,
}

impl TrainRoute {
    /// Operator whose lines are drawn dashed.
    pub const DASHED_OPERATOR: &'static str = "Amtrak";

    pub fn is_dashed(&self) -> bool {
        self.operator == Self::DASHED_OPERATOR
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub name: String,
    #[serde(default)]
    pub coordinates: LoosePoint,
    #[serde(default)]
    pub travel_time: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl Stop {
    pub fn is_terminal(&self) -> bool {
        self.kind == "terminal"
    }
}
