// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rendered map scene consumed by the browser shim.
//!
//! The scene mirrors the Leaflet objects the page creates: a base map view
//! with controls, and named layer groups holding polygons, markers, circle
//! markers and polylines. Every feature carries its tooltip and popup HTML.

use super::lenient::LatLng;
use geo::{BoundingRect, MultiPoint, Point, Rect};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A fully rendered page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RenderedMap {
    pub generated_at: String,
    pub view: MapView,
    pub layers: Vec<LayerGroup>,
}

impl RenderedMap {
    /// Find a layer group by name.
    pub fn layer(&self, name: &str) -> Option<&LayerGroup> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Names registered with the layer-toggle control, in registration order.
    pub fn overlay_names(&self) -> Vec<&str> {
        self.view
            .controls
            .iter()
            .find_map(|c| match c {
                Control::Layers { overlays } => Some(overlays.iter().map(String::as_str).collect()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn feature_count(&self) -> usize {
        self.layers.iter().map(|l| l.features.len()).sum()
    }

    /// Bounding box of every vertex in the scene (`x = lng, y = lat`).
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> = self
            .layers
            .iter()
            .flat_map(|l| l.features.iter())
            .flat_map(|f| f.shape.vertices())
            .map(|[lat, lng]| Point::new(lng, lat))
            .collect();
        points.bounding_rect()
    }
}

/// Base map settings and controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: f64,
    pub crs: String,
    pub tile_layer: TileLayer,
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TileLayer {
    pub url: String,
    /// Leaflet tile layer options, attribution included.
    #[cfg_attr(feature = "binding-generation", ts(type = "Record<string, unknown>"))]
    pub options: serde_json::Map<String, serde_json::Value>,
}

/// Map controls attached to the base map.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Control {
    #[serde(rename_all = "camelCase")]
    Fullscreen {
        position: String,
        title: String,
        title_cancel: String,
    },
    /// Layer toggle control listing the optional overlays.
    Layers { overlays: Vec<String> },
    /// Place search backed by an external geocoder.
    #[serde(rename_all = "camelCase")]
    Search {
        placeholder: String,
        geocoder_url: String,
        marker_ttl_secs: u64,
    },
}

/// A named group of features, optionally toggleable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LayerGroup {
    pub name: String,
    pub overlay: bool,
    pub features: Vec<MapFeature>,
}

/// One map primitive with its hover tooltip and click popup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapFeature {
    pub shape: Shape,
    pub tooltip: Tooltip,
    pub popup: Popup,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Shape {
    /// Ring of vertices; closed implicitly by the map.
    Polygon { ring: Vec<LatLng>, style: PathStyle },
    #[serde(rename_all = "camelCase")]
    Marker {
        position: LatLng,
        icon: DivIcon,
        z_index_offset: i32,
    },
    CircleMarker {
        center: LatLng,
        radius: f64,
        style: PathStyle,
    },
    Polyline { path: Vec<LatLng>, style: PathStyle },
}

impl Shape {
    pub fn vertices(&self) -> Vec<LatLng> {
        match self {
            Shape::Polygon { ring, .. } => ring.clone(),
            Shape::Marker { position, .. } => vec![*position],
            Shape::CircleMarker { center, .. } => vec![*center],
            Shape::Polyline { path, .. } => path.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polygon { .. } => "polygon",
            Shape::Marker { .. } => "marker",
            Shape::CircleMarker { .. } => "circleMarker",
            Shape::Polyline { .. } => "polyline",
        }
    }
}

/// Stroke and fill options for vector shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PathStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    pub fill_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
}

/// HTML marker icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DivIcon {
    pub class_name: String,
    pub html: String,
    pub size: [u32; 2],
    pub anchor: [f64; 2],
}

impl DivIcon {
    /// Square icon anchored at its center.
    pub fn centered(class_name: &str, html: String, size: u32) -> Self {
        let half = f64::from(size) / 2.0;
        Self {
            class_name: class_name.to_string(),
            html,
            size: [size, size],
            anchor: [half, half],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Tooltip {
    pub html: String,
    /// Follows the cursor.
    pub sticky: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Popup {
    pub html: String,
    pub max_width: u32,
}
