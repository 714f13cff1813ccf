// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the map datasets and the rendered scene.

pub mod lenient;
pub mod poi;
pub mod region;
pub mod scene;

pub use lenient::{LatLng, LooseNumber, LoosePoint};
pub use poi::{Brewery, CulturalSite, Orchard, PointRecord, Restaurant, Waterfall};
pub use region::{City, MapConfig, PrimaryDocument, ScenicArea, Stop, TileLayerConfig, TrainRoute};
pub use scene::{
    Control, DivIcon, LayerGroup, MapFeature, MapView, PathStyle, Popup, RenderedMap, Shape,
    TileLayer, Tooltip,
};
