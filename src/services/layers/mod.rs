// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Layer renderers, one per entity type.
//!
//! Each renderer receives its loaded records by reference and a
//! [`LayerHandle`] scoped to a single layer group. A handle can add features
//! to its own group and register that group with the layer-toggle control;
//! it cannot see or remove any other layer.

pub mod breweries;
pub mod cities;
pub mod cultural;
pub mod orchards;
pub mod restaurants;
pub mod scenic;
pub mod trains;
pub mod waterfalls;

use crate::models::{LayerGroup, MapFeature, Popup, Shape, Tooltip};

pub const SCENIC_AREAS_LAYER: &str = "Scenic Areas";
pub const CITIES_LAYER: &str = "Cities";
pub const TRAIN_ROUTES_LAYER: &str = "Train Routes";
pub const WATERFALLS_LAYER: &str = "Waterfalls";
pub const BREWERIES_LAYER: &str = "Breweries";
pub const RESTAURANTS_LAYER: &str = "Restaurants";
pub const ORCHARDS_LAYER: &str = "Orchards (PYO)";
pub const CULTURAL_LAYER: &str = "Points of Interest";

/// Default size of point-of-interest icons, in pixels.
pub const POI_ICON_SIZE: u32 = 20;

/// Append-only collection of layer groups for one rendered page.
#[derive(Debug, Default)]
pub struct LayerCanvas {
    layers: Vec<LayerGroup>,
    overlays: Vec<String>,
}

impl LayerCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one layer group through a scoped handle.
    ///
    /// Core groups are kept even when empty. A group registered as an
    /// overlay is only kept, and only listed in the toggle control, if it
    /// ended up with at least one feature. Returns the number of features.
    pub fn layer<F>(&mut self, name: &str, build: F) -> usize
    where
        F: FnOnce(&mut LayerHandle),
    {
        let mut handle = LayerHandle {
            group: LayerGroup {
                name: name.to_string(),
                overlay: false,
                features: Vec::new(),
            },
        };
        build(&mut handle);

        let group = handle.group;
        let count = group.features.len();
        if group.overlay {
            if count == 0 {
                tracing::debug!(layer = name, "Overlay has no features, leaving it out");
                return 0;
            }
            self.overlays.push(group.name.clone());
        }
        tracing::debug!(layer = name, count, "Layer rendered");
        self.layers.push(group);
        count
    }

    /// Consume the canvas, returning the groups and the overlay names.
    pub fn finish(self) -> (Vec<LayerGroup>, Vec<String>) {
        (self.layers, self.overlays)
    }
}

/// Capability handle for a single layer group.
#[derive(Debug)]
pub struct LayerHandle {
    group: LayerGroup,
}

impl LayerHandle {
    pub fn add(&mut self, shape: Shape, tooltip: Tooltip, popup: Popup) {
        self.group.features.push(MapFeature {
            shape,
            tooltip,
            popup,
        });
    }

    /// Make this group user-toggleable.
    pub fn register_overlay(&mut self) {
        self.group.overlay = true;
    }

    pub fn len(&self) -> usize {
        self.group.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.features.is_empty()
    }
}
