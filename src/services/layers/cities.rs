// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! City markers sized by population and colored by drive time.

use super::LayerHandle;
use crate::models::{City, PathStyle, Shape};
use crate::services::drive_time::drive_time_color;
use crate::services::popup::{format_thousands, tooltip, PopupContent, PopupLink};

pub const MIN_RADIUS: f64 = 3.0;
pub const MAX_RADIUS: f64 = 8.0;
const POPULATION_DIVISOR: f64 = 10_000.0;
const RADIUS_PER_DIVISOR: f64 = 5.0;
const POPUP_MAX_WIDTH: u32 = 260;

/// Marker radius in pixels: linear in population, clamped to
/// [`MIN_RADIUS`, `MAX_RADIUS`].
pub fn marker_radius(population: u64) -> f64 {
    let radius = MIN_RADIUS + (population as f64 / POPULATION_DIVISOR) * RADIUS_PER_DIVISOR;
    radius.clamp(MIN_RADIUS, MAX_RADIUS)
}

pub fn render(cities: &[City], layer: &mut LayerHandle) {
    for city in cities {
        let Some(center) = city.coordinates.get() else {
            tracing::debug!(city = %city.name, "City has no valid coordinates, skipping");
            continue;
        };

        let color = drive_time_color(&city.drive_time).to_string();
        let population = format_thousands(city.population);

        let style = PathStyle {
            color: color.clone(),
            weight: 2,
            opacity: 1.0,
            fill_color: Some(color),
            fill_opacity: 1.0,
            dash_array: None,
        };

        let summary = format!("{} (~{}) - {}", city.name, population, city.drive_time);

        let popup = PopupContent::new(&city.name, POPUP_MAX_WIDTH)
            .meta(format!("Population (approx): {}", population))
            .meta_emphasis("Drive time:", &city.drive_time)
            .description(Some(city.scenic_area.as_str()))
            .link(city.google_maps_url.as_deref().map(PopupLink::google_maps))
            .build();

        layer.add(
            Shape::CircleMarker {
                center,
                radius: marker_radius(city.population),
                style,
            },
            tooltip(&summary, city.description.as_deref()),
            popup,
        );
    }
}
