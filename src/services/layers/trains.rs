// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Train routes: one line per route through its stops, plus stop markers.

use super::LayerHandle;
use crate::models::{LatLng, PathStyle, Shape, TrainRoute};
use crate::services::popup::{tooltip, PopupContent};

const LINE_WEIGHT: u32 = 4;
const LINE_OPACITY: f64 = 0.8;
const DASH_PATTERN: &str = "10, 5";

const TERMINAL_RADIUS: f64 = 6.0;
const TERMINAL_WEIGHT: u32 = 3;
const STOP_RADIUS: f64 = 4.0;
const STOP_WEIGHT: u32 = 2;

/// Draw each route's line followed by its stop markers.
///
/// Stops are taken in source order, which is itinerary order. Stops without
/// valid coordinates are left out of both the line and the markers.
pub fn render(routes: &[TrainRoute], layer: &mut LayerHandle) {
    for route in routes {
        let path: Vec<LatLng> = route
            .stops
            .iter()
            .filter_map(|s| s.coordinates.get())
            .collect();

        if path.len() >= 2 {
            let style = PathStyle {
                color: route.color.clone(),
                weight: LINE_WEIGHT,
                opacity: LINE_OPACITY,
                fill_color: None,
                fill_opacity: 0.0,
                dash_array: route.is_dashed().then(|| DASH_PATTERN.to_string()),
            };
            let popup = PopupContent::new(&route.name, 280)
                .meta_colored(&route.operator, &route.color)
                .meta(format!("{} stops", path.len()))
                .build();
            layer.add(
                Shape::Polyline { path, style },
                tooltip(&route.name, Some(route.operator.as_str())),
                popup,
            );
        } else {
            tracing::warn!(route = %route.name, stops = path.len(), "Route has too few located stops for a line");
        }

        for stop in &route.stops {
            let Some(center) = stop.coordinates.get() else {
                continue;
            };
            let (radius, weight) = if stop.is_terminal() {
                (TERMINAL_RADIUS, TERMINAL_WEIGHT)
            } else {
                (STOP_RADIUS, STOP_WEIGHT)
            };

            let style = PathStyle {
                color: route.color.clone(),
                weight,
                opacity: 1.0,
                fill_color: Some(route.color.clone()),
                fill_opacity: 0.8,
                dash_array: None,
            };

            let popup = PopupContent::new(&stop.name, 280)
                .meta_colored(&route.name, &route.color)
                .meta_emphasis("Travel time from NYC:", &stop.travel_time)
                .description(Some(format!("{} • {}", route.operator, stop.kind).as_str()))
                .build();

            layer.add(
                Shape::CircleMarker {
                    center,
                    radius,
                    style,
                },
                tooltip(&format!("{} - {}", stop.name, stop.travel_time), None),
                popup,
            );
        }
    }
}
