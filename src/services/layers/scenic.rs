// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scenic area polygons, colored straight from the dataset.

use super::LayerHandle;
use crate::models::{LatLng, PathStyle, ScenicArea, Shape};
use crate::services::popup::{tooltip, PopupContent};

const FILL_OPACITY: f64 = 0.18;
const STROKE_WEIGHT: u32 = 2;
const POPUP_MAX_WIDTH: u32 = 360;

pub fn render(areas: &[ScenicArea], layer: &mut LayerHandle) {
    for area in areas {
        let Some(boundary) = area.boundary() else {
            tracing::warn!(area = %area.name, "Scenic area has fewer than 3 valid vertices, skipping");
            continue;
        };

        // Drop the closing vertex geo adds; the map closes rings itself.
        let mut ring: Vec<LatLng> = boundary.exterior().coords().map(|c| [c.y, c.x]).collect();
        ring.pop();

        let style = PathStyle {
            color: area.color.clone(),
            weight: STROKE_WEIGHT,
            opacity: 1.0,
            fill_color: Some(area.color.clone()),
            fill_opacity: FILL_OPACITY,
            dash_array: None,
        };

        let summary = format!(
            "{} (Score {}) - {}",
            area.name, area.score, area.drive_time
        );

        let popup = PopupContent::new(&area.name, POPUP_MAX_WIDTH)
            .meta(format!("Scenery/Hiking Score: {} / 10", area.score))
            .meta_emphasis("Drive time from NYC (off‑peak):", &area.drive_time)
            .description(Some(area.description.as_str()))
            .build();

        layer.add(Shape::Polygon { ring, style }, tooltip(&summary, None), popup);
    }
}
