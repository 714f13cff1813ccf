// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Waterfall markers, with icon size scaled by height.

use super::{LayerHandle, WATERFALLS_LAYER};
use crate::models::{DivIcon, PointRecord, Shape, Waterfall};
use crate::services::popup::{tooltip, PopupContent, PopupLink};

pub const MIN_ICON_SIZE: u32 = 12;
pub const MAX_ICON_SIZE: u32 = 32;

/// Min-max scaling of waterfall heights onto icon sizes.
///
/// The range comes from the loaded dataset itself, so the tallest waterfall
/// always gets [`MAX_ICON_SIZE`] and the shortest [`MIN_ICON_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconScale {
    min_height: f64,
    max_height: f64,
}

impl IconScale {
    /// Build a scale from the positive heights in a dataset.
    ///
    /// Returns `None` if there are no positive heights.
    pub fn from_heights(heights: impl IntoIterator<Item = f64>) -> Option<Self> {
        heights
            .into_iter()
            .filter(|h| *h > 0.0)
            .fold(None, |range: Option<Self>, h| {
                Some(match range {
                    None => Self {
                        min_height: h,
                        max_height: h,
                    },
                    Some(r) => Self {
                        min_height: r.min_height.min(h),
                        max_height: r.max_height.max(h),
                    },
                })
            })
    }

    /// Icon size in pixels for a waterfall height.
    ///
    /// A missing or non-positive height is treated as the dataset minimum.
    pub fn icon_size(&self, height: Option<f64>) -> u32 {
        let height = height.filter(|h| *h > 0.0).unwrap_or(self.min_height);
        let span = self.max_height - self.min_height;
        let ratio = if span > 0.0 {
            ((height - self.min_height) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let size =
            f64::from(MIN_ICON_SIZE) + f64::from(MAX_ICON_SIZE - MIN_ICON_SIZE) * ratio;
        size.round() as u32
    }
}

pub fn render(waterfalls: &[Waterfall], layer: &mut LayerHandle) {
    let scale = IconScale::from_heights(waterfalls.iter().filter_map(|w| w.height_ft.get()));

    for falls in waterfalls {
        let Some(position) = falls.position() else {
            tracing::debug!(name = %falls.name, "Waterfall has no valid coordinates, skipping");
            continue;
        };

        let height = falls.height_ft.get();
        let size = scale.map_or(MIN_ICON_SIZE, |s| s.icon_size(height));
        let icon = DivIcon::centered(
            "icon-marker icon-water waterfall-icon",
            format!(r#"<i class="fa fa-tint" style="font-size: {}px;"></i>"#, size),
            size,
        );

        let popup = PopupContent::new(&falls.name, 300)
            .detail(
                height
                    .filter(|h| *h > 0.0)
                    .map(|h| format!("Height: {} ft", h)),
            )
            .detail(falls.park_or_area.clone())
            .detail(falls.nearby_town.as_ref().map(|t| format!("Near: {}", t)))
            .detail(falls.best_season.as_ref().map(|s| format!("Best: {}", s)))
            .detail(falls.access.clone())
            .description(falls.description.as_deref())
            .link(falls.google_maps_url.as_deref().map(PopupLink::google_maps))
            .build();

        layer.add(
            Shape::Marker {
                position,
                icon,
                z_index_offset: 0,
            },
            tooltip(&falls.name, falls.description.as_deref()),
            popup,
        );
    }

    layer.register_overlay();
    tracing::debug!(layer = WATERFALLS_LAYER, count = layer.len(), "Waterfalls placed");
}
