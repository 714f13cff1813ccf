// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Museums, historic sites, venues and parks, with an icon per category.

use super::{LayerHandle, POI_ICON_SIZE};
use crate::models::{CulturalSite, DivIcon, PointRecord, Shape};
use crate::services::popup::{tooltip, PopupContent, PopupLink};

/// Above restaurants and breweries, below cities.
const Z_INDEX_OFFSET: i32 = 500;

/// Font Awesome icon class and color for a category.
pub fn category_icon(category: &str) -> (&'static str, &'static str) {
    match category {
        "Museum" => ("fa-university", "#4169E1"),
        "Art Museum" | "Art Center" => ("fa-paint-brush", "#FF6347"),
        "Historic Site" => ("fa-building", "#8B4513"),
        "Educational Institution" => ("fa-graduation-cap", "#228B22"),
        "Performing Arts" => ("fa-music", "#9370DB"),
        "Sports Venue" => ("fa-trophy", "#FFD700"),
        "Natural Attraction" | "State Park" => ("fa-tree", "#32CD32"),
        "Historic Garden" => ("fa-leaf", "#228B22"),
        _ => ("fa-map-marker", "#8B4513"),
    }
}

pub fn render(sites: &[CulturalSite], layer: &mut LayerHandle) {
    for site in sites {
        let Some(position) = site.position() else {
            continue;
        };

        let (icon_class, color) = category_icon(&site.category);
        let icon = DivIcon::centered(
            "icon-marker icon-poi poi-icon",
            format!(
                r#"<i class="fa {}" style="color: {}; font-size: 16px;"></i>"#,
                icon_class, color
            ),
            POI_ICON_SIZE,
        );

        let mut popup = PopupContent::new(&site.name, 350).meta(site.category.as_str());
        if let Some(location) = site.location.as_deref().filter(|l| !l.is_empty()) {
            popup = popup.meta(location);
        }
        let popup = popup
            .description(site.description.as_deref())
            .link(site.website.as_deref().map(PopupLink::website))
            .link(site.place_url().as_deref().map(PopupLink::google_maps))
            .build();

        layer.add(
            Shape::Marker {
                position,
                icon,
                z_index_offset: Z_INDEX_OFFSET,
            },
            tooltip(&site.name, site.description.as_deref()),
            popup,
        );
    }

    layer.register_overlay();
}
