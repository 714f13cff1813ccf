// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Brewery markers.

use super::{LayerHandle, POI_ICON_SIZE};
use crate::models::{Brewery, DivIcon, PointRecord, Shape};
use crate::services::popup::{tooltip, PopupContent, PopupLink};

pub fn render(breweries: &[Brewery], layer: &mut LayerHandle) {
    let icon = DivIcon::centered(
        "icon-marker icon-beer",
        r#"<i class="fa fa-beer"></i>"#.to_string(),
        POI_ICON_SIZE,
    );

    for brewery in breweries {
        let Some(position) = brewery.position() else {
            continue;
        };

        // Short description on hover, the long one in the popup.
        let popup = PopupContent::new(&brewery.name, 300)
            .detail(brewery.location.clone())
            .detail(brewery.founded_label().map(|y| format!("Founded: {}", y)))
            .detail(brewery.specialty.clone())
            .detail(brewery.visitor_experience.clone())
            .description(brewery.full_description.as_deref())
            .link(brewery.google_maps_url.as_deref().map(PopupLink::google_maps))
            .build();

        layer.add(
            Shape::Marker {
                position,
                icon: icon.clone(),
                z_index_offset: 0,
            },
            tooltip(&brewery.name, brewery.description.as_deref()),
            popup,
        );
    }

    layer.register_overlay();
}
