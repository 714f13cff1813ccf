// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Restaurant markers. Closed restaurants are never drawn.

use super::{LayerHandle, POI_ICON_SIZE};
use crate::models::{DivIcon, PointRecord, Restaurant, Shape};
use crate::services::popup::{tooltip, PopupContent, PopupLink};

pub fn render(restaurants: &[Restaurant], layer: &mut LayerHandle) {
    let icon = DivIcon::centered(
        "icon-marker",
        r#"<i class="fa fa-cutlery"></i>"#.to_string(),
        POI_ICON_SIZE,
    );

    let mut closed = 0usize;
    for restaurant in restaurants {
        if restaurant.is_closed() {
            closed += 1;
            continue;
        }
        let Some(position) = restaurant.position() else {
            continue;
        };

        let audience = restaurant.family_friendly.map(|family| {
            if family {
                "Family-friendly"
            } else {
                "Adults-oriented"
            }
        });

        let popup = PopupContent::new(&restaurant.name, 300)
            .detail(restaurant.location.clone())
            .detail(restaurant.specialty.clone())
            .detail(restaurant.atmosphere.clone())
            .detail(audience)
            .description(restaurant.description.as_deref())
            .link(
                restaurant
                    .google_maps_url
                    .as_deref()
                    .map(PopupLink::google_maps),
            )
            .build();

        layer.add(
            Shape::Marker {
                position,
                icon: icon.clone(),
                z_index_offset: 0,
            },
            tooltip(&restaurant.name, restaurant.description.as_deref()),
            popup,
        );
    }

    if closed > 0 {
        tracing::debug!(closed, "Hid closed restaurants");
    }
    layer.register_overlay();
}
