// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pick-your-own orchard markers.

use super::{LayerHandle, POI_ICON_SIZE};
use crate::models::{DivIcon, Orchard, PointRecord, Shape};
use crate::services::popup::{tooltip, PopupContent, PopupLink};

pub fn render(orchards: &[Orchard], layer: &mut LayerHandle) {
    let icon = DivIcon::centered(
        "icon-marker icon-apple",
        r#"<i class="fa fa-apple"></i>"#.to_string(),
        POI_ICON_SIZE,
    );

    for orchard in orchards {
        let Some(position) = orchard.position() else {
            continue;
        };

        let mut popup = PopupContent::new(&orchard.name, 300);
        if let Some(address) = orchard.address.as_deref().filter(|a| !a.is_empty()) {
            popup = popup.meta(address);
        }
        if let Some(drive) = orchard.approx_drive.as_deref().filter(|d| !d.is_empty()) {
            popup = popup.meta_emphasis("Drive:", drive);
        }
        let popup = popup
            .description(orchard.notes.as_deref())
            .link(orchard.website.as_deref().map(PopupLink::website))
            .link(orchard.google_maps_url.as_deref().map(PopupLink::google_maps))
            .build();

        layer.add(
            Shape::Marker {
                position,
                icon: icon.clone(),
                z_index_offset: 0,
            },
            tooltip(&orchard.name, orchard.notes.as_deref()),
            popup,
        );
    }

    layer.register_overlay();
}
