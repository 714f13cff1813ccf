// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoJSON export of a rendered scene.

use crate::models::{LatLng, MapFeature, RenderedMap, Shape};
use geo::{Coord, LineString, Point, Polygon};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};

fn to_coord([lat, lng]: LatLng) -> Coord<f64> {
    Coord { x: lng, y: lat }
}

fn geometry(shape: &Shape) -> Geometry {
    let value = match shape {
        Shape::Polygon { ring, .. } => {
            let exterior: LineString<f64> = ring.iter().copied().map(to_coord).collect();
            geojson::Value::from(&Polygon::new(exterior, vec![]))
        }
        Shape::Marker { position, .. } => geojson::Value::from(&Point::from(to_coord(*position))),
        Shape::CircleMarker { center, .. } => geojson::Value::from(&Point::from(to_coord(*center))),
        Shape::Polyline { path, .. } => {
            let line: LineString<f64> = path.iter().copied().map(to_coord).collect();
            geojson::Value::from(&line)
        }
    };
    Geometry::new(value)
}

fn properties(layer: &str, feature: &MapFeature) -> JsonObject {
    let mut props = JsonObject::new();
    props.insert("layer".to_string(), JsonValue::from(layer));
    props.insert("kind".to_string(), JsonValue::from(feature.shape.kind()));
    props.insert("tooltip".to_string(), JsonValue::from(feature.tooltip.html.as_str()));
    props.insert("popup".to_string(), JsonValue::from(feature.popup.html.as_str()));

    match &feature.shape {
        Shape::Polygon { style, .. } | Shape::Polyline { style, .. } => {
            props.insert("color".to_string(), JsonValue::from(style.color.as_str()));
        }
        Shape::CircleMarker { radius, style, .. } => {
            props.insert("color".to_string(), JsonValue::from(style.color.as_str()));
            props.insert("radius".to_string(), JsonValue::from(*radius));
        }
        Shape::Marker { icon, .. } => {
            props.insert("iconSize".to_string(), JsonValue::from(icon.size[0]));
        }
    }
    props
}

/// One GeoJSON feature per map primitive, in layer order.
pub fn to_feature_collection(map: &RenderedMap) -> FeatureCollection {
    let features = map
        .layers
        .iter()
        .flat_map(|layer| {
            layer.features.iter().map(move |feature| Feature {
                bbox: None,
                geometry: Some(geometry(&feature.shape)),
                id: None,
                properties: Some(properties(&layer.name, feature)),
                foreign_members: None,
            })
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
