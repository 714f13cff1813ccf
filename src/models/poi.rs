// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point-of-interest records from the auxiliary datasets.
//!
//! Each dataset is a flat JSON array. Field names follow the dataset files
//! (snake_case), and every coordinate is decoded leniently so invalid
//! entries can be skipped at render time.

use super::lenient::{loose_flag, point, LatLng, LooseNumber};
use serde::Deserialize;

/// Common accessors shared by every point-of-interest record.
pub trait PointRecord {
    fn name(&self) -> &str;
    fn position(&self) -> Option<LatLng>;
}

macro_rules! impl_point_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PointRecord for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn position(&self) -> Option<LatLng> {
                    point(self.lat, self.lng)
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Waterfall {
    pub name: String,
    pub lat: LooseNumber,
    pub lng: LooseNumber,
    pub height_ft: LooseNumber,
    pub park_or_area: Option<String>,
    pub nearby_town: Option<String>,
    pub best_season: Option<String>,
    pub access: Option<String>,
    pub description: Option<String>,
    pub google_maps_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Brewery {
    pub name: String,
    pub lat: LooseNumber,
    pub lng: LooseNumber,
    pub location: Option<String>,
    pub founded: Option<serde_json::Value>,
    pub specialty: Option<String>,
    pub visitor_experience: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub google_maps_url: Option<String>,
}

impl Brewery {
    /// Founding year as written in the dataset (number or free text).
    pub fn founded_label(&self) -> Option<String> {
        match self.founded.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Restaurant {
    pub name: String,
    pub lat: LooseNumber,
    pub lng: LooseNumber,
    pub location: Option<String>,
    pub specialty: Option<String>,
    pub atmosphere: Option<String>,
    #[serde(deserialize_with = "loose_flag")]
    pub family_friendly: Option<bool>,
    pub description: Option<String>,
    pub closed_flag: Option<String>,
    pub business_status: Option<String>,
    pub google_maps_url: Option<String>,
}

impl Restaurant {
    /// Closed temporarily or permanently, by either closure field.
    pub fn is_closed(&self) -> bool {
        matches!(
            self.closed_flag.as_deref(),
            Some("temporary") | Some("permanent")
        ) || matches!(
            self.business_status.as_deref(),
            Some("CLOSED_TEMPORARILY") | Some("CLOSED_PERMANENTLY")
        )
    }
}

/// Pick-your-own orchard (`orchards_points.json`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Orchard {
    pub name: String,
    pub lat: LooseNumber,
    pub lng: LooseNumber,
    pub address: Option<String>,
    pub website: Option<String>,
    pub approx_drive: Option<String>,
    pub notes: Option<String>,
    pub place_id: Option<String>,
    pub google_maps_url: Option<String>,
}

/// Museum, historic site, venue or park (`points_of_interest.json`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CulturalSite {
    pub name: String,
    pub lat: LooseNumber,
    pub lng: LooseNumber,
    pub category: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub place_id: Option<String>,
}

impl CulturalSite {
    /// Google Maps link derived from the place id.
    pub fn place_url(&self) -> Option<String> {
        let id = self.place_id.as_deref().filter(|id| !id.is_empty())?;
        Some(format!(
            "https://www.google.com/maps/place/?q=place_id:{}",
            urlencoding::encode(id)
        ))
    }
}

impl_point_record!(Waterfall, Brewery, Restaurant, Orchard, CulturalSite);
