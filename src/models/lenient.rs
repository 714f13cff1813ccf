// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lenient decoding for hand-maintained JSON datasets.
//!
//! The datasets are edited by hand and by enrichment scripts, so a single
//! record can carry `null`, a quoted number, or garbage where a coordinate
//! belongs. Decoding must never fail a whole document because of one record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A `[lat, lng]` pair in Leaflet order.
pub type LatLng = [f64; 2];

/// A numeric field that may be missing, `null`, a string, or not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LooseNumber(pub Option<f64>);

impl LooseNumber {
    pub fn get(self) -> Option<f64> {
        self.0
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        LooseNumber(Some(value).filter(|v| v.is_finite()))
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

impl<'de> Deserialize<'de> for LooseNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(LooseNumber(number_from_value(&value)))
    }
}

impl Serialize for LooseNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// A `[lat, lng]` array that decodes to `None` unless both parts are numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoosePoint(pub Option<LatLng>);

impl LoosePoint {
    pub fn get(self) -> Option<LatLng> {
        self.0
    }
}

impl From<LatLng> for LoosePoint {
    fn from(value: LatLng) -> Self {
        LoosePoint(point(value[0].into(), value[1].into()))
    }
}

impl<'de> Deserialize<'de> for LoosePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let pair = match value.as_array() {
            Some(items) if items.len() >= 2 => {
                match (number_from_value(&items[0]), number_from_value(&items[1])) {
                    (Some(lat), Some(lng)) => Some([lat, lng]),
                    _ => None,
                }
            }
            _ => None,
        };
        Ok(LoosePoint(pair))
    }
}

impl Serialize for LoosePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Combine separate `lat`/`lng` fields into a point if both are valid.
pub fn point(lat: LooseNumber, lng: LooseNumber) -> Option<LatLng> {
    Some([lat.get()?, lng.get()?])
}

/// A number that decodes to `0.0` unless it is numeric or a numeric string.
pub fn loose_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(LooseNumber::deserialize(deserializer)?.get().unwrap_or(0.0))
}

/// A non-negative count, rounded to the nearest integer; `0` when unusable.
pub fn loose_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(LooseNumber::deserialize(deserializer)?
        .get()
        .filter(|v| *v >= 0.0)
        .map(|v| v.round().min(u64::MAX as f64) as u64)
        .unwrap_or(0))
}

/// A yes/no flag given as a bool, `"yes"`/`"no"`, `"true"`/`"false"` or
/// `1`/`0`. Anything else is unknown.
pub fn loose_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => Some(flag),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 1.0 => Some(true),
            Some(v) if v == 0.0 => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "y" => Some(true),
            "no" | "false" | "n" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Decode an array of records, dropping the ones that fail to decode.
///
/// Anything other than an array (including `null`) decodes to an empty list.
pub fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => decode_records("record", items),
        _ => Vec::new(),
    })
}

/// Decode each value as a `T`, logging and skipping the ones that don't fit.
pub fn decode_records<T: DeserializeOwned>(kind: &str, items: Vec<Value>) -> Vec<T> {
    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(kind, index, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            kind,
            skipped = total - records.len(),
            "Dropped malformed records"
        );
    }
    records
}
