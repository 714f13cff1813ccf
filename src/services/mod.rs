// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - loading, coloring, rendering.

pub mod drive_time;
pub mod export;
pub mod geocoder;
pub mod layers;
pub mod loader;
pub mod popup;
pub mod shell;

pub use drive_time::{drive_time_color, parse_drive_time, Rgb};
pub use geocoder::{focus_on, GeocodeHit, Geocoder, SearchFocus};
pub use loader::{AuxDataset, DatasetLoader, Datasets, FetchError};
pub use shell::MapShell;
