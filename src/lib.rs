// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Scenic NY Map: an interactive map of upstate New York getaways
//!
//! This crate loads the scenic area, city, train and point-of-interest
//! datasets and renders them into a map scene of layered polygons, markers
//! and routes, each with tooltip and popup content, ready for the browser.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
