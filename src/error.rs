// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Errors surfaced to the caller of the rendering pipeline.
///
/// Only the primary dataset is fatal; auxiliary datasets and individual
/// records degrade silently inside the loader and renderers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Primary dataset unavailable: {0}")]
    PrimaryDataset(String),

    #[error("Geocoder error: {0}")]
    Geocoder(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether nothing beyond the base map could be rendered.
    pub fn is_fatal_render_error(&self) -> bool {
        matches!(self, AppError::PrimaryDataset(_))
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
