// src/error.rs
use invoicer_render_core::RenderError;
use invoicer_types::MissingFieldError;
use std::path::PathBuf;
use thiserror::Error;

/// A comprehensive error type for invoice generation.
#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load catalog file '{path}': {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
