//! Core rendering abstractions for invoice documents.
//!
//! - `DocumentRenderer` trait for abstracting the document-writing backend
//! - Error types for rendering operations
//! - Shared helpers for text encoding and font resource naming

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentInfo, DocumentRenderer};
