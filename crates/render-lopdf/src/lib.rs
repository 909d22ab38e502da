//! Invoice PDF renderer using lopdf.
//!
//! Builds the whole document in memory with the standard Helvetica faces
//! (never embedded) and writes it out once on `finalize`.

mod content;
mod renderer;

pub use content::render_page_content;
pub use renderer::LopdfRenderer;
