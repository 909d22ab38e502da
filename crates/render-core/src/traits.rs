use crate::error::RenderError;
use invoicer_layout::LaidOutPage;
use std::io::Write;

/// Document-level metadata written into the output's info dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
}

/// A trait for document renderers, abstracting the backend that turns laid-out
/// pages into bytes.
///
/// `finalize` consumes the renderer: a renderer writes exactly one document
/// and cannot be finalized twice or reused for another target.
pub trait DocumentRenderer<W: Write> {
    fn begin_document(&mut self, info: &DocumentInfo) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &LaidOutPage) -> Result<(), RenderError>;

    fn finalize(self: Box<Self>, writer: W) -> Result<W, RenderError>;
}
