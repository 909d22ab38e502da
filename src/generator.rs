// src/generator.rs

use crate::error::InvoiceError;
use invoicer_layout::{InvoiceLayout, LayoutSettings, PageSize};
use invoicer_render_core::{DocumentInfo, DocumentRenderer};
use invoicer_render_lopdf::LopdfRenderer;
use invoicer_types::InvoicePayload;
use std::fs;
use std::path::Path;

const PRODUCER: &str = concat!("invoicer ", env!("CARGO_PKG_VERSION"));

/// Renders invoice payloads into single-page PDF documents.
#[derive(Debug, Clone, Default)]
pub struct InvoiceRenderer {
    layout: InvoiceLayout,
}

impl InvoiceRenderer {
    pub fn builder() -> InvoiceRendererBuilder {
        InvoiceRendererBuilder::new()
    }

    pub fn settings(&self) -> &LayoutSettings {
        self.layout.settings()
    }

    /// Lays out and renders one payload, returning the finished document bytes.
    ///
    /// A fresh renderer and buffer are used for every call, so the returned
    /// bytes are never shared with a later render.
    pub fn render(&self, payload: &InvoicePayload) -> Result<Vec<u8>, InvoiceError> {
        let page = self.layout.layout(payload)?;

        let info = DocumentInfo {
            title: format!("Invoice {}", payload.invoice.invoice_no),
            producer: PRODUCER.to_string(),
        };
        let mut renderer: Box<dyn DocumentRenderer<Vec<u8>>> = Box::new(LopdfRenderer::new());
        renderer.begin_document(&info)?;
        renderer.render_page(&page)?;
        let bytes = renderer.finalize(Vec::new())?;

        log::info!(
            "Rendered invoice {} ({} bytes, {} item rows)",
            payload.invoice.invoice_no,
            bytes.len(),
            page.item_rows
        );
        Ok(bytes)
    }

    /// Renders one payload and writes it to `path`.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        payload: &InvoicePayload,
        path: P,
    ) -> Result<(), InvoiceError> {
        let bytes = self.render(payload)?;
        fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}

/// Renders one payload with the default A4 stencil.
pub fn render_invoice(payload: &InvoicePayload) -> Result<Vec<u8>, InvoiceError> {
    InvoiceRenderer::default().render(payload)
}

/// A builder for creating an `InvoiceRenderer` with non-default layout settings.
#[derive(Debug, Clone, Default)]
pub struct InvoiceRendererBuilder {
    settings: LayoutSettings,
}

impl InvoiceRendererBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_settings(mut self, settings: LayoutSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.settings.page_size = page_size;
        self
    }

    pub fn with_margin_mm(mut self, margin_mm: f32) -> Self {
        self.settings.margin_mm = margin_mm;
        self
    }

    pub fn with_max_item_rows(mut self, rows: usize) -> Self {
        self.settings.max_item_rows = rows;
        self
    }

    pub fn with_product_name_max_chars(mut self, chars: usize) -> Self {
        self.settings.product_name_max_chars = chars;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = title.into();
        self
    }

    /// Validates the settings and builds the renderer.
    pub fn build(self) -> Result<InvoiceRenderer, InvoiceError> {
        let (width, height) = self.settings.page_size.dimensions_pt();
        let margin = invoicer_layout::mm(self.settings.margin_mm);
        if !margin.is_finite() || margin < 0.0 || margin * 2.0 >= width.min(height) {
            return Err(InvoiceError::InvalidInput(format!(
                "margin of {}mm does not fit the page",
                self.settings.margin_mm
            )));
        }
        Ok(InvoiceRenderer {
            layout: InvoiceLayout::new(self.settings),
        })
    }
}
