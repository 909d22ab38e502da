//! Invoice totals and fixed-layout PDF invoices.
//!
//! The totals engine ([`compute_totals`]) turns line items and tax rates into
//! rounded totals. The renderer ([`render_invoice`], [`InvoiceRenderer`])
//! places an [`InvoicePayload`] onto a single A4 page and returns PDF bytes.
//! [`Catalog`] and [`InvoiceDraft`] cover loading reference records and
//! editing an invoice before it is rendered.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod generator;

pub use catalog::Catalog;
pub use draft::InvoiceDraft;
pub use error::InvoiceError;
pub use generator::{InvoiceRenderer, InvoiceRendererBuilder, render_invoice};

pub use invoicer_layout::{InvoiceLayout, LaidOutPage, LayoutSettings, PageSize};
pub use invoicer_render_core::RenderError;
pub use invoicer_totals::{compute_totals, line_amount, round_money};
pub use invoicer_types::{
    CompanyProfile, Customer, Decimal, InvoiceMeta, InvoicePayload, LineItem, MissingFieldError,
    Product, SaleType, TaxRates, Totals,
};
