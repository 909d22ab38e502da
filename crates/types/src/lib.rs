//! Data model shared by the invoice totals engine and the document renderer.
//!
//! Everything here is plain data: line items as they come from an editing
//! surface, tax rates, computed totals, and the immutable `InvoicePayload`
//! snapshot handed to the renderer.

pub mod error;
pub mod model;
pub mod money;
pub mod number;

pub use error::{MissingFieldError, required, required_list};
pub use model::{
    CompanyProfile, Customer, InvoiceMeta, InvoicePayload, LineItem, Product, SaleType, TaxRates,
    Totals,
};
pub use money::{line_amount, round_money};
pub use number::coerce_decimal;

pub use rust_decimal::Decimal;
