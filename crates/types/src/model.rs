use crate::money::line_amount;
use crate::number::{lenient_decimal, lenient_text};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of an invoice.
///
/// The amount is never stored. It is re-derived from quantity and rate on
/// every read, so it cannot drift from `round(quantity * rate, 2)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "art_no", default, deserialize_with = "lenient_text")]
    pub article_number: String,
    #[serde(rename = "product", default, deserialize_with = "lenient_text")]
    pub product_name: String,
    #[serde(rename = "hsn", default, deserialize_with = "lenient_text")]
    pub hsn_code: String,
    #[serde(rename = "qty", default, deserialize_with = "lenient_decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rate: Decimal,
}

impl LineItem {
    pub fn new(
        article_number: impl Into<String>,
        product_name: impl Into<String>,
        hsn_code: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            article_number: article_number.into(),
            product_name: product_name.into(),
            hsn_code: hsn_code.into(),
            quantity,
            rate,
        }
    }

    /// A fresh row as the editing surface creates it: quantity 1, rate 0.
    pub fn blank() -> Self {
        Self {
            quantity: Decimal::ONE,
            ..Default::default()
        }
    }

    pub fn amount(&self) -> Decimal {
        line_amount(self.quantity, self.rate)
    }
}

/// The two co-applied tax components, as fractions (0.06 = 6%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    #[serde(deserialize_with = "lenient_decimal")]
    pub cgst_rate: Decimal,
    #[serde(deserialize_with = "lenient_decimal")]
    pub sgst_rate: Decimal,
}

impl TaxRates {
    pub fn new(cgst_rate: Decimal, sgst_rate: Decimal) -> Self {
        Self {
            cgst_rate,
            sgst_rate,
        }
    }

    /// Both rates clamped into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            cgst_rate: self.cgst_rate.clamp(Decimal::ZERO, Decimal::ONE),
            sgst_rate: self.sgst_rate.clamp(Decimal::ZERO, Decimal::ONE),
        }
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        let six_percent = Decimal::new(6, 2);
        Self::new(six_percent, six_percent)
    }
}

/// Computed invoice totals, every field rounded to two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub total: Decimal,
    pub total_quantity: Decimal,
}

/// The issuing company, as stored in the company profile record.
///
/// Printed fields are optional so an incomplete profile can still be loaded;
/// the renderer refuses to lay out a payload with any of them missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: Option<String>,
    pub office_address: Option<String>,
    pub gstin: Option<String>,
    #[serde(rename = "udyog_aadhar")]
    pub registration_no: Option<String>,
    pub email: Option<String>,
    pub phones: Option<Vec<String>>,
    pub bank_name: Option<String>,
    pub bank_address: Option<String>,
    pub account_no: Option<String>,
    pub account_name: Option<String>,
    pub ifsc: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub default_cgst_rate: Option<Decimal>,
    #[serde(default)]
    pub default_sgst_rate: Option<Decimal>,
}

impl CompanyProfile {
    /// Tax rates to seed a new invoice with: the profile's defaults where
    /// set, otherwise 6% each.
    pub fn default_tax_rates(&self) -> TaxRates {
        let fallback = TaxRates::default();
        TaxRates::new(
            self.default_cgst_rate.unwrap_or(fallback.cgst_rate),
            self.default_sgst_rate.unwrap_or(fallback.sgst_rate),
        )
    }
}

/// The consignee an invoice is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: Option<String>,
    pub gstin: Option<String>,
    pub address: Option<String>,
}

/// A catalog product used to pre-fill line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hsn: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub default_rate: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleType {
    #[default]
    #[serde(rename = "STATE SALE", alias = "state")]
    StateSale,
    #[serde(rename = "INTERSTATE SALE", alias = "interstate")]
    InterstateSale,
}

impl SaleType {
    pub fn label(self) -> &'static str {
        match self {
            SaleType::StateSale => "STATE SALE",
            SaleType::InterstateSale => "INTERSTATE SALE",
        }
    }
}

impl fmt::Display for SaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SaleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "state" | "state sale" => Ok(SaleType::StateSale),
            "interstate" | "interstate sale" => Ok(SaleType::InterstateSale),
            other => Err(format!(
                "unknown sale type '{other}', expected 'state' or 'interstate'"
            )),
        }
    }
}

/// Header data identifying one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMeta {
    pub invoice_no: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub sale_type: SaleType,
    #[serde(default)]
    pub state_code: String,
}

/// Everything needed to render one invoice, captured at generate time.
///
/// The renderer only ever borrows a payload; it is consumed once and not
/// retained afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub company: CompanyProfile,
    pub invoice: InvoiceMeta,
    pub customer: Customer,
    pub items: Vec<LineItem>,
    pub totals: Totals,
}
