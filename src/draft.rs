//! The mutable editing surface behind an invoice, and the snapshot it hands
//! to the renderer.

use crate::catalog::Catalog;
use crate::error::InvoiceError;
use invoicer_totals::compute_totals;
use invoicer_types::{
    CompanyProfile, Customer, InvoiceMeta, InvoicePayload, LineItem, Product, SaleType, TaxRates,
    Totals,
};
use rust_decimal::Decimal;

pub const DEFAULT_INVOICE_NO: &str = "597";
pub const DEFAULT_STATE_CODE: &str = "27";

/// An invoice being edited.
///
/// The item list is never empty. Totals are not cached; [`InvoiceDraft::totals`]
/// recomputes them from the current rows every time it is called.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub meta: InvoiceMeta,
    pub customer: Customer,
    rates: TaxRates,
    items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// A new draft with metadata and tax-rate defaults taken from `company`,
    /// dated today.
    pub fn new(company: &CompanyProfile) -> Self {
        let meta = InvoiceMeta {
            invoice_no: DEFAULT_INVOICE_NO.to_string(),
            date: chrono::Local::now().date_naive(),
            sale_type: SaleType::default(),
            state_code: company
                .state_code
                .clone()
                .unwrap_or_else(|| DEFAULT_STATE_CODE.to_string()),
        };
        Self {
            meta,
            customer: Customer::default(),
            rates: company.default_tax_rates().clamped(),
            items: vec![LineItem::blank()],
        }
    }

    /// Starts a new invoice: one blank row, metadata and rates kept.
    pub fn reset(&mut self) {
        self.items.clear();
        self.items.push(LineItem::blank());
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn tax_rates(&self) -> TaxRates {
        self.rates
    }

    pub fn add_item(&mut self) -> &mut LineItem {
        self.items.push(LineItem::blank());
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Removes the last row unless it is the only one. Returns the removed row.
    pub fn remove_last(&mut self) -> Option<LineItem> {
        if self.items.len() > 1 {
            self.items.pop()
        } else {
            None
        }
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut LineItem> {
        self.items.get_mut(index)
    }

    pub fn set_quantity(&mut self, index: usize, quantity: Decimal) -> bool {
        self.edit(index, |item| item.quantity = quantity.max(Decimal::ZERO))
    }

    pub fn set_rate(&mut self, index: usize, rate: Decimal) -> bool {
        self.edit(index, |item| item.rate = rate.max(Decimal::ZERO))
    }

    pub fn set_tax_rates(&mut self, rates: TaxRates) {
        self.rates = rates.clamped();
    }

    /// Fills a row from a catalog product.
    ///
    /// The HSN code is always replaced. The rate is only filled in while the
    /// row's rate is still zero, so a rate typed by hand survives a product
    /// change.
    pub fn select_product(&mut self, index: usize, product: &Product) -> bool {
        self.edit(index, |item| {
            item.product_name = product.name.clone();
            item.hsn_code = product.hsn.clone();
            if item.rate.is_zero() {
                item.rate = product.default_rate;
            }
        })
    }

    /// Replaces every row with `rows`, as if each had been typed in.
    ///
    /// Negative quantities and rates are clamped to zero, and a row whose
    /// product name is in the catalog is auto-filled from it. An empty list is
    /// rejected and leaves the draft untouched.
    pub fn fill_rows(&mut self, rows: Vec<LineItem>, catalog: &Catalog) -> Result<(), InvoiceError> {
        if rows.is_empty() {
            return Err(InvoiceError::InvalidInput(
                "an invoice needs at least one line item".to_string(),
            ));
        }

        self.items.clear();
        for (index, row) in rows.into_iter().enumerate() {
            let (quantity, rate) = (row.quantity, row.rate);
            let product = catalog.product(&row.product_name);
            self.items.push(row);
            self.set_quantity(index, quantity);
            self.set_rate(index, rate);
            if let Some(product) = product {
                self.select_product(index, product);
            }
        }
        log::debug!("filled draft with {} rows", self.items.len());
        Ok(())
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.rates)
    }

    /// Freezes the draft into a payload for rendering.
    pub fn snapshot(&self, company: &CompanyProfile) -> InvoicePayload {
        InvoicePayload {
            company: company.clone(),
            invoice: self.meta.clone(),
            customer: self.customer.clone(),
            items: self.items.clone(),
            totals: self.totals(),
        }
    }

    fn edit(&mut self, index: usize, f: impl FnOnce(&mut LineItem)) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }
}
