//! Static reference records: the company profile, known customers and known
//! products, each stored as a JSON file in a data directory.

use crate::error::InvoiceError;
use invoicer_types::{CompanyProfile, Customer, Product, TaxRates};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;

pub const COMPANY_FILE: &str = "company_profile.json";
pub const CUSTOMERS_FILE: &str = "sample_customers.json";
pub const PRODUCTS_FILE: &str = "sample_products.json";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub company: CompanyProfile,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
}

impl Catalog {
    /// Loads the three record files from `dir`.
    ///
    /// A file that does not exist loads as its empty default. A file that
    /// exists but cannot be parsed is an error.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, InvoiceError> {
        let dir = dir.as_ref();
        let catalog = Self {
            company: read_record(&dir.join(COMPANY_FILE))?,
            customers: read_record(&dir.join(CUSTOMERS_FILE))?,
            products: read_record(&dir.join(PRODUCTS_FILE))?,
        };
        log::debug!(
            "Loaded catalog from {}: {} customers, {} products",
            dir.display(),
            catalog.customers.len(),
            catalog.products.len()
        );
        Ok(catalog)
    }

    /// Finds a customer by exact name. An unknown name yields an empty record,
    /// which the renderer will reject when it needs the missing fields.
    pub fn customer(&self, name: &str) -> Customer {
        self.customers
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
            .cloned()
            .unwrap_or_default()
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// The customer a new invoice starts with: the first one on file.
    pub fn default_customer(&self) -> Customer {
        self.customers.first().cloned().unwrap_or_default()
    }

    pub fn default_tax_rates(&self) -> TaxRates {
        self.company.default_tax_rates()
    }
}

fn read_record<T: DeserializeOwned + Default>(path: &Path) -> Result<T, InvoiceError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} not found, using empty default", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&text).map_err(|source| InvoiceError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}
