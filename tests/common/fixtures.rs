#![allow(dead_code)]

use chrono::NaiveDate;
use invoicer::{
    CompanyProfile, Customer, InvoiceMeta, InvoicePayload, LineItem, SaleType, TaxRates,
    compute_totals,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A company profile with every printed field present
pub fn company() -> CompanyProfile {
    CompanyProfile {
        company_name: Some("MOHAN TEXTILES".to_string()),
        office_address: Some("12 Market Road, Pune 411002".to_string()),
        gstin: Some("27ABCDE1234F1Z5".to_string()),
        registration_no: Some("MH26A0012345".to_string()),
        email: Some("accounts@mohan.example".to_string()),
        phones: Some(vec!["9820000001".to_string(), "9820000002".to_string()]),
        bank_name: Some("State Bank".to_string()),
        bank_address: Some("Camp Branch, Pune".to_string()),
        account_no: Some("001122334455".to_string()),
        account_name: Some("Mohan Textiles".to_string()),
        ifsc: Some("SBIN0000123".to_string()),
        ..Default::default()
    }
}

pub fn customer() -> Customer {
    Customer {
        name: Some("Sharma Stores".to_string()),
        gstin: Some("27PQRSX6789K1Z2".to_string()),
        address: Some("Main Street, Nashik".to_string()),
    }
}

pub fn meta() -> InvoiceMeta {
    InvoiceMeta {
        invoice_no: "597".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        sale_type: SaleType::StateSale,
        state_code: "27".to_string(),
    }
}

pub fn item(art_no: &str, product: &str, qty: Decimal, rate: Decimal) -> LineItem {
    LineItem::new(art_no, product, "5208", qty, rate)
}

/// `count` items named ART-01, ART-02, ...
pub fn numbered_items(count: usize) -> Vec<LineItem> {
    (1..=count)
        .map(|n| {
            item(
                &format!("ART-{n:02}"),
                &format!("Product {n}"),
                Decimal::from(n),
                dec!(10.50),
            )
        })
        .collect()
}

/// A complete payload with totals computed at 6% + 6%
pub fn payload(items: Vec<LineItem>) -> InvoicePayload {
    let totals = compute_totals(&items, TaxRates::default());
    InvoicePayload {
        company: company(),
        invoice: meta(),
        customer: customer(),
        items,
        totals,
    }
}

pub fn two_item_payload() -> InvoicePayload {
    payload(vec![
        item("A1", "Cotton Saree", dec!(2), dec!(100)),
        item("A2", "Silk Dupatta", dec!(1), dec!(50)),
    ])
}
