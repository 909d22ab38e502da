use crate::{LaidOutPage, PositionedElement};
use chrono::NaiveDate;
use invoicer_types::{
    CompanyProfile, Customer, InvoiceMeta, InvoicePayload, LineItem, SaleType, Totals,
};
use rust_decimal::Decimal;

pub fn complete_company() -> CompanyProfile {
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

pub fn complete_customer() -> Customer {
    Customer {
        name: Some("Sharma Stores".to_string()),
        gstin: Some("27PQRSX6789K1Z2".to_string()),
        address: Some("Main Street, Nashik".to_string()),
    }
}

pub fn numbered_items(count: usize) -> Vec<LineItem> {
    (1..=count)
        .map(|n| {
            LineItem::new(
                format!("ART-{n:02}"),
                format!("Product {n}"),
                "5208",
                Decimal::from(n),
                Decimal::new(1050, 1),
            )
        })
        .collect()
}

pub fn payload_with_items(items: Vec<LineItem>) -> InvoicePayload {
    InvoicePayload {
        company: complete_company(),
        invoice: InvoiceMeta {
            invoice_no: "597".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            sale_type: SaleType::StateSale,
            state_code: "27".to_string(),
        },
        customer: complete_customer(),
        items,
        totals: Totals::default(),
    }
}

/// Finds the single text element whose content equals `content`.
pub fn find_text<'a>(page: &'a LaidOutPage, content: &str) -> &'a PositionedElement {
    let mut matches = page
        .elements
        .iter()
        .filter(|el| el.as_text().is_some_and(|t| t.content == content));
    let found = matches
        .next()
        .unwrap_or_else(|| panic!("no text element '{content}'"));
    assert!(matches.next().is_none(), "more than one text element '{content}'");
    found
}
