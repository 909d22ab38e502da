mod common;

use common::{GeneratedPdf, TestResult};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn invoicer(args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_invoicer")).args(args).output()
}

fn write_data_dir(dir: &Path) -> std::io::Result<()> {
    fs::write(
        dir.join("company_profile.json"),
        r#"{
            "company_name": "MOHAN TEXTILES",
            "office_address": "12 Market Road, Pune 411002",
            "gstin": "27ABCDE1234F1Z5",
            "udyog_aadhar": "MH26A0012345",
            "email": "accounts@mohan.example",
            "phones": ["9820000001"],
            "bank_name": "State Bank",
            "bank_address": "Camp Branch, Pune",
            "account_no": "001122334455",
            "account_name": "Mohan Textiles",
            "ifsc": "SBIN0000123"
        }"#,
    )?;
    fs::write(
        dir.join("sample_customers.json"),
        r#"[
            {"name": "Shree Traders", "gstin": "27BBBBB1111B1Z6", "address": "Laxmi Road, Pune"},
            {"name": "Sharma Stores", "gstin": "27PQRSX6789K1Z2", "address": "Main Street, Nashik"}
        ]"#,
    )?;
    fs::write(
        dir.join("sample_products.json"),
        r#"[{"name": "Cotton Saree", "hsn": "5208", "default_rate": 100}]"#,
    )
}

#[test]
fn test_totals_prints_two_decimals() -> TestResult {
    let dir = tempfile::tempdir()?;
    let items = dir.path().join("items.json");
    fs::write(
        &items,
        r#"[{"qty": 2, "rate": 100}, {"qty": 1, "rate": "50"}]"#,
    )?;

    let output = invoicer(&["totals", items.to_str().unwrap()])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Subtotal:       250.00"), "{stdout}");
    assert!(stdout.contains("CGST:           15.00"), "{stdout}");
    assert!(stdout.contains("Total:          280.00"), "{stdout}");
    assert!(stdout.contains("Total quantity: 3\n"), "{stdout}");
    Ok(())
}

#[test]
fn test_generate_defaults_to_first_customer() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_data_dir(dir.path())?;
    let items = dir.path().join("items.json");
    let out = dir.path().join("invoice.pdf");
    // The saree row is auto-filled from the catalog; the towel's negative rate is clamped.
    fs::write(
        &items,
        r#"[
            {"art_no": "A1", "product": "Cotton Saree", "qty": 2, "rate": 0},
            {"art_no": "A2", "product": "Hand Towel", "hsn": "6302", "qty": 1, "rate": -5}
        ]"#,
    )?;

    let output = invoicer(&[
        "generate",
        "--data-dir",
        dir.path().to_str().unwrap(),
        "--items",
        items.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--date",
        "2024-05-01",
    ])?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let pdf = GeneratedPdf::from_bytes(fs::read(&out)?)?;
    assert_pdf_contains_text!(pdf, "Name: Shree Traders");
    assert_pdf_contains_text!(pdf, "DATE: 01-05-2024");
    assert_pdf_contains_text!(pdf, "5208");
    assert_pdf_contains_text!(pdf, "SUBTOTAL: 200.00");
    Ok(())
}

#[test]
fn test_generate_with_named_customer() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_data_dir(dir.path())?;
    let items = dir.path().join("items.json");
    let out = dir.path().join("invoice.pdf");
    fs::write(&items, r#"[{"product": "Cotton Saree", "qty": 1}]"#)?;

    let output = invoicer(&[
        "generate",
        "--data-dir",
        dir.path().to_str().unwrap(),
        "--items",
        items.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--customer",
        "Sharma Stores",
        "--invoice-no",
        "612",
        "--sale-type",
        "interstate",
    ])?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let pdf = GeneratedPdf::from_bytes(fs::read(&out)?)?;
    assert_pdf_contains_text!(pdf, "Name: Sharma Stores");
    assert_pdf_contains_text!(pdf, "INVOICE NO: 612");
    assert_pdf_contains_text!(pdf, "SALE TYPE: INTERSTATE SALE");
    Ok(())
}

#[test]
fn test_generate_rejects_empty_items() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_data_dir(dir.path())?;
    let items = dir.path().join("items.json");
    let out = dir.path().join("invoice.pdf");
    fs::write(&items, "[]")?;

    let output = invoicer(&[
        "generate",
        "--data-dir",
        dir.path().to_str().unwrap(),
        "--items",
        items.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ])?;
    assert!(!output.status.success());
    assert!(!out.exists());
    Ok(())
}
