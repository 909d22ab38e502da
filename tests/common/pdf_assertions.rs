#![allow(dead_code)]

use lopdf::{Dictionary, Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object.as_reference() {
        Ok(id) => doc.get_dictionary(id).ok(),
        Err(_) => object.as_dict().ok(),
    }
}

/// Base font names referenced from the page resources
pub fn extract_font_names(doc: &LopdfDocument) -> BTreeSet<String> {
    let mut fonts = BTreeSet::new();
    for (_page_num, page_id) in doc.get_pages() {
        let font_dict = doc
            .get_dictionary(page_id)
            .ok()
            .and_then(|page| page.get(b"Resources").ok())
            .and_then(|resources| resolve_dict(doc, resources))
            .and_then(|resources| resources.get(b"Font").ok())
            .and_then(|font| resolve_dict(doc, font));
        let Some(font_dict) = font_dict else {
            continue;
        };
        for (_name, font) in font_dict.iter() {
            if let Some(base) = resolve_dict(doc, font)
                .and_then(|f| f.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(base).to_string());
            }
        }
    }
    fonts
}

/// MediaBox of the first page as (width, height)
pub fn get_page_dimensions(doc: &LopdfDocument) -> Option<(f32, f32)> {
    let (_, page_id) = doc.get_pages().into_iter().next()?;
    let page = doc.get_dictionary(page_id).ok()?;
    let arr = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    // MediaBox entries may be written as integers or reals.
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert the MediaBox size of the first page, in points
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $width:expr, $height:expr) => {
        let (w, h) = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc)
            .expect("page has a MediaBox");
        assert!(
            (w - $width).abs() < 0.5 && (h - $height).abs() < 0.5,
            "Expected page size {}x{}, got {}x{}",
            $width,
            $height,
            w,
            h
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}
