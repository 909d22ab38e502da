//! The invoice stencil.
//!
//! Every element is placed at a fixed offset from a vertical cursor that
//! starts at the top margin and only ever moves down by constants. Nothing is
//! measured except the width of right- and centre-aligned strings, so text
//! that is too long overlaps its neighbours instead of reflowing.

use crate::config::LayoutSettings;
use crate::elements::{LayoutElement, LineElement, PositionedElement, RectElement, TextElement};
use crate::fonts::{FontFace, text_width};
use crate::format::{format_money, format_quantity};
use crate::output::LaidOutPage;
use crate::util::mm;
use invoicer_types::{
    InvoiceMeta, InvoicePayload, LineItem, MissingFieldError, Totals, required, required_list,
};
use itertools::Itertools;

/// Table columns: header title and width in millimetres.
const COLUMNS: [(&str, f32); 6] = [
    ("ART NO", 18.0),
    ("PRODUCT DETAILS", 70.0),
    ("HSN", 25.0),
    ("QTY", 18.0),
    ("RATE", 20.0),
    ("AMOUNT", 26.0),
];

const TABLE_HEIGHT_MM: f32 = 72.0;
const TABLE_HEADER_DROP_MM: f32 = 5.0;
const TABLE_FIRST_ROW_DROP_MM: f32 = 10.0;
const TABLE_ROW_HEIGHT_MM: f32 = 6.0;
/// Distance from the table top to the totals block.
const TABLE_BLOCK_MM: f32 = 76.0;
/// Left padding of text inside a cell, and right padding of the amount column.
const CELL_PAD_MM: f32 = 2.0;

// Row anchors, measured from the left margin.
const PRODUCT_X_MM: f32 = 20.0;
const HSN_X_MM: f32 = 92.0;
const QTY_RIGHT_MM: f32 = 110.0;
const RATE_RIGHT_MM: f32 = 130.0;

const SIGNATURE_LIFT_MM: f32 = 15.0;

/// Invoice dates print day first: `01-05-2024`.
const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Centre,
    Right,
}

/// Every payload field the stencil prints unconditionally, borrowed after a
/// single up-front presence check.
struct RequiredFields<'a> {
    company_name: &'a str,
    office_address: &'a str,
    gstin: &'a str,
    registration_no: &'a str,
    email: &'a str,
    phones: &'a [String],
    customer_name: &'a str,
    customer_gstin: &'a str,
    customer_address: &'a str,
    bank_name: &'a str,
    bank_address: &'a str,
    account_no: &'a str,
    account_name: &'a str,
    ifsc: &'a str,
}

impl<'a> RequiredFields<'a> {
    fn collect(payload: &'a InvoicePayload) -> Result<Self, MissingFieldError> {
        let company = &payload.company;
        let customer = &payload.customer;
        Ok(Self {
            company_name: required(&company.company_name, "company.company_name")?,
            office_address: required(&company.office_address, "company.office_address")?,
            gstin: required(&company.gstin, "company.gstin")?,
            registration_no: required(&company.registration_no, "company.udyog_aadhar")?,
            email: required(&company.email, "company.email")?,
            phones: required_list(&company.phones, "company.phones")?,
            customer_name: required(&customer.name, "customer.name")?,
            customer_gstin: required(&customer.gstin, "customer.gstin")?,
            customer_address: required(&customer.address, "customer.address")?,
            bank_name: required(&company.bank_name, "company.bank_name")?,
            bank_address: required(&company.bank_address, "company.bank_address")?,
            account_no: required(&company.account_no, "company.account_no")?,
            account_name: required(&company.account_name, "company.account_name")?,
            ifsc: required(&company.ifsc, "company.ifsc")?,
        })
    }
}

/// Accumulates positioned elements while tracking the vertical cursor.
struct Painter {
    width: f32,
    height: f32,
    left: f32,
    right: f32,
    cursor: f32,
    elements: Vec<PositionedElement>,
}

impl Painter {
    fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            left: margin,
            right: width - margin,
            cursor: height - margin,
            elements: Vec::new(),
        }
    }

    fn centre(&self) -> f32 {
        self.width / 2.0
    }

    fn down(&mut self, distance_mm: f32) {
        self.cursor -= mm(distance_mm);
    }

    fn text_at(&mut self, anchor_x: f32, y: f32, content: String, font: FontFace, size: f32, align: Align) {
        let x = match align {
            Align::Left => anchor_x,
            Align::Centre => anchor_x - text_width(&content, font, size) / 2.0,
            Align::Right => anchor_x - text_width(&content, font, size),
        };
        self.elements.push(PositionedElement {
            x,
            y,
            element: LayoutElement::Text(TextElement {
                content,
                font,
                font_size: size,
            }),
        });
    }

    fn text(&mut self, anchor_x: f32, content: String, font: FontFace, size: f32, align: Align) {
        self.text_at(anchor_x, self.cursor, content, font, size, align);
    }

    fn line(&mut self, x: f32, y: f32, end_x: f32, end_y: f32) {
        self.elements.push(PositionedElement {
            x,
            y,
            element: LayoutElement::Line(LineElement { end_x, end_y }),
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.elements.push(PositionedElement {
            x,
            y,
            element: LayoutElement::Rectangle(RectElement { width, height }),
        });
    }

    fn finish(self, item_rows: usize) -> LaidOutPage {
        LaidOutPage {
            width: self.width,
            height: self.height,
            elements: self.elements,
            item_rows,
        }
    }
}

/// Lays an invoice payload out onto a single fixed-size page.
#[derive(Debug, Clone, Default)]
pub struct InvoiceLayout {
    settings: LayoutSettings,
}

impl InvoiceLayout {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Places every section of the invoice, top to bottom.
    ///
    /// Fails before placing anything if a printed company or customer field
    /// is absent. Items past `max_item_rows` are dropped without error.
    pub fn layout(&self, payload: &InvoicePayload) -> Result<LaidOutPage, MissingFieldError> {
        let fields = RequiredFields::collect(payload)?;
        let (width, height) = self.settings.page_size.dimensions_pt();
        let mut page = Painter::new(width, height, mm(self.settings.margin_mm));

        self.header(&mut page, &fields);
        Self::company_details(&mut page, &fields);
        Self::meta_row(&mut page, &payload.invoice);
        Self::consignee(&mut page, &fields);
        let item_rows = self.items_table(&mut page, &payload.items);
        Self::totals(&mut page, &payload.totals);
        Self::bank_details(&mut page, &fields);
        Self::signature(&mut page, &fields);

        log::debug!(
            "laid out invoice {} with {} of {} items ({} elements)",
            payload.invoice.invoice_no,
            item_rows,
            payload.items.len(),
            page.elements.len()
        );
        Ok(page.finish(item_rows))
    }

    fn header(&self, page: &mut Painter, fields: &RequiredFields<'_>) {
        let centre = page.centre();
        page.text(centre, self.settings.title.clone(), FontFace::Bold, 16.0, Align::Centre);
        page.down(8.0);
        page.text(centre, fields.company_name.to_string(), FontFace::Bold, 20.0, Align::Centre);
        page.down(7.0);
        page.text(centre, fields.office_address.to_string(), FontFace::Regular, 9.0, Align::Centre);
        page.down(5.0);
    }

    fn company_details(page: &mut Painter, fields: &RequiredFields<'_>) {
        let (left, right) = (page.left, page.right);
        page.text(
            left,
            format!("GSTIN: {}    UDYOG AADHAR: {}", fields.gstin, fields.registration_no),
            FontFace::Regular,
            9.0,
            Align::Left,
        );
        page.text(
            right,
            format!("EMAIL: {}    MOBILE: {}", fields.email, fields.phones.iter().join(", ")),
            FontFace::Regular,
            9.0,
            Align::Right,
        );
        page.down(6.0);
    }

    fn meta_row(page: &mut Painter, invoice: &InvoiceMeta) {
        let (left, centre, right) = (page.left, page.centre(), page.right);
        page.text(left, format!("INVOICE NO: {}", invoice.invoice_no), FontFace::Bold, 10.0, Align::Left);
        page.text(centre, format!("DATE: {}", invoice.date.format(DATE_FORMAT)), FontFace::Bold, 10.0, Align::Centre);
        page.text(right, format!("SALE TYPE: {}", invoice.sale_type), FontFace::Bold, 10.0, Align::Right);
        page.down(6.0);

        let y = page.cursor;
        page.line(left, y, right, y);
        page.down(6.0);
    }

    fn consignee(page: &mut Painter, fields: &RequiredFields<'_>) {
        let left = page.left;
        page.text(left, "CONSIGNEE DETAILS".to_string(), FontFace::Bold, 10.0, Align::Left);
        page.down(5.0);
        page.text(left, format!("Name: {}", fields.customer_name), FontFace::Regular, 10.0, Align::Left);
        page.down(5.0);
        page.text(left, format!("GSTIN: {}", fields.customer_gstin), FontFace::Regular, 10.0, Align::Left);
        page.down(5.0);
        page.text(left, format!("Address: {}", fields.customer_address), FontFace::Regular, 10.0, Align::Left);
        page.down(7.0);
    }

    /// Draws the bordered table and returns how many item rows were placed.
    fn items_table(&self, page: &mut Painter, items: &[LineItem]) -> usize {
        let (left, right) = (page.left, page.right);
        let top = page.cursor;
        let bottom = top - mm(TABLE_HEIGHT_MM);

        page.rect(left, bottom, right - left, mm(TABLE_HEIGHT_MM));

        let header_y = top - mm(TABLE_HEADER_DROP_MM);
        let mut column_x = left;
        for (title, width_mm) in COLUMNS {
            page.text_at(column_x + mm(CELL_PAD_MM), header_y, title.to_string(), FontFace::Bold, 9.0, Align::Left);
            column_x += mm(width_mm);
        }

        let mut separator_x = left;
        for (_, width_mm) in &COLUMNS[..COLUMNS.len() - 1] {
            separator_x += mm(*width_mm);
            page.line(separator_x, top, separator_x, bottom);
        }

        let cap = self.settings.max_item_rows;
        if items.len() > cap {
            log::debug!("dropping {} items beyond the {cap}-row table", items.len() - cap);
        }

        let mut row_y = top - mm(TABLE_FIRST_ROW_DROP_MM);
        let mut rows = 0;
        for item in items.iter().take(cap) {
            let product: String = item
                .product_name
                .chars()
                .take(self.settings.product_name_max_chars)
                .collect();

            page.text_at(left + mm(CELL_PAD_MM), row_y, item.article_number.clone(), FontFace::Regular, 9.0, Align::Left);
            page.text_at(left + mm(PRODUCT_X_MM), row_y, product, FontFace::Regular, 9.0, Align::Left);
            page.text_at(left + mm(HSN_X_MM), row_y, item.hsn_code.clone(), FontFace::Regular, 9.0, Align::Left);
            page.text_at(left + mm(QTY_RIGHT_MM), row_y, format_quantity(item.quantity), FontFace::Regular, 9.0, Align::Right);
            page.text_at(left + mm(RATE_RIGHT_MM), row_y, format_money(item.rate), FontFace::Regular, 9.0, Align::Right);
            page.text_at(right - mm(CELL_PAD_MM), row_y, format_money(item.amount()), FontFace::Regular, 9.0, Align::Right);

            row_y -= mm(TABLE_ROW_HEIGHT_MM);
            rows += 1;
        }

        page.cursor = top - mm(TABLE_BLOCK_MM);
        rows
    }

    fn totals(page: &mut Painter, totals: &Totals) {
        let anchor = page.right - mm(CELL_PAD_MM);
        page.text(anchor, format!("SUBTOTAL: {}", format_money(totals.subtotal)), FontFace::Bold, 10.0, Align::Right);
        page.down(5.0);
        page.text(anchor, format!("CGST: {}", format_money(totals.cgst)), FontFace::Regular, 10.0, Align::Right);
        page.down(5.0);
        page.text(anchor, format!("SGST: {}", format_money(totals.sgst)), FontFace::Regular, 10.0, Align::Right);
        page.down(6.0);
        page.text(anchor, format!("TOTAL: {}", format_money(totals.total)), FontFace::Bold, 11.0, Align::Right);
        page.down(8.0);
    }

    fn bank_details(page: &mut Painter, fields: &RequiredFields<'_>) {
        let left = page.left;
        page.text(left, "Bank:".to_string(), FontFace::Bold, 10.0, Align::Left);
        page.down(5.0);

        let lines = [
            fields.bank_name.to_string(),
            format!("Address: {}", fields.bank_address),
            format!("A/C No: {}", fields.account_no),
            format!("A/C Name: {}", fields.account_name),
            format!("IFSC Code: {}", fields.ifsc),
        ];
        let last = lines.len() - 1;
        for (i, line) in lines.into_iter().enumerate() {
            page.text(left, line, FontFace::Regular, 9.0, Align::Left);
            page.down(if i == last { 10.0 } else { 4.5 });
        }
    }

    fn signature(page: &mut Painter, fields: &RequiredFields<'_>) {
        let right = page.right;
        let for_y = page.cursor + mm(SIGNATURE_LIFT_MM);
        page.text_at(right, for_y, format!("FOR {}", fields.company_name), FontFace::Bold, 10.0, Align::Right);
        page.text(right, "SIGNATURE".to_string(), FontFace::Regular, 10.0, Align::Right);
    }
}
