//! Placement of invoice payloads onto a single fixed-size page.
//!
//! The output is a flat list of absolutely positioned text runs, lines and
//! rectangles (`LaidOutPage`). Renderers only translate those into drawing
//! operators; every positioning decision is made here.

pub mod config;
pub mod fonts;
pub mod format;
pub mod util;

mod elements;
mod invoice;
mod output;

pub use self::config::{LayoutSettings, PageSize};
pub use self::elements::{LayoutElement, LineElement, PositionedElement, RectElement, TextElement};
pub use self::fonts::{FontFace, text_width};
pub use self::format::{format_money, format_quantity};
pub use self::invoice::InvoiceLayout;
pub use self::output::LaidOutPage;
pub use self::util::mm;

#[cfg(test)]
mod test_utils;
