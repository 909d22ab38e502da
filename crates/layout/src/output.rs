//! Output of the layout pass.

use crate::PositionedElement;

/// One fully laid-out page, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutPage {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<PositionedElement>,
    /// Number of line items that made it into the table.
    pub item_rows: usize,
}

impl LaidOutPage {
    /// Iterates over the text of every text element, in placement order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter_map(|el| el.as_text())
            .map(|t| t.content.as_str())
    }
}
