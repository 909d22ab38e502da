/// Supported fixed page sizes, in PDF points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.2756, 841.8898),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

/// Tunable constants of the invoice stencil.
///
/// The defaults reproduce the reference layout. Offsets between printed
/// elements are not configurable: they are part of the stencil itself.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    pub page_size: PageSize,
    /// Margin applied to all four sides, in millimetres.
    pub margin_mm: f32,
    /// Items beyond this count are dropped from the table.
    ///
    /// Defaults to `10`, which is what fits in the fixed-height table.
    pub max_item_rows: usize,
    /// Product names are cut to this many characters.
    pub product_name_max_chars: usize,
    pub title: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin_mm: 14.0,
            max_item_rows: 10,
            product_name_max_chars: 40,
            title: "INVOICE".to_string(),
        }
    }
}
