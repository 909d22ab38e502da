use crate::fonts::FontFace;

/// An element placed at an absolute position on the page.
///
/// Coordinates are PDF points with the origin at the bottom-left corner.
/// For text, `(x, y)` is the left end of the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub element: LayoutElement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    /// A stroked segment from `(x, y)` to the given end point.
    Line(LineElement),
    /// A stroked, unfilled rectangle whose lower-left corner is `(x, y)`.
    Rectangle(RectElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: FontFace,
    pub font_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineElement {
    pub end_x: f32,
    pub end_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectElement {
    pub width: f32,
    pub height: f32,
}

impl PositionedElement {
    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(text) => Some(text),
            _ => None,
        }
    }
}
