use invoicer_layout::{FontFace, LaidOutPage, LayoutElement, PositionedElement, TextElement};
use invoicer_render_core::utils::{font_resource_name, to_win_ansi};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Stroke width for rules, separators and the table border, in points.
const RULE_WIDTH: f32 = 1.0;

/// Translates a laid-out page into a content stream.
pub fn render_page_content(page: &LaidOutPage) -> Content {
    let mut ctx = PageContext::new();
    for el in &page.elements {
        ctx.draw_element(el);
    }
    ctx.finish()
}

#[derive(Default)]
struct PageRenderState {
    font: Option<(FontFace, f32)>,
}

struct PageContext {
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    fn new() -> Self {
        let mut content = Content { operations: vec![] };
        content
            .operations
            .push(Operation::new("w", vec![RULE_WIDTH.into()]));
        Self {
            content,
            state: Default::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el.x, el.y),
            LayoutElement::Line(line) => {
                self.push("m", vec![el.x.into(), el.y.into()]);
                self.push("l", vec![line.end_x.into(), line.end_y.into()]);
                self.push("S", vec![]);
            }
            LayoutElement::Rectangle(rect) => {
                self.push("re", vec![el.x.into(), el.y.into(), rect.width.into(), rect.height.into()]);
                self.push("S", vec![]);
            }
        }
    }

    fn set_font(&mut self, face: FontFace, size: f32) {
        if self.state.font != Some((face, size)) {
            let name = font_resource_name(face);
            self.push("Tf", vec![Object::Name(name.as_bytes().to_vec()), size.into()]);
            self.state.font = Some((face, size));
        }
    }

    fn draw_text(&mut self, text: &TextElement, x: f32, y: f32) {
        if text.content.trim().is_empty() {
            return;
        }
        let (encoded, replaced) = to_win_ansi(&text.content);
        if replaced {
            log::warn!(
                "Replaced characters outside WinAnsi with '?' in text: {}",
                text.content
            );
        }
        self.push("BT", vec![]);
        self.set_font(text.font, text.font_size);
        self.push("Td", vec![x.into(), y.into()]);
        self.push("Tj", vec![Object::String(encoded, StringFormat::Literal)]);
        self.push("ET", vec![]);
    }
}
