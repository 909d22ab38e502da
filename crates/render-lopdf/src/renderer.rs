use crate::content::render_page_content;
use invoicer_layout::{FontFace, LaidOutPage};
use invoicer_render_core::utils::font_resource_name;
use invoicer_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::io::Write;

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and then writes it to the output stream.
pub struct LopdfRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    started: bool,
}

impl LopdfRenderer {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            started: false,
        }
    }

    fn font_dictionary(&mut self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for face in [FontFace::Regular, FontFace::Bold] {
            let font_id = self.document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font_resource_name(face), font_id);
        }
        fonts
    }
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DocumentRenderer<W> for LopdfRenderer {
    fn begin_document(&mut self, info: &DocumentInfo) -> Result<(), RenderError> {
        let fonts = self.font_dictionary();
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(dictionary! { "Font" => fonts }));

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0_i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        let info_id = self.document.add_object(dictionary! {
            "Title" => Object::string_literal(info.title.clone()),
            "Producer" => Object::string_literal(info.producer.clone()),
        });
        self.document.trailer.set("Info", info_id);

        self.started = true;
        Ok(())
    }

    fn render_page(&mut self, page: &LaidOutPage) -> Result<(), RenderError> {
        if !self.started {
            return Err(RenderError::NotStarted);
        }
        if !self.page_ids.is_empty() {
            return Err(RenderError::PageLimit);
        }

        let content = render_page_content(page);
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            page.width.into(),
            page.height.into(),
        ];
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!(
            "Rendered page {:?} with {} elements",
            page_id,
            page.elements.len()
        );
        Ok(())
    }

    fn finalize(mut self: Box<Self>, mut writer: W) -> Result<W, RenderError> {
        if !self.started {
            return Err(RenderError::NotStarted);
        }
        if self.page_ids.is_empty() {
            return Err(RenderError::Other("Document has no page".into()));
        }
        if let Some(Object::Dictionary(pages_dict)) = self.document.objects.get_mut(&self.pages_id) {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", self.page_ids.len() as i64);
        }
        self.document.save_to(&mut writer)?;
        Ok(writer)
    }
}
