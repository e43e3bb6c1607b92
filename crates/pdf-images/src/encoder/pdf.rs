//! lopdf-backed document encoder

use super::image_stream::{ImageStream, build_image_stream};
use super::{DocumentEncoder, EmbedFormat};
use crate::constants::{DEFAULT_TITLE, mm_to_pt};
use crate::types::*;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::sync::Arc;

/// Writes pages sized in millimeters as PDF 1.7
#[derive(Debug, Clone)]
pub struct LopdfEncoder {
    title: String,
}

impl LopdfEncoder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for LopdfEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

/// Document under construction
pub struct LopdfDocument {
    doc: Document,
    title: String,
    pages_id: ObjectId,
    pages: Vec<DraftPage>,
}

/// A page whose content stream has not been written yet
struct DraftPage {
    width_pt: f32,
    height_pt: f32,
    xobjects: Dictionary,
    ops: Vec<Operation>,
}

impl DraftPage {
    fn new(page: &PageSpec) -> Self {
        let (width_mm, height_mm) = page.oriented_dimensions_mm();
        Self {
            width_pt: mm_to_pt(width_mm),
            height_pt: mm_to_pt(height_mm),
            xobjects: Dictionary::new(),
            ops: Vec::new(),
        }
    }
}

impl LopdfDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl DocumentEncoder for LopdfEncoder {
    type Document = LopdfDocument;
    type Image = ImageStream;

    fn create_document(&mut self, page: &PageSpec) -> Result<Self::Document> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        Ok(LopdfDocument {
            doc,
            title: self.title.clone(),
            pages_id,
            pages: vec![DraftPage::new(page)],
        })
    }

    fn add_page(&mut self, document: &mut Self::Document, page: &PageSpec) -> Result<()> {
        document.pages.push(DraftPage::new(page));
        Ok(())
    }

    fn prepare_image(data: Arc<[u8]>, format: EmbedFormat) -> Result<Self::Image> {
        build_image_stream(&data, format)
    }

    fn place_image(
        &mut self,
        document: &mut Self::Document,
        image: Self::Image,
        placement: &Placement,
    ) -> Result<()> {
        let image_id = image.add_to(&mut document.doc);

        let page = document
            .pages
            .last_mut()
            .ok_or_else(|| ConvertError::Encoder("No page to place the image on".to_string()))?;

        let name = format!("Im{}", page.xobjects.len());
        page.xobjects
            .set(name.as_bytes(), Object::Reference(image_id));

        let width = mm_to_pt(placement.width_mm);
        let height = mm_to_pt(placement.height_mm);
        let x = mm_to_pt(placement.x_mm);
        // Placement is measured from the top-left corner, PDF from the bottom-left
        let y = page.height_pt - mm_to_pt(placement.y_mm) - height;

        page.ops.push(Operation::new("q", vec![]));
        page.ops.push(Operation::new(
            "cm",
            vec![
                Object::Real(width),
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(height),
                Object::Real(x),
                Object::Real(y),
            ],
        ));
        page.ops
            .push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        page.ops.push(Operation::new("Q", vec![]));

        Ok(())
    }

    fn save(document: Self::Document) -> Result<Vec<u8>> {
        let LopdfDocument {
            mut doc,
            title,
            pages_id,
            pages,
        } = document;

        let mut kids = Vec::with_capacity(pages.len());
        for page in pages {
            let content = Content {
                operations: page.ops,
            }
            .encode()?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

            let mut resources = Dictionary::new();
            resources.set("XObject", Object::Dictionary(page.xobjects));

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page.width_pt),
                    Object::Real(page.height_pt),
                ]),
            );
            page_dict.set("Resources", Object::Dictionary(resources));
            page_dict.set("Contents", Object::Reference(content_id));

            kids.push(Object::Reference(doc.add_object(page_dict)));
        }

        let count = kids.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        let info_id = doc.add_object(Dictionary::from_iter(vec![
            ("Title", Object::string_literal(title.as_str())),
            ("Producer", Object::string_literal("pdf-images")),
        ]));

        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok(writer)
    }
}
