//! lopdf-based PDF assembler adapter.
//!
//! The captured JPEG is embedded once as a DCT-encoded image XObject and
//! every page draws it at full page width, shifted by that page's offset.
//! Whatever falls outside the MediaBox is clipped by the viewer.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::domain::export::{PaginationPlan, POINTS_PER_MM};
use crate::ports::{CapturedImage, ExportError, PdfAssembler};

const IMAGE_NAME: &[u8] = b"Im0";

/// Assembles PDFs in memory with lopdf.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfAssembler;

impl LopdfAssembler {
    pub fn new() -> Self {
        Self
    }
}

fn color_space(components: u8) -> &'static str {
    match components {
        1 => "DeviceGray",
        4 => "DeviceCMYK",
        _ => "DeviceRGB",
    }
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// Content stream drawing the image with its top `offset_mm` below the page top.
fn page_content(
    page_height_pt: f64,
    image_width_pt: f64,
    image_height_pt: f64,
    offset_mm: f64,
) -> Content {
    let y = page_height_pt - (offset_mm * POINTS_PER_MM) - image_height_pt;
    Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    real(image_width_pt),
                    Object::Integer(0),
                    Object::Integer(0),
                    real(image_height_pt),
                    Object::Integer(0),
                    real(y),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.to_vec())]),
            Operation::new("Q", vec![]),
        ],
    }
}

impl PdfAssembler for LopdfAssembler {
    fn assemble(
        &self,
        image: &CapturedImage,
        plan: &PaginationPlan,
    ) -> Result<Vec<u8>, ExportError> {
        if plan.offsets_mm.is_empty() {
            return Err(ExportError::assembly_failed("pagination plan has no pages"));
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let image_stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(image.dimensions.width),
                "Height" => i64::from(image.dimensions.height),
                "ColorSpace" => color_space(image.components),
                "BitsPerComponent" => 8_i64,
                "Filter" => "DCTDecode",
            },
            image.jpeg.clone(),
        )
        .with_compression(false);
        let image_id = doc.add_object(image_stream);

        let resources_id = doc.add_object(dictionary! {
            "XObject" => dictionary! {
                "Im0" => image_id,
            },
        });

        let page_width_pt = plan.page.width_pt();
        let page_height_pt = plan.page.height_pt();
        let image_height_pt = plan.scaled_height_mm * POINTS_PER_MM;

        let mut kids: Vec<Object> = Vec::with_capacity(plan.offsets_mm.len());
        for offset_mm in &plan.offsets_mm {
            let content = page_content(page_height_pt, page_width_pt, image_height_pt, *offset_mm);
            let encoded = content
                .encode()
                .map_err(|e| ExportError::assembly_failed(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    real(page_width_pt),
                    real(page_height_pt),
                ],
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExportError::assembly_failed(e.to_string()))?;
        Ok(bytes)
    }
}
