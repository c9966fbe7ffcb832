//! ExportPipeline - rendered document to PDF bytes.
//!
//! Two sequential stages: capture the HTML page as one image, then lay the
//! image across A4 pages. A capture failure stops the pipeline before any
//! page is assembled.

use std::sync::Arc;

use crate::domain::document::{to_html, RenderedDocument};
use crate::domain::export::{PageSize, PaginationPlan};
use crate::ports::{DocumentRasterizer, ExportError, PdfAssembler};

pub struct ExportPipeline {
    rasterizer: Arc<dyn DocumentRasterizer>,
    assembler: Arc<dyn PdfAssembler>,
    page: PageSize,
}

impl ExportPipeline {
    pub fn new(rasterizer: Arc<dyn DocumentRasterizer>, assembler: Arc<dyn PdfAssembler>) -> Self {
        Self {
            rasterizer,
            assembler,
            page: PageSize::A4,
        }
    }

    /// Rasterizes, paginates and assembles `document`.
    ///
    /// # Errors
    ///
    /// Returns the rasterizer's error unchanged, `ExportError::InvalidImage`
    /// for a zero-sized capture, or the assembler's error.
    pub async fn export_pdf(&self, document: &RenderedDocument) -> Result<Vec<u8>, ExportError> {
        let html = to_html(document);
        tracing::info!(html_bytes = html.len(), "PDF export started");

        let image = self.rasterizer.rasterize(&html).await.map_err(|e| {
            tracing::error!(error = %e, "Document capture failed");
            e
        })?;

        let plan = PaginationPlan::for_image(image.dimensions, self.page).ok_or_else(|| {
            ExportError::invalid_image(format!(
                "{}x{} image cannot be paginated",
                image.dimensions.width, image.dimensions.height
            ))
        })?;

        let pdf = self.assembler.assemble(&image, &plan).map_err(|e| {
            tracing::error!(error = %e, "PDF assembly failed");
            e
        })?;

        tracing::info!(pages = plan.page_count(), bytes = pdf.len(), "PDF export finished");
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::design::DesignState;
    use crate::domain::document::render;
    use crate::domain::export::ImageDimensions;
    use crate::ports::CapturedImage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedRasterizer {
        result: Result<CapturedImage, ExportError>,
        captured_html: Mutex<Vec<String>>,
    }

    impl FixedRasterizer {
        fn image(width: u32, height: u32) -> Self {
            Self {
                result: Ok(CapturedImage {
                    jpeg: vec![0xFF, 0xD8, 0xFF, 0xD9],
                    dimensions: ImageDimensions { width, height },
                    components: 3,
                }),
                captured_html: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(ExportError::capture_failed("browser crashed")),
                captured_html: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DocumentRasterizer for FixedRasterizer {
        async fn rasterize(&self, html: &str) -> Result<CapturedImage, ExportError> {
            self.captured_html.lock().unwrap().push(html.to_string());
            self.result.clone()
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    /// Records the plans it was asked to assemble.
    struct RecordingAssembler {
        plans: Mutex<Vec<PaginationPlan>>,
    }

    impl RecordingAssembler {
        fn new() -> Self {
            Self {
                plans: Mutex::new(Vec::new()),
            }
        }
    }

    impl PdfAssembler for RecordingAssembler {
        fn assemble(
            &self,
            _image: &CapturedImage,
            plan: &PaginationPlan,
        ) -> Result<Vec<u8>, ExportError> {
            self.plans.lock().unwrap().push(plan.clone());
            Ok(format!("%PDF pages={}", plan.page_count()).into_bytes())
        }
    }

    fn document() -> RenderedDocument {
        render(&DesignState::new())
    }

    #[tokio::test]
    async fn tall_capture_spans_three_pages() {
        let rasterizer = Arc::new(FixedRasterizer::image(2100, 6831));
        let assembler = Arc::new(RecordingAssembler::new());
        let pipeline = ExportPipeline::new(rasterizer.clone(), assembler.clone());

        let pdf = pipeline.export_pdf(&document()).await.unwrap();

        assert_eq!(pdf, b"%PDF pages=3".to_vec());
        assert_eq!(assembler.plans.lock().unwrap()[0].page_count(), 3);
        let html = &rasterizer.captured_html.lock().unwrap()[0];
        assert!(html.contains("Concept-Based Inquiry Design"));
    }

    #[tokio::test]
    async fn capture_failure_skips_assembly() {
        let assembler = Arc::new(RecordingAssembler::new());
        let pipeline = ExportPipeline::new(Arc::new(FixedRasterizer::failing()), assembler.clone());

        let err = pipeline.export_pdf(&document()).await.unwrap_err();

        assert_eq!(err, ExportError::capture_failed("browser crashed"));
        assert!(assembler.plans.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_sized_capture_is_invalid() {
        let assembler = Arc::new(RecordingAssembler::new());
        let pipeline = ExportPipeline::new(Arc::new(FixedRasterizer::image(0, 100)), assembler.clone());

        let err = pipeline.export_pdf(&document()).await.unwrap_err();

        assert!(matches!(err, ExportError::InvalidImage(_)));
        assert!(assembler.plans.lock().unwrap().is_empty());
    }
}
