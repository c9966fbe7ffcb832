//! Document Export Ports - capture and assembly interfaces.
//!
//! Exporting a design is a two-stage pipeline: a [`DocumentRasterizer`]
//! captures the document's HTML page as one tall JPEG, then a
//! [`PdfAssembler`] lays that image across A4 pages. Adapters (headless
//! Chromium, lopdf) provide the implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::export::{ImageDimensions, PaginationPlan};

/// Port for capturing an HTML page as a single image.
///
/// # Contract
///
/// Implementations must:
/// - Capture the full page height, not just the viewport
/// - Fill transparent regions with white
/// - Return JPEG bytes with their pixel dimensions
#[async_trait]
pub trait DocumentRasterizer: Send + Sync {
    /// Captures `html` as one image.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::RenderCaptureFailed` if the capture fails and
    /// `ExportError::Timeout` if it does not finish in time.
    async fn rasterize(&self, html: &str) -> Result<CapturedImage, ExportError>;

    /// Check if the capture backend can be started.
    async fn is_available(&self) -> bool;
}

/// Port for assembling a paginated PDF from a captured image.
pub trait PdfAssembler: Send + Sync {
    /// Draws `image` once per planned page at the planned offset.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::AssemblyFailed` if the PDF cannot be written.
    fn assemble(&self, image: &CapturedImage, plan: &PaginationPlan)
        -> Result<Vec<u8>, ExportError>;
}

/// A rasterized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// Baseline JPEG bytes.
    pub jpeg: Vec<u8>,
    pub dimensions: ImageDimensions,
    /// Colour components per pixel (1 gray, 3 RGB).
    pub components: u8,
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Paginated A4 PDF.
    Pdf,
    /// The HTML page the PDF is captured from.
    Html,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Pdf
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and download metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    pub fn from_html(html: String, base_filename: &str) -> Self {
        Self::new(html.into_bytes(), ExportFormat::Html, base_filename)
    }

    pub fn from_pdf(pdf_bytes: Vec<u8>, base_filename: &str) -> Self {
        Self::new(pdf_bytes, ExportFormat::Pdf, base_filename)
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The browser could not be launched or reached.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Document capture failed: {0}")]
    RenderCaptureFailed(String),

    /// The captured bytes are not a usable image.
    #[error("Captured image is invalid: {0}")]
    InvalidImage(String),

    #[error("PDF assembly failed: {0}")]
    AssemblyFailed(String),

    #[error("Capture timed out after {0} seconds")]
    Timeout(u64),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn capture_failed(reason: impl Into<String>) -> Self {
        Self::RenderCaptureFailed(reason.into())
    }

    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage(reason.into())
    }

    pub fn assembly_failed(reason: impl Into<String>) -> Self {
        Self::AssemblyFailed(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
