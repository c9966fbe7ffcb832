//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentRasterizer` - captures the review page as one image
//! - `PdfAssembler` - paginates the captured image into an A4 PDF
//! - `MailRelay` - delivers the PDF to a recipient
//! - `DesignStore` - keeps in-memory editing sessions

mod design_store;
mod document_export;
mod mail_relay;

pub use design_store::{DesignHandle, DesignStore, StoreError};
pub use document_export::{
    CapturedImage, DocumentRasterizer, ExportError, ExportFormat, ExportedDocument, PdfAssembler,
};
pub use mail_relay::{check_submission, MailError, MailRelay};
