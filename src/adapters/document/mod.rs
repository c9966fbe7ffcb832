//! Document adapters - capture and PDF assembly.
//!
//! - `ChromiumRasterizer` - Captures the review page with headless Chromium
//! - `LopdfAssembler` - Paginates the captured image into an A4 PDF

mod chromium_rasterizer;
mod lopdf_assembler;

pub use chromium_rasterizer::{inspect_jpeg, ChromiumRasterizer};
pub use lopdf_assembler::LopdfAssembler;
