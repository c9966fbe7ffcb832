//! Headless Chromium rasterizer adapter.
//!
//! Loads the review page into a fresh headless browser and takes a
//! full-page JPEG screenshot. The page background is never omitted, so
//! transparent regions come out white.
//!
//! # Architecture
//!
//! This adapter implements the `DocumentRasterizer` port. A browser is
//! launched per capture and closed afterwards; exports are rare and this
//! keeps no long-lived Chromium process around.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use image::{ImageDecoder, ImageReader};
use tracing::{debug, error, warn};

use crate::domain::export::ImageDimensions;
use crate::ports::{CapturedImage, DocumentRasterizer, ExportError};

/// Rasterizer backed by a headless Chromium instance.
///
/// # Example
///
/// ```rust,ignore
/// let rasterizer = ChromiumRasterizer::new()
///     .with_chrome_executable("/usr/bin/chromium")
///     .with_jpeg_quality(95);
///
/// let image = rasterizer.rasterize(&html).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ChromiumRasterizer {
    /// Browser binary. If None, chromiumoxide searches the usual locations.
    chrome_executable: Option<PathBuf>,

    /// JPEG quality, 1..=100.
    jpeg_quality: u8,

    /// Viewport width in CSS pixels; the height follows the content.
    viewport_width: u32,

    /// Upper bound for launch plus capture.
    capture_timeout_secs: u64,
}

impl Default for ChromiumRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromiumRasterizer {
    pub fn new() -> Self {
        Self {
            chrome_executable: None,
            jpeg_quality: 95,
            viewport_width: 1024,
            capture_timeout_secs: 30,
        }
    }

    pub fn with_chrome_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_executable = Some(path.into());
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn with_capture_timeout(mut self, timeout_secs: u64) -> Self {
        self.capture_timeout_secs = timeout_secs;
        self
    }

    fn browser_config(&self) -> Result<BrowserConfig, ExportError> {
        let mut builder = BrowserConfig::builder()
            .new_headless_mode()
            .window_size(self.viewport_width, 800)
            .args(vec![
                "--disable-gpu",
                "--no-sandbox",
                "--disable-dev-shm-usage",
                "--hide-scrollbars",
            ]);
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(ExportError::service_unavailable)
    }

    async fn launch(&self) -> Result<Browser, ExportError> {
        let config = self.browser_config()?;
        let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
            error!(error = %e, "Failed to launch headless browser");
            ExportError::service_unavailable(format!("Failed to launch browser: {}", e))
        })?;

        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(browser)
    }

    async fn screenshot(&self, browser: &Browser, html: &str) -> Result<Vec<u8>, ExportError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ExportError::capture_failed(format!("Failed to open page: {}", e)))?;

        page.set_content(html)
            .await
            .map_err(|e| ExportError::capture_failed(format!("Failed to load document: {}", e)))?;

        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Jpeg)
            .quality(i64::from(self.jpeg_quality))
            .full_page(true)
            .omit_background(false)
            .build();

        page.screenshot(params)
            .await
            .map_err(|e| ExportError::capture_failed(format!("Screenshot failed: {}", e)))
    }

    async fn capture(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let mut browser = self.launch().await?;
        let result = self.screenshot(&browser, html).await;

        if let Err(e) = browser.close().await {
            warn!(error = %e, "Failed to close headless browser");
        }
        if let Err(e) = browser.wait().await {
            debug!(error = %e, "Browser process did not exit cleanly");
        }

        result
    }
}

/// Reads pixel dimensions and colour components from JPEG bytes.
pub fn inspect_jpeg(bytes: &[u8]) -> Result<(ImageDimensions, u8), ExportError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ExportError::invalid_image(e.to_string()))?;
    let decoder = reader
        .into_decoder()
        .map_err(|e| ExportError::invalid_image(e.to_string()))?;

    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::invalid_image("image has zero size"));
    }
    let components = decoder.color_type().channel_count();

    Ok((ImageDimensions { width, height }, components))
}

#[async_trait]
impl DocumentRasterizer for ChromiumRasterizer {
    async fn rasterize(&self, html: &str) -> Result<CapturedImage, ExportError> {
        let jpeg = tokio::time::timeout(
            Duration::from_secs(self.capture_timeout_secs),
            self.capture(html),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.capture_timeout_secs))??;

        let (dimensions, components) = inspect_jpeg(&jpeg)?;
        debug!(
            width = dimensions.width,
            height = dimensions.height,
            bytes = jpeg.len(),
            "Captured document"
        );

        Ok(CapturedImage {
            jpeg,
            dimensions,
            components,
        })
    }

    async fn is_available(&self) -> bool {
        match self.browser_config() {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Headless browser is not available");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};

    fn jpeg(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .unwrap();
        bytes
    }

    #[test]
    fn inspect_reads_dimensions_and_components() {
        let (dims, components) = inspect_jpeg(&jpeg(40, 120)).unwrap();
        assert_eq!(dims, ImageDimensions { width: 40, height: 120 });
        assert_eq!(components, 3);
    }

    #[test]
    fn inspect_rejects_garbage() {
        let err = inspect_jpeg(b"not an image").unwrap_err();
        assert!(matches!(err, ExportError::InvalidImage(_)));
    }

    #[test]
    fn quality_is_clamped() {
        assert_eq!(ChromiumRasterizer::new().with_jpeg_quality(0).jpeg_quality, 1);
        assert_eq!(ChromiumRasterizer::new().with_jpeg_quality(200).jpeg_quality, 100);
    }

    #[test]
    fn defaults_match_export_settings() {
        let r = ChromiumRasterizer::default();
        assert_eq!(r.jpeg_quality, 95);
        assert_eq!(r.viewport_width, 1024);
        assert_eq!(r.capture_timeout_secs, 30);
        assert!(r.chrome_executable.is_none());
    }

    #[tokio::test]
    #[ignore = "requires a local Chromium installation"]
    async fn captures_a_real_page() {
        let rasterizer = ChromiumRasterizer::new();
        let image = rasterizer
            .rasterize("<html><body style=\"height:3000px\">hi</body></html>")
            .await
            .unwrap();
        assert!(image.dimensions.height >= 3000);
    }
}
