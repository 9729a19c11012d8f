//! OCR fallback: rasterizes each page with pdfium and recognizes the
//! rendered images with tesseract. Only runs when the text-layer pass
//! produced nothing.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use pdfium_render::prelude::*;
use tesseract::Tesseract;
use tracing::warn;

use crate::extraction::{ExtractionConfig, ExtractionStrategy};

/// Render width in pixels for page rasterization. Roughly 200 DPI on a
/// US-letter page, which is enough detail for tesseract.
const RENDER_TARGET_WIDTH: i32 = 1600;

pub struct OcrFallback {
    pdfium_library_dir: Option<PathBuf>,
    language: String,
}

impl OcrFallback {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            pdfium_library_dir: config.pdfium_library_dir.clone(),
            language: config.ocr_language.clone(),
        }
    }

    /// Binds pdfium from the configured directory first, then the system
    /// library paths.
    fn bind_pdfium(&self) -> Result<Pdfium> {
        let bindings = match &self.pdfium_library_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
                    .or_else(|_| Pdfium::bind_to_system_library())
            }
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| anyhow!("failed to load the pdfium library: {e}"))?;

        Ok(Pdfium::new(bindings))
    }

    fn recognize_page(&self, page: &PdfPage, index: usize, scratch: &Path) -> Result<String> {
        let image_path = scratch.join(format!("page-{index}.png"));

        let bitmap = page
            .render_with_config(&PdfRenderConfig::new().set_target_width(RENDER_TARGET_WIDTH))
            .map_err(|e| anyhow!("failed to render page {index}: {e}"))?;
        bitmap
            .as_image()
            .save(&image_path)
            .with_context(|| format!("failed to write page image {}", image_path.display()))?;

        let image_path = image_path
            .to_str()
            .ok_or_else(|| anyhow!("scratch path is not valid UTF-8"))?;

        let text = Tesseract::new(None, Some(&self.language))
            .map_err(|e| anyhow!("tesseract init: {e}"))?
            .set_image(image_path)
            .map_err(|e| anyhow!("tesseract image: {e}"))?
            .recognize()
            .map_err(|e| anyhow!("tesseract recognize: {e}"))?
            .get_text()
            .map_err(|e| anyhow!("tesseract text: {e}"))?;

        Ok(text)
    }
}

impl ExtractionStrategy for OcrFallback {
    fn name(&self) -> &'static str {
        "ocr"
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let pdfium = self.bind_pdfium()?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| anyhow!("failed to open '{}': {e}", path.display()))?;

        let scratch = tempfile::tempdir().context("failed to create OCR scratch directory")?;

        let mut text = String::new();
        for (index, page) in document.pages().iter().enumerate() {
            match self.recognize_page(&page, index, scratch.path()) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    // Keep whatever has been recognized so far; a partial
                    // result still beats nothing.
                    warn!(page = index, "OCR stopped mid-document: {e:#}");
                    break;
                }
            }
        }

        Ok(text)
    }
}
