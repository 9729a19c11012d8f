//! Structural extraction: reads the PDF's embedded text layer.

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::extraction::ExtractionStrategy;

/// Reads the embedded text layer of every page, in page order. This is
/// the success path for digitally produced PDFs; scanned documents come
/// back empty and fall through to OCR.
pub struct TextLayer;

impl ExtractionStrategy for TextLayer {
    fn name(&self) -> &'static str {
        "text-layer"
    }

    fn extract(&self, path: &Path) -> Result<String> {
        // A corrupt or password-protected file errors here, which the
        // caller treats as "fall through to OCR".
        pdf_extract::extract_text(path).map_err(|e| {
            anyhow!(
                "text-layer extraction failed for '{}': {e}",
                path.display()
            )
        })
    }
}
