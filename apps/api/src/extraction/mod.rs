//! Best-effort plain-text extraction from an uploaded PDF.
//!
//! Strategies are tried in order until one yields non-empty output:
//! the embedded text layer first, then OCR over rendered page images.
//! Strategy failures are logged and swallowed; the worst case is an
//! empty string, which callers treat as "no text available" rather
//! than an error.

pub mod ocr;
pub mod text_layer;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::Config;
use crate::extraction::ocr::OcrFallback;
use crate::extraction::text_layer::TextLayer;

/// The subset of `Config` the extraction pipeline needs. Cloned into
/// `spawn_blocking` closures, so it is detached from `AppState`.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub pdfium_library_dir: Option<PathBuf>,
    pub ocr_language: String,
}

impl From<&Config> for ExtractionConfig {
    fn from(config: &Config) -> Self {
        Self {
            pdfium_library_dir: config.pdfium_library_dir.clone(),
            ocr_language: config.ocr_language.clone(),
        }
    }
}

/// One attempt in the extraction fallback chain.
pub trait ExtractionStrategy {
    fn name(&self) -> &'static str;

    /// Returns the document's text. An `Err` or an all-whitespace `Ok`
    /// both mean "try the next strategy".
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extracts the text content of the PDF at `path`. Never fails outward:
/// every internal error degrades to trying the next strategy, and an
/// exhausted chain returns the empty string.
pub fn extract_text(path: &Path, config: &ExtractionConfig) -> String {
    let strategies: Vec<Box<dyn ExtractionStrategy>> = vec![
        Box::new(TextLayer),
        Box::new(OcrFallback::new(config)),
    ];
    run_strategies(path, &strategies)
}

fn run_strategies(path: &Path, strategies: &[Box<dyn ExtractionStrategy>]) -> String {
    for strategy in strategies {
        match strategy.extract(path) {
            Ok(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    debug!(
                        strategy = strategy.name(),
                        chars = trimmed.len(),
                        "extraction succeeded"
                    );
                    return trimmed.to_string();
                }
                debug!(strategy = strategy.name(), "extraction produced no text");
            }
            Err(e) => {
                warn!(strategy = strategy.name(), "extraction failed: {e:#}");
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Fixed(&'static str);

    impl ExtractionStrategy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn extract(&self, _path: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl ExtractionStrategy for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn extract(&self, _path: &Path) -> Result<String> {
            Err(anyhow!("boom"))
        }
    }

    fn run(strategies: Vec<Box<dyn ExtractionStrategy>>) -> String {
        run_strategies(Path::new("unused.pdf"), &strategies)
    }

    #[test]
    fn test_first_non_empty_strategy_wins() {
        let result = run(vec![
            Box::new(Fixed("embedded text layer")),
            Box::new(Failing),
        ]);
        assert_eq!(result, "embedded text layer");
    }

    #[test]
    fn test_error_falls_through_to_next_strategy() {
        let result = run(vec![Box::new(Failing), Box::new(Fixed("ocr output"))]);
        assert_eq!(result, "ocr output");
    }

    #[test]
    fn test_whitespace_only_output_falls_through() {
        let result = run(vec![Box::new(Fixed("  \n\t ")), Box::new(Fixed("recovered"))]);
        assert_eq!(result, "recovered");
    }

    #[test]
    fn test_exhausted_chain_returns_empty_string() {
        let result = run(vec![Box::new(Failing), Box::new(Fixed(""))]);
        assert_eq!(result, "");
    }

    #[test]
    fn test_winning_output_is_trimmed() {
        let result = run(vec![Box::new(Fixed("  page one\npage two\n\n"))]);
        assert_eq!(result, "page one\npage two");
    }
}
