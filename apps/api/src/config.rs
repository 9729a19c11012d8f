use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Read once at startup; only the Gemini credential is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the single reused upload file. Each new upload
    /// overwrites the previous one (last-write-wins).
    pub upload_dir: PathBuf,
    /// Directory probed for the native pdfium library before the system
    /// loader is tried. Unset means system-library only.
    pub pdfium_library_dir: Option<PathBuf>,
    /// Tesseract language code used by the OCR fallback.
    pub ocr_language: String,
}

/// Name of the reused upload file inside `upload_dir`.
const UPLOAD_FILE_NAME: &str = "resume.pdf";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
            pdfium_library_dir: std::env::var("PDFIUM_LIBRARY_DIR").ok().map(PathBuf::from),
            ocr_language: std::env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string()),
        })
    }

    /// Path the next upload is written to. Stable across requests.
    pub fn upload_path(&self) -> PathBuf {
        self.upload_dir.join(UPLOAD_FILE_NAME)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
