//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis;
use crate::errors::AppError;
use crate::extraction::{self, ExtractionConfig};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    /// Set when extraction came back empty, so the UI can tell the user
    /// the analysis ran on a blank resume instead of failing silently.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// POST /api/v1/analyze
///
/// Multipart form: a `resume` PDF file field plus an optional
/// `job_description` text field. Persists the upload to the single reused
/// path, extracts its text, and returns the LLM's evaluation.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_bytes = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or("resume.pdf").to_string();
                if !filename.to_ascii_lowercase().ends_with(".pdf") {
                    return Err(AppError::Validation(
                        "Only PDF files are allowed".to_string(),
                    ));
                }
                resume_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read resume upload: {e}"))
                })?);
            }
            Some("job_description") => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("A 'resume' PDF file field is required".to_string()))?;

    // Single reused upload path; each request overwrites the previous file.
    let upload_path = state.config.upload_path();
    tokio::fs::write(&upload_path, &resume_bytes).await.map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "failed to persist upload to '{}': {e}",
            upload_path.display()
        ))
    })?;

    info!(
        bytes = resume_bytes.len(),
        path = %upload_path.display(),
        "resume uploaded"
    );

    // pdfium and tesseract are blocking native code
    let extraction_config = ExtractionConfig::from(&state.config);
    let resume_text =
        tokio::task::spawn_blocking(move || extraction::extract_text(&upload_path, &extraction_config))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?;

    let warning = if resume_text.is_empty() {
        warn!("no text extracted from upload; analysis will run on an empty resume");
        Some(
            "No text could be extracted from the uploaded PDF; the analysis may be unreliable."
                .to_string(),
        )
    } else {
        None
    };

    let analysis = analysis::analyze(&resume_text, job_description.as_deref(), &state.llm)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(AnalyzeResponse { analysis, warning }))
}
