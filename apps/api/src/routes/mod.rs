pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        // No resume-size limit is enforced on uploads
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::LlmClient;

    fn test_state() -> AppState {
        AppState {
            llm: LlmClient::new("test-key".to_string()),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
                upload_dir: std::env::temp_dir(),
                pdfium_library_dir: None,
                ocr_language: "eng".to_string(),
            },
        }
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = build_router(test_state());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_analyze_without_resume_field_is_rejected() {
        let app = build_router(test_state());

        let body = "--BOUNDARY\r\n\
            Content-Disposition: form-data; name=\"job_description\"\r\n\r\n\
            Senior Rust engineer\r\n\
            --BOUNDARY--\r\n";
        let request = Request::post("/api/v1/analyze")
            .header(
                header::CONTENT_TYPE,
                "multipart/form-data; boundary=BOUNDARY",
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_pdf_upload() {
        let app = build_router(test_state());

        let body = "--BOUNDARY\r\n\
            Content-Disposition: form-data; name=\"resume\"; filename=\"resume.docx\"\r\n\
            Content-Type: application/octet-stream\r\n\r\n\
            not a pdf\r\n\
            --BOUNDARY--\r\n";
        let request = Request::post("/api/v1/analyze")
            .header(
                header::CONTENT_TYPE,
                "multipart/form-data; boundary=BOUNDARY",
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("Only PDF files are allowed"));
    }
}
