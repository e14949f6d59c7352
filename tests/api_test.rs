mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use resume_review::application::ports::LlmClient;
use resume_review::application::services::{AnalysisService, DocumentExtractor};
use resume_review::domain::{DOCX_MIME, PDF_MIME};
use resume_review::infrastructure::llm::MockLlmClient;
use resume_review::infrastructure::text_processing::CompositeFileLoader;
use resume_review::presentation::{AppState, Environment, Settings, create_router};

const BOUNDARY: &str = "resume-review-test-boundary";

fn test_settings() -> Settings {
    Settings::from_files(Environment::Test).unwrap()
}

fn app_with(llm_client: Option<Arc<dyn LlmClient>>, settings: Settings) -> Router {
    let state = AppState {
        document_extractor: Arc::new(DocumentExtractor::new(Arc::new(
            CompositeFileLoader::with_document_adapters(),
        ))),
        analysis_service: Arc::new(AnalysisService::new(llm_client, Duration::from_secs(5))),
        settings,
    };
    create_router(state)
}

fn demo_app() -> Router {
    app_with(None, test_settings())
}

fn multipart_request(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn analyze_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_app_when_checking_health_then_returns_ok() {
    let response = demo_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = json_body(response).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Resume review API is running");
}

#[tokio::test]
async fn given_docx_upload_when_posting_then_returns_extracted_text_and_preview() {
    let data = helpers::docx_with_paragraphs(&["Jane Doe", "Platform Engineer"]);

    let response = demo_app()
        .oneshot(multipart_request("resume", "jane.docx", DOCX_MIME, &data))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["fileName"], "jane.docx");
    assert_eq!(body["text"], "Jane Doe\n\nPlatform Engineer");
    assert_eq!(body["textPreview"], "Jane Doe\n\nPlatform Engineer...");
    assert_eq!(body["message"], "Resume parsed successfully");
}

#[tokio::test]
async fn given_corrupt_pdf_upload_when_posting_then_returns_sample_resume() {
    let response = demo_app()
        .oneshot(multipart_request("resume", "broken.pdf", PDF_MIME, b"%PDF-1.4 broken"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let expected = DocumentExtractor::fallback_for("broken.pdf").into_inner();
    assert_eq!(body["text"], expected.as_str());
    let preview = body["textPreview"].as_str().unwrap();
    assert_eq!(preview.chars().count(), 203);
    assert!(preview.ends_with("..."));
}

#[tokio::test]
async fn given_text_file_upload_when_posting_then_returns_unsupported_media_type() {
    let response = demo_app()
        .oneshot(multipart_request("resume", "notes.txt", "text/plain", b"hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Only PDF, DOCX, and DOC files are allowed");
}

#[tokio::test]
async fn given_upload_without_resume_field_when_posting_then_returns_bad_request() {
    let response = demo_app()
        .oneshot(multipart_request("attachment", "cv.pdf", PDF_MIME, b"%PDF"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn given_oversized_upload_when_posting_then_returns_payload_too_large() {
    let mut settings = test_settings();
    settings.server.max_upload_bytes = 1024;
    let app = app_with(None, settings);

    let response = app
        .oneshot(multipart_request("resume", "big.pdf", PDF_MIME, &vec![b'a'; 8 * 1024]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn given_missing_job_role_when_analyzing_then_returns_bad_request_with_received_flags() {
    let response = demo_app()
        .oneshot(analyze_request(json!({ "resumeText": "Jane Doe" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Resume text and job role are required");
    assert_eq!(body["received"]["hasResumeText"], true);
    assert_eq!(body["received"]["hasJobRole"], false);
}

#[tokio::test]
async fn given_no_llm_client_when_analyzing_then_returns_demo_feedback() {
    let response = demo_app()
        .oneshot(analyze_request(json!({
            "resumeText": "Jane Doe\n\nData work",
            "jobRole": "Data Scientist",
            "experienceLevel": "Senior"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "Demo Analysis");
    assert!(body["note"].as_str().unwrap().starts_with("Using demo data"));

    let feedback = &body["feedback"];
    let score = feedback["score"].as_u64().unwrap();
    assert!((65..=95).contains(&score));
    assert_eq!(feedback["strengths"].as_array().unwrap().len(), 4);
    assert_eq!(feedback["atsOptimization"].as_array().unwrap().len(), 2);
    assert_eq!(
        feedback["missingSkills"][0],
        "Big data technologies (Spark/Hadoop)"
    );
}

#[tokio::test]
async fn given_unknown_level_when_analyzing_then_defaults_to_mid() {
    let response = demo_app()
        .oneshot(analyze_request(json!({
            "resumeText": "Jane Doe",
            "jobRole": "Product Manager",
            "experienceLevel": "Principal"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let summary = body["feedback"]["summary"].as_str().unwrap();
    assert!(summary.contains("mid level experience"));
}

#[tokio::test]
async fn given_llm_reply_when_analyzing_then_returns_ai_feedback_without_note() {
    let reply = r#"{"summary":"Excellent match.","score":91,"recommendations":["Ship more"]}"#;
    let client: Arc<dyn LlmClient> = Arc::new(MockLlmClient::new(reply));
    let app = app_with(Some(client), test_settings());

    let response = app
        .oneshot(analyze_request(json!({
            "resumeText": "Jane Doe",
            "jobRole": "Backend Developer",
            "experienceLevel": "Mid"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["source"], "AI Analysis");
    assert!(body.get("note").is_none());
    assert_eq!(body["feedback"]["summary"], "Excellent match.");
    assert_eq!(body["feedback"]["score"], 91);
    assert_eq!(body["feedback"]["recommendations"], json!(["Ship more"]));
    assert_eq!(
        body["feedback"]["grammarImprovements"].as_array().unwrap().len(),
        2
    );
}
