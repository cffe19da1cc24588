use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use inquest_core::PdfBackend;
use inquest_pdf::MockBackend;
use inquest_web::{AppState, router};

const BOUNDARY: &str = "inquest-test-boundary";

const SAMPLE_TEXT: &str = "Forensic Examination Report, Case No. 2023-04-117. \
    Dr. Maria Reyes of the State Crime Laboratory examined the evidence on March 14, 2023. \
    The swab tested positive for human blood. \
    DNA analysis shows a single-source male profile. \
    The profile is consistent with the reference sample. \
    Comparison against the database identified one candidate. \
    We therefore conclude the samples share a common source.";

struct TestApp {
    router: Router,
    upload_dir: tempfile::TempDir,
}

fn app_with_backend(backend: Arc<dyn PdfBackend>) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("create temp upload dir");
    let state = Arc::new(AppState::new(backend, upload_dir.path().to_path_buf()));
    TestApp {
        router: router(state, 16 * 1024 * 1024),
        upload_dir,
    }
}

fn text_part(name: &str, value: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
    )
}

fn file_part(filename: &str, data: &[u8]) -> Vec<u8> {
    let mut part = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/pdf\r\n\r\n"
    )
    .into_bytes();
    part.extend_from_slice(data);
    part.extend_from_slice(b"\r\n");
    part
}

fn multipart_request(parts: Vec<Vec<u8>>) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for part in parts {
        body.extend_from_slice(&part);
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn dir_is_empty(path: &Path) -> bool {
    std::fs::read_dir(path).unwrap().next().is_none()
}

#[tokio::test]
async fn health_check_works() {
    let app = app_with_backend(Arc::new(MockBackend::with_text(SAMPLE_TEXT)));
    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/api/test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "API is working");
}

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let app = app_with_backend(Arc::new(MockBackend::with_text(SAMPLE_TEXT)));
    let request = multipart_request(vec![text_part("summary_detail", "brief").into_bytes()]);
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "No file part");
}

#[tokio::test]
async fn empty_filename_is_rejected() {
    let app = app_with_backend(Arc::new(MockBackend::with_text(SAMPLE_TEXT)));
    let request = multipart_request(vec![file_part("", b"%PDF-1.4")]);
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "No selected file");
}

#[tokio::test]
async fn non_pdf_upload_is_rejected() {
    let app = app_with_backend(Arc::new(MockBackend::with_text(SAMPLE_TEXT)));
    let request = multipart_request(vec![file_part("notes.txt", b"hello")]);
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "File must be a PDF");
}

#[tokio::test]
async fn successful_analysis_returns_full_report() {
    let app = app_with_backend(Arc::new(MockBackend::with_text(SAMPLE_TEXT)));
    let request = multipart_request(vec![
        file_part("report.pdf", b"%PDF-1.4 fake"),
        text_part("summary_detail", "brief").into_bytes(),
    ]);
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;

    assert!(json["metadata"]["dates"].as_array().unwrap().len() <= 3);
    assert!(json["metadata"]["people"].as_array().unwrap().len() <= 5);
    assert!(json["metadata"]["organizations"].as_array().unwrap().len() <= 3);
    assert!(json["metadata"]["locations"].as_array().unwrap().len() <= 3);
    assert_eq!(json["metadata"]["case_number"], "2023-04-117");
    assert!(json["summary"].as_str().unwrap().len() > 0);
    assert!(json["key_findings"].as_array().unwrap().len() <= 5);
    assert!(json["statistics"]["word_count"].as_u64().unwrap() > 0);
    assert!(json["statistics"]["sentence_count"].as_u64().unwrap() > 0);

    assert_eq!(json["document"]["filename"], "report.pdf");
    let id = json["document"]["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert!(json["document"]["analyzed_at"].as_str().unwrap().contains('T'));

    // Temporary upload removed on success.
    assert!(dir_is_empty(app.upload_dir.path()));
}

#[tokio::test]
async fn extraction_failure_returns_500_and_cleans_up() {
    let app = app_with_backend(Arc::new(MockBackend::failing("corrupt xref table")));
    let request = multipart_request(vec![file_part("broken.pdf", b"%PDF-1.4 junk")]);
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Could not extract text from PDF");

    // Temporary upload removed on failure too.
    assert!(dir_is_empty(app.upload_dir.path()));
}

#[tokio::test]
async fn save_failure_returns_500_and_leaves_no_file() {
    // An upload directory that does not exist makes the save step fail
    // before analysis runs.
    let parent = tempfile::tempdir().expect("create temp dir");
    let missing = parent.path().join("missing");
    let state = Arc::new(AppState::new(
        Arc::new(MockBackend::with_text(SAMPLE_TEXT)),
        missing.clone(),
    ));
    let router = router(state, 16 * 1024 * 1024);

    let request = multipart_request(vec![file_part("report.pdf", b"%PDF-1.4")]);
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to save upload")
    );
    // No temporary file survives a failed save.
    assert!(!missing.exists());
}

#[tokio::test]
async fn detail_levels_change_summary_size() {
    let backend = Arc::new(MockBackend::with_text(SAMPLE_TEXT));

    let mut lengths = Vec::new();
    for detail in ["brief", "comprehensive"] {
        let app = app_with_backend(backend.clone());
        let request = multipart_request(vec![
            file_part("report.pdf", b"%PDF-1.4"),
            text_part("summary_detail", detail).into_bytes(),
        ]);
        let response = app.router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        lengths.push(json["statistics"]["summary_length"].as_u64().unwrap());
    }

    // brief targets 3 sentences, comprehensive 12; with 7 input sentences
    // the comprehensive summary returns the whole document.
    assert!(lengths[0] < lengths[1]);
}

#[tokio::test]
async fn target_language_field_is_accepted_and_inert() {
    let app = app_with_backend(Arc::new(MockBackend::with_text(SAMPLE_TEXT)));
    let request = multipart_request(vec![
        file_part("report.pdf", b"%PDF-1.4"),
        text_part("target_language", "fr").into_bytes(),
    ]);
    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert!(json.get("translation").is_none());
    assert!(json["summary"].as_str().unwrap().len() > 0);
}
