//! End-to-end tests for the background API service
//!
//! Requests go in through the channel returned by `spawn_api_service`,
//! hit a wiremock server, and come back as `ApiResponse`s carrying the
//! identifiers the model needs to match them up.

use std::time::Duration;

use lopdf::{dictionary, Document, Object};
use tokio::sync::mpsc;
use tokio::time::timeout;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use resadmin::api::{ResourceClient, ResourceScope};
use resadmin::services::{spawn_api_service, ApiRequest, ApiResponse};

const WAIT: Duration = Duration::from_secs(5);

fn scope() -> ResourceScope {
    ResourceScope::new("cs", "6", "notes", "da")
}

fn client(server: &MockServer) -> ResourceClient {
    ResourceClient::new(format!("{}/api", server.uri()), None).expect("client")
}

/// A small valid document with `pages` blank pages
fn pdf_bytes(pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            doc.add_object(dictionary! { "Type" => "Page", "Parent" => pages_id })
                .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

async fn next_response(rx: &mut mpsc::UnboundedReceiver<ApiResponse>) -> ApiResponse {
    timeout(WAIT, rx.recv())
        .await
        .expect("timed out waiting for response")
        .expect("service stopped")
}

#[tokio::test]
async fn test_list_echoes_request_id_and_scope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/resources/pdfs"))
        .and(query_param("subject", "da"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pdfs": [{ "name": "DA Unit 1.pdf", "url": "/files/DA Unit 1.pdf" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (tx, mut rx) = spawn_api_service(client(&server));
    tx.send(ApiRequest::ListPdfs {
        request_id: 42,
        scope: scope(),
    })
    .unwrap();

    match next_response(&mut rx).await {
        ApiResponse::ListResult {
            request_id,
            scope: s,
            pdfs,
        } => {
            assert_eq!(request_id, 42);
            assert_eq!(s, scope());
            let pdfs = pdfs.unwrap();
            assert_eq!(pdfs.len(), 1);
            assert_eq!(pdfs[0].name, "DA Unit 1.pdf");
        }
        other => panic!("expected ListResult, got {:?}", other),
    }
}

#[tokio::test]
async fn test_preview_inspects_and_saves_document() {
    let server = MockServer::start().await;
    let body = pdf_bytes(3);
    Mock::given(method("GET"))
        .and(path("/api/resources/files/service-test.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.resolve_url("/files/service-test.pdf");
    let (tx, mut rx) = spawn_api_service(client);
    tx.send(ApiRequest::FetchPreview {
        request_id: 7,
        name: "service-test.pdf".to_string(),
        url: url.clone(),
    })
    .unwrap();

    match next_response(&mut rx).await {
        ApiResponse::PreviewResult {
            request_id,
            url: echoed,
            document,
        } => {
            assert_eq!(request_id, 7);
            assert_eq!(echoed, url);
            let document = document.unwrap();
            assert_eq!(document.summary.version, "1.5");
            assert_eq!(document.summary.page_count, 3);
            assert_eq!(document.summary.size_bytes, body.len() as u64);
            assert_eq!(std::fs::read(&document.local_path).unwrap(), body);
        }
        other => panic!("expected PreviewResult, got {:?}", other),
    }
}

#[tokio::test]
async fn test_preview_of_non_pdf_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/resources/files/page.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.resolve_url("/files/page.html");
    let (tx, mut rx) = spawn_api_service(client);
    tx.send(ApiRequest::FetchPreview {
        request_id: 1,
        name: "page.html".to_string(),
        url,
    })
    .unwrap();

    match next_response(&mut rx).await {
        ApiResponse::PreviewResult { document, .. } => {
            let err = document.unwrap_err();
            assert!(err.to_string().contains("not a PDF"), "got {}", err);
        }
        other => panic!("expected PreviewResult, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_of_missing_file_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (tx, mut rx) = spawn_api_service(client(&server));
    tx.send(ApiRequest::UploadPdf {
        scope: scope(),
        pdf_name: "DA Unit 9.pdf".to_string(),
        file_path: "/definitely/not/here.pdf".into(),
    })
    .unwrap();

    match next_response(&mut rx).await {
        ApiResponse::UploadResult {
            pdf_name, result, ..
        } => {
            assert_eq!(pdf_name, "DA Unit 9.pdf");
            assert!(result.is_err());
        }
        other => panic!("expected UploadResult, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/resources/delete"))
        .respond_with(ResponseTemplate::new(500).set_body_string("disk full"))
        .mount(&server)
        .await;

    let (tx, mut rx) = spawn_api_service(client(&server));
    tx.send(ApiRequest::DeletePdf {
        scope: scope(),
        pdf_name: "a.pdf".to_string(),
    })
    .unwrap();

    match next_response(&mut rx).await {
        ApiResponse::DeleteResult { result, .. } => {
            assert!(result.unwrap_err().to_string().contains("500"));
        }
        other => panic!("expected DeleteResult, got {:?}", other),
    }
}
