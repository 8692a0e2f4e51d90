//! HttpGenerator against a one-shot local HTTP server.

use client::{FALLBACK_ERROR_MESSAGE, Generator, HttpGenerator, NETWORK_ERROR_MESSAGE, RemoteCatalog, SubmitError};
use dazzlo_core::{Form, SubmissionPayload, TemplateRegistry};
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug)]
struct RecordedRequest {
  head: String,
  body: Vec<u8>,
}

impl RecordedRequest {
  fn request_line(&self) -> &str {
    self.head.lines().next().unwrap_or_default()
  }

  fn header(&self, name: &str) -> Option<String> {
    self.head.lines().skip(1).find_map(|line| {
      let (key, value) = line.split_once(':')?;
      key.trim().eq_ignore_ascii_case(name).then(|| value.trim().to_string())
    })
  }
}

/// Serve exactly one request with the given status line and body
async fn serve_once(status: &'static str, content_type: &'static str, body: Vec<u8>) -> (String, JoinHandle<RecordedRequest>) {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let url = format!("http://{}", listener.local_addr().unwrap());

  let handle = tokio::spawn(async move {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
      let n = socket.read(&mut chunk).await.unwrap();
      assert!(n > 0, "connection closed before headers");
      buf.extend_from_slice(&chunk[..n]);
      if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
        break pos + 4;
      }
    };
    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut request = RecordedRequest {
      head,
      body: buf[head_end..].to_vec(),
    };
    let length: usize = request.header("content-length").and_then(|v| v.parse().ok()).unwrap_or(0);
    while request.body.len() < length {
      let n = socket.read(&mut chunk).await.unwrap();
      if n == 0 {
        break;
      }
      request.body.extend_from_slice(&chunk[..n]);
    }

    let response_head = format!(
      "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
      status,
      content_type,
      body.len()
    );
    socket.write_all(response_head.as_bytes()).await.unwrap();
    socket.write_all(&body).await.unwrap();
    socket.shutdown().await.unwrap();
    request
  });

  (url, handle)
}

fn sample_payload() -> SubmissionPayload {
  let mut form = Form::new(TemplateRegistry::builtin());
  form.render("lab_report");
  form.user.student_name = "Asha".to_string();
  form.user.subject = "Physics".to_string();
  form.set_content("objective", "Measure g").unwrap();
  let chart = form.add_chart("results").unwrap();
  form.resize_chart(chart, 2).unwrap();
  SubmissionPayload::from_form(&form)
}

#[tokio::test]
async fn test_generate_posts_json_and_names_document() {
  let (url, server) = serve_once("200 OK", "application/pdf", b"%PDF-1.4 fake".to_vec()).await;
  let generator = HttpGenerator::new().with_url(url);

  let payload = sample_payload();
  let document = generator.generate(&payload).await.unwrap();
  assert_eq!(document.filename, "DazzloDocs_Asha_Physics.pdf");
  assert_eq!(document.bytes, b"%PDF-1.4 fake");

  let request = server.await.unwrap();
  assert_eq!(request.request_line(), "POST /api/generate HTTP/1.1");
  assert_eq!(request.header("content-type").as_deref(), Some("application/json"));

  let sent: SubmissionPayload = serde_json::from_slice(&request.body).unwrap();
  assert_eq!(sent, payload);
  let value: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
  assert_eq!(value["charts"]["results"][0]["labels"], "Point 1,Point 2");
  assert_eq!(value["content"]["objective"], "Measure g");
}

#[tokio::test]
async fn test_server_error_message_is_surfaced() {
  let (url, server) = serve_once(
    "400 Bad Request",
    "application/json",
    br#"{"error":"bad template"}"#.to_vec(),
  )
  .await;
  let generator = HttpGenerator::new().with_url(url);

  let err = generator.generate(&sample_payload()).await.unwrap_err();
  assert!(matches!(&err, SubmitError::Server { status: 400, message } if message == "bad template"));
  assert_eq!(err.user_message(), "bad template");
  server.await.unwrap();
}

#[tokio::test]
async fn test_unreadable_error_body_uses_fallback() {
  let (url, server) = serve_once(
    "500 Internal Server Error",
    "text/html",
    b"<h1>Internal Server Error</h1>".to_vec(),
  )
  .await;
  let generator = HttpGenerator::new().with_url(url);

  let err = generator.generate(&sample_payload()).await.unwrap_err();
  assert!(matches!(&err, SubmitError::Server { status: 500, .. }));
  assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
  server.await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let generator = HttpGenerator::new().with_url(format!("http://{}", addr));
  let err = generator.generate(&sample_payload()).await.unwrap_err();
  assert!(matches!(err, SubmitError::Network(_)));
  assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_catalog_templates() {
  let body = br#"{"lab_report": {"name": "Lab Report", "sections": ["objective", "results"]}}"#.to_vec();
  let (url, server) = serve_once("200 OK", "application/json", body).await;

  let registry = RemoteCatalog::new(url).registry().await.unwrap();
  assert_eq!(registry.len(), 1);
  assert_eq!(registry.sections_for("lab_report"), ["objective", "results"]);

  let request = server.await.unwrap();
  assert_eq!(request.request_line(), "GET /api/templates HTTP/1.1");
}

#[tokio::test]
async fn test_catalog_status_error() {
  let (url, server) = serve_once("404 Not Found", "text/plain", b"nope".to_vec()).await;
  let err = RemoteCatalog::new(url).chart_types().await.unwrap_err();
  assert!(matches!(err, client::CatalogError::Status { status: 404, .. }));
  server.await.unwrap();
}
