use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

const PDF_MIME: &str = "application/pdf";

#[async_trait]
pub trait SummarizeBackend: Send + Sync {
    /// Sends one upload. `Err` means the call never produced a response;
    /// any HTTP status the backend returns is an `Ok`.
    async fn summarize(&self, upload: Upload) -> Result<BackendResponse>;

    /// Where uploads are sent, for log lines.
    fn target(&self) -> &str;
}

pub struct HttpBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::config(format!("failed to build backend client: {}", e)))?;

        Ok(Self {
            client,
            url: config.summarize_url(),
        })
    }

    fn build_form(upload: Upload) -> Result<Form> {
        let file = Part::bytes(upload.bytes)
            .file_name(upload.filename)
            .mime_str(PDF_MIME)?;

        Ok(Form::new()
            .part("file", file)
            .text("json", control_field()))
    }
}

#[async_trait]
impl SummarizeBackend for HttpBackend {
    async fn summarize(&self, upload: Upload) -> Result<BackendResponse> {
        debug!("Building multipart upload for {}", upload.filename);
        let form = Self::build_form(upload)?;

        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(BackendResponse { status, body })
    }

    fn target(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(base_url: &str) -> HttpBackend {
        HttpBackend::new(&BackendConfig {
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_target_url() {
        let backend = backend_for("http://127.0.0.1:8811/");
        assert_eq!(backend.target(), "http://127.0.0.1:8811/summarize_rfp");
    }

    #[tokio::test]
    async fn test_sends_multipart_upload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize_rfp"))
            .and(header_regex("content-type", "^multipart/form-data; boundary="))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"summary":"ok"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let backend = backend_for(&mock_server.uri());
        let response = backend
            .summarize(Upload::new("a.pdf", b"%PDF-1.4\n".to_vec()))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, r#"{"summary":"ok"}"#);

        let requests = mock_server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body).to_string();
        assert!(body.contains(r#"name="file"; filename="a.pdf""#));
        assert!(body.to_lowercase().contains("content-type: application/pdf"));
        assert!(body.contains("%PDF-1.4"));
        assert!(body.contains(r#"name="json""#));
        assert!(body.contains(r#"{"max_pages":12}"#));
    }

    #[tokio::test]
    async fn test_backend_error_status_is_not_a_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize_rfp"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&mock_server)
            .await;

        let backend = backend_for(&mock_server.uri());
        let response = backend
            .summarize(Upload::new("upload.pdf", vec![1, 2, 3]))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.body, "overloaded");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = backend_for(&format!("http://{}", addr));
        let err = backend
            .summarize(Upload::new("upload.pdf", vec![0]))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }
}
