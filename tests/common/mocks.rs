use async_trait::async_trait;
use axum::http::StatusCode;
use summarize_proxy::{
    Error, Result,
    backend::{BackendResponse, SummarizeBackend, Upload},
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Reply {
    Respond(BackendResponse),
    Fail(String),
}

/// Mock backend that records uploads and answers with a fixed reply
#[derive(Debug, Clone)]
pub struct MockBackend {
    reply: Reply,
    pub uploads: Arc<Mutex<Vec<Upload>>>,
}

impl MockBackend {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            reply: Reply::Respond(BackendResponse {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.to_string(),
            }),
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::Fail(message.to_string()),
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizeBackend for MockBackend {
    async fn summarize(&self, upload: Upload) -> Result<BackendResponse> {
        self.uploads.lock().unwrap().push(upload);
        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(message) => Err(Error::internal(message.clone())),
        }
    }

    fn target(&self) -> &str {
        "mock://summarize_rfp"
    }
}
