use axum::Router;
use summarize_proxy::{
    backend::{HttpBackend, SummarizeBackend},
    config::BackendConfig,
    relay::Relay,
    server::{self, AppState},
};
use std::sync::Arc;

/// `%PDF-1.4\n`
pub const PDF_HEADER_B64: &str = "JVBERi0xLjQK";

/// Build the router around any backend
pub fn create_test_app(backend: Arc<dyn SummarizeBackend>) -> Router {
    let state = AppState {
        relay: Relay::new(backend),
    };
    server::router(state)
}

/// Build the router around a real HTTP backend at `base_url`
pub fn create_http_app(base_url: &str) -> Router {
    let backend = HttpBackend::new(&BackendConfig {
        base_url: base_url.to_string(),
    })
    .unwrap();
    create_test_app(Arc::new(backend))
}

/// A loopback address nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
