//! HTTP API server implementation

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::core::batch::BatchTranslator;
use crate::core::client::GoogleTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::gate::TranslationGate;
use crate::core::models::{RequestError, TranslateRequest, TranslateResponse};
use crate::core::provider::Provider;

/// Application state
pub struct AppState<P> {
    translator: BatchTranslator<P>,
}

impl<P: Provider> AppState<P> {
    /// Wrap a translator for sharing across requests
    pub fn new(translator: BatchTranslator<P>) -> Self {
        Self { translator }
    }

    /// Shared batch translator
    pub fn translator(&self) -> &BatchTranslator<P> {
        &self.translator
    }
}

/// Serialize `body` as the response; encoding failures become a bare 500
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            error!("Failed to encode JSON response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Failure envelope with `status=false`
pub fn error_response(message: &str, status: StatusCode) -> Response {
    json_response(status, &TranslateResponse::failed(message))
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        error_response(&self.to_string(), StatusCode::BAD_REQUEST)
    }
}

/// Color translation handler
async fn translate<P: Provider + 'static>(
    State(state): State<Arc<AppState<P>>>,
    body: Bytes,
) -> Result<Response, RequestError> {
    let request: TranslateRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected request payload: {}", e);
        RequestError::InvalidPayload
    })?;

    request.validate()?;

    debug!(
        "Translating {} colors to {:?}",
        request.colors.len(),
        request.to
    );

    let response = state.translator.translate_request(&request).await;
    Ok(json_response(StatusCode::OK, &response))
}

/// Build the router. CORS wraps everything so preflight never reaches the handler.
pub fn router<P: Provider + 'static>(state: Arc<AppState<P>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/translate", post(translate::<P>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(config: TranslatorConfig) -> anyhow::Result<()> {
    let source_lang = config.source_lang.clone();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // One gate for the whole process
    let gate = TranslationGate::new(GoogleTranslator::new(config)?);
    let translator = BatchTranslator::new(gate).with_source_lang(source_lang);
    let app = router(Arc::new(AppState::new(translator)));

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
