pub mod handlers;
pub mod types;

use crate::{
    Result,
    answerer::QuestionAnswerer,
    config::Config,
    llm::{HttpInferenceClient, InferenceBackend},
};
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the router around an answerer. Any method on any path is treated as a question.
pub fn router(answerer: Arc<QuestionAnswerer>) -> Router {
    let app_state = handlers::AppState { answerer };

    Router::new()
        .fallback(handlers::ask)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize inference backend
    let backend: Arc<dyn InferenceBackend> = Arc::new(HttpInferenceClient::new(&config.inference)?);
    let answerer = Arc::new(QuestionAnswerer::new(backend, config.inference.model.clone()));

    info!(
        "Answering with model {} via {}",
        answerer.model(),
        config.inference.base_url
    );

    let app = router(answerer);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
