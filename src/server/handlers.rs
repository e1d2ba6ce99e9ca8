use super::types::ErrorResponse;
use crate::answerer::{HandlerResponse, QuestionAnswerer};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub answerer: Arc<QuestionAnswerer>,
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

/// Every request lands here regardless of method or path; the body is the question.
pub async fn ask(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<HandlerResponse, (StatusCode, Json<ErrorResponse>)> {
    state.answerer.handle(&body).await.map_err(|e| {
        error!("Failed to answer question: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Processing error: {}", e),
            }),
        )
    })
}
