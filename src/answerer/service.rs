use super::prompt::build_prompt;
use crate::{
    Result,
    llm::{InferenceBackend, InferenceOptions},
};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Body sent back when the request carries no question. Plain text even though the
/// response is labelled as JSON.
pub const NO_QUESTION_MESSAGE: &str = "No question asked";

/// The status, headers and body produced for one request.
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HandlerResponse {
    fn json_typed(status: StatusCode, body: Vec<u8>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            status,
            headers,
            body,
        }
    }
}

/// JSON envelope of a successful answer.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Turns a question into a Magic 8 Ball answer using an injected inference backend.
pub struct QuestionAnswerer {
    backend: Arc<dyn InferenceBackend>,
    model: String,
}

impl QuestionAnswerer {
    pub fn new(backend: Arc<dyn InferenceBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Handles a raw request body.
    ///
    /// An empty body yields a 400. Invalid UTF-8 and inference failures are returned
    /// as errors for the host to deal with.
    pub async fn handle(&self, body: &[u8]) -> Result<HandlerResponse> {
        let question = std::str::from_utf8(body)?;

        if question.is_empty() {
            debug!("Rejecting request without a question");
            return Ok(HandlerResponse::json_typed(
                StatusCode::BAD_REQUEST,
                NO_QUESTION_MESSAGE.as_bytes().to_vec(),
            ));
        }

        let answer = self.answer(question).await?;
        let body = serde_json::to_vec(&AnswerResponse { answer })?;

        Ok(HandlerResponse::json_typed(StatusCode::OK, body))
    }

    /// Asks the model. The returned text is passed through untouched.
    pub async fn answer(&self, question: &str) -> Result<String> {
        info!("Question: {}", question);

        let prompt = build_prompt(question);
        let result = self
            .backend
            .infer(&self.model, &prompt, &InferenceOptions::MAGIC_EIGHT_BALL)
            .await?;

        info!("Answer: {}", result.text);
        Ok(result.text)
    }
}
