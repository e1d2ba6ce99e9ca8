use async_trait::async_trait;
use magic_eight_ball::{
    Error, Result,
    llm::{InferenceBackend, InferenceOptions, InferenceResult},
};
use std::sync::{Arc, Mutex};

/// A single recorded call to the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedInference {
    pub model: String,
    pub prompt: String,
    pub options: InferenceOptions,
}

/// Mock inference backend for testing
#[derive(Debug)]
pub struct MockInferenceBackend {
    pub responses: Arc<Mutex<Vec<InferenceResult>>>,
    pub requests: Arc<Mutex<Vec<RecordedInference>>>,
    pub error: Option<String>,
}

impl MockInferenceBackend {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_answers(self, answers: &[&str]) -> Self {
        *self.responses.lock().unwrap() = answers
            .iter()
            .map(|text| InferenceResult::text(*text))
            .collect();
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<RecordedInference> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for MockInferenceBackend {
    async fn infer(
        &self,
        model: &str,
        prompt: &str,
        options: &InferenceOptions,
    ) -> Result<InferenceResult> {
        self.requests.lock().unwrap().push(RecordedInference {
            model: model.to_string(),
            prompt: prompt.to_string(),
            options: *options,
        });

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::inference("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockInferenceBackend {
    fn default() -> Self {
        Self::new()
    }
}
