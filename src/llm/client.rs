use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// The external inference capability: a model name, a prompt, and sampling options in,
/// generated text out.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn infer(
        &self,
        model: &str,
        prompt: &str,
        options: &InferenceOptions,
    ) -> Result<InferenceResult>;
}

/// Talks to an HTTP inferencing service exposing `POST /infer`.
pub struct HttpInferenceClient {
    client: reqwest::Client,
    infer_url: reqwest::Url,
    auth_token: Option<String>,
}

impl HttpInferenceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let infer_url = reqwest::Url::parse(&config.base_url)
            .and_then(|base_url| base_url.join("infer"))
            .map_err(|e| {
                Error::config(format!(
                    "Invalid inference base_url '{}': {}",
                    config.base_url, e
                ))
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            infer_url,
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn infer_url(&self) -> &str {
        self.infer_url.as_str()
    }
}

#[async_trait]
impl InferenceBackend for HttpInferenceClient {
    async fn infer(
        &self,
        model: &str,
        prompt: &str,
        options: &InferenceOptions,
    ) -> Result<InferenceResult> {
        debug!("Sending inference request for model {} to {}", model, self.infer_url);

        let request = InferenceRequest {
            model,
            prompt,
            options,
        };

        let mut http_request = self.client.post(self.infer_url.clone()).json(&request);
        if let Some(ref token) = self.auth_token {
            http_request = http_request.bearer_auth(token);
        }

        let response = http_request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Could not read inference error body: {}", e);
                    String::new()
                }
            };
            return Err(Error::inference(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        let result: InferenceResult = response.json().await?;

        if let Some(ref usage) = result.usage {
            debug!(
                "Inference used {} prompt tokens, generated {}",
                usage.prompt_token_count, usage.generated_token_count
            );
        }

        Ok(result)
    }
}
