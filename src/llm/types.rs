use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the inference backend.
///
/// Field order matches the positional order the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferenceOptions {
    pub max_tokens: u32,
    pub repeat_penalty: f32,
    pub repeat_penalty_last_n_token_count: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl InferenceOptions {
    /// The fixed parameters used for every Magic 8 Ball answer.
    pub const MAGIC_EIGHT_BALL: Self = Self {
        max_tokens: 20,
        repeat_penalty: 1.5,
        repeat_penalty_last_n_token_count: 20,
        temperature: 0.25,
        top_k: 5,
        top_p: 0.25,
    };
}

#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub options: &'a InferenceOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub text: String,
    #[serde(default)]
    pub usage: Option<InferenceUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceUsage {
    pub prompt_token_count: u32,
    pub generated_token_count: u32,
}

impl InferenceResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}
