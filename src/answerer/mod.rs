mod prompt;
mod service;

pub use prompt::build_prompt;
pub use service::{AnswerResponse, HandlerResponse, NO_QUESTION_MESSAGE, QuestionAnswerer};
