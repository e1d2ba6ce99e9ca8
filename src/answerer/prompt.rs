/// Wraps a question in the Llama 2 chat template with the Magic 8 Ball persona.
pub fn build_prompt(question: &str) -> String {
    format!(
        "<s>[INST] <<SYS>>\n\
         You are acting as a Magic 8 Ball that predicts the answer to questions about events now or in the future.\n\
         Your tone should be expressive yet polite.\n\
         Your answers should be 10 words or less.\n\
         <</SYS>>\n\
         {question}[/INST]"
    )
}
