use crate::gemini::{GeminiClient, GeminiError};
use crate::pipeline::Summarizer;

/// Summarizes transcripts with a fixed Gemini model
pub struct GeminiSummarizer {
    client: GeminiClient,
    model: String,
}

impl GeminiSummarizer {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, transcript_text: &str) -> Result<String, GeminiError> {
        let prompt = build_prompt(transcript_text);
        self.client.generate(&self.model, &prompt).await
    }
}

/// Build the instructional prompt, embedding the transcript verbatim.
///
/// The section counts are a request to the model, not something the response
/// is checked against.
pub fn build_prompt(transcript_text: &str) -> String {
    format!(
        "You are an expert AI productivity assistant. Your task is to summarize the \
following YouTube video transcript for professionals and students seeking maximum \
efficiency. The output must be highly professional and structured using Markdown \
for readability.

Provide the following sections:
1. A short, punchy summary (2-3 sentences)
2. Exactly 5 clear Highlights (bullet points)
3. Exactly 3 actionable Takeaways (numbered list)

---TRANSCRIPT---
{transcript_text}"
    )
}
