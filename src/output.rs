use crate::pipeline::SummaryReport;
use crate::youtube::TranscriptError;

/// Rendered in place of a summary when the Gemini call fails
pub const SUMMARY_FAILURE_PLACEHOLDER: &str = "❌ Summary failed due to an AI API error.";

/// Render the summary Markdown, or the failure placeholder with detail
pub fn render_report(report: &SummaryReport) -> String {
    match &report.summary {
        Ok(summary) => summary.clone(),
        Err(e) => format!("{SUMMARY_FAILURE_PLACEHOLDER}\n\nGemini API Error: {e}"),
    }
}

/// One distinct message per transcript failure cause
pub fn render_transcript_error(err: &TranscriptError) -> String {
    match err {
        TranscriptError::Disabled => "Transcripts are disabled for this YouTube video.".to_string(),
        TranscriptError::NotFound { lang } => {
            format!("No transcript found in the requested language ({lang}).")
        }
        other => format!("Transcript extraction error: {other}"),
    }
}
