use crate::gemini::GeminiError;
use crate::youtube::TranscriptError;
use crate::{TrackKind, Transcript};

/// Source of transcripts for a video ID
pub trait TranscriptProvider {
    fn fetch(
        &self,
        video_id: &str,
        lang: &str,
    ) -> impl Future<Output = Result<Transcript, TranscriptError>>;
}

/// Produces a summary from transcript text
pub trait Summarizer {
    fn summarize(&self, transcript_text: &str) -> impl Future<Output = Result<String, GeminiError>>;
}

/// Outcome of one summarization run.
///
/// A summarization failure is carried as a value so the presentation layer
/// can render the placeholder; a transcript failure never reaches this type.
#[derive(Debug)]
pub struct SummaryReport {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub track_kind: TrackKind,
    pub segment_count: usize,
    pub summary: Result<String, GeminiError>,
}

/// Run the transcript → summary sequence for one video.
///
/// The summarizer is only invoked once the transcript fetch has succeeded.
pub async fn run<P, S>(
    provider: &P,
    summarizer: &S,
    video_id: &str,
    lang: &str,
) -> Result<SummaryReport, TranscriptError>
where
    P: TranscriptProvider,
    S: Summarizer,
{
    let transcript = provider.fetch(video_id, lang).await?;
    let text = transcript.text();
    let summary = summarizer.summarize(&text).await;

    Ok(SummaryReport {
        video_id: transcript.video_id,
        title: transcript.title,
        language: transcript.language,
        track_kind: transcript.kind,
        segment_count: transcript.segments.len(),
        summary,
    })
}
