pub mod config;
pub mod gemini;
pub mod output;
pub mod pipeline;
pub mod summarize;
pub mod youtube;

use url::Url;

/// A single captioned segment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Kind of caption track the transcript came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Manual,
    Generated,
}

/// Complete transcript for a video
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub kind: TrackKind,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Segment texts joined with single spaces, in original order
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::Manual => write!(f, "manual"),
            TrackKind::Generated => write!(f, "auto-generated"),
        }
    }
}

/// Extract video ID from various YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // Bare 11-character video ID
    if regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap().is_match(input) {
        return Some(input.to_string());
    }

    // Accept scheme-less inputs like "youtube.com/watch?v=ID"
    let url = Url::parse(input)
        .or_else(|_| Url::parse(&format!("https://{input}")))
        .ok()?;

    id_from_url(&url)
}

fn id_from_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    match host {
        // youtu.be/ID — the query is already stripped by the parser
        "youtu.be" => url
            .path_segments()?
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        "youtube.com" | "m.youtube.com" | "music.youtube.com" => {
            // watch?v=ID — the last v parameter wins when repeated
            if let Some((_, id)) = url.query_pairs().filter(|(k, _)| k == "v").last() {
                return Some(id.into_owned()).filter(|s| !s.is_empty());
            }

            // youtube.com/embed/ID, /shorts/ID, /live/ID
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("embed") | Some("shorts") | Some("live") => {
                    segments.next().filter(|s| !s.is_empty()).map(str::to_string)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_video_id() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_repeated_v_uses_last() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=first456789&v=second56789"),
            Some("second56789".to_string())
        );
    }

    #[test]
    fn test_watch_url_v_not_first_param() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url_with_query() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abcdef"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_schemeless_url() {
        assert_eq!(
            extract_video_id("youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_mobile_host() {
        assert_eq!(
            extract_video_id("https://m.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_unrelated_host() {
        assert_eq!(extract_video_id("https://vimeo.com/watch?v=dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(extract_video_id("not-a-valid-id"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(extract_video_id("  dQw4w9WgXcQ  "), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_transcript_text_join() {
        let t = Transcript {
            video_id: "abc".to_string(),
            title: String::new(),
            language: "en".to_string(),
            kind: TrackKind::Manual,
            segments: vec![
                Segment {
                    text: "a".to_string(),
                    start: 0.0,
                    duration: 1.0,
                },
                Segment {
                    text: "b".to_string(),
                    start: 1.0,
                    duration: 1.0,
                },
                Segment {
                    text: "c".to_string(),
                    start: 2.0,
                    duration: 1.0,
                },
            ],
        };
        assert_eq!(t.text(), "a b c");
    }

    #[test]
    fn test_transcript_text_empty() {
        let t = Transcript {
            video_id: "abc".to_string(),
            title: String::new(),
            language: "en".to_string(),
            kind: TrackKind::Generated,
            segments: vec![],
        };
        assert_eq!(t.text(), "");
    }
}
