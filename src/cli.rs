use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "AI-powered YouTube video summarizer",
    version,
)]
pub struct Cli {
    /// YouTube video URL or video ID (reads one line from stdin if omitted)
    pub url: Option<String>,

    /// Preferred caption language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Gemini model for summarization
    #[arg(long)]
    pub model: Option<String>,

    /// Show video metadata while processing
    #[arg(short, long)]
    pub verbose: bool,
}
