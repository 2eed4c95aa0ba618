use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use console::style;
use eyre::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

mod cli;

use cli::Cli;
use ytsum::gemini::GeminiClient;
use ytsum::summarize::GeminiSummarizer;
use ytsum::youtube::InnerTubeClient;

const DEFAULT_LANG: &str = "en";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    format!(
        "\nREQUIRED ENVIRONMENT:\n  GEMINI_API_KEY    Gemini API credential\n\nLogs are written to: {}",
        log_dir().join("ytsum.log").display()
    )
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    // CLI flags take priority over config defaults
    let lang = cli
        .lang
        .or(config.default_lang)
        .unwrap_or_else(|| DEFAULT_LANG.to_string());
    let model = cli
        .model
        .or(config.default_model)
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Validate the credential before any input is read
    let gemini = match GeminiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            std::process::exit(1);
        }
    };

    // URL from arg, or a single line from stdin
    let url_input = match cli.url {
        Some(url) => url,
        None => {
            let stdin = io::stdin();
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            line
        }
    };
    let url_input = url_input.trim().to_string();

    if url_input.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: ytsum <URL>\n       echo <URL> | ytsum");
    }

    let video_id = ytsum::extract_video_id(&url_input)
        .ok_or_else(|| eyre::eyre!("could not extract video ID from: {url_input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  https://www.youtube.com/shorts/ID\n  <11-character video ID>"))?;

    println!(
        "\n{}  {}\n",
        style("ytsum").cyan().bold(),
        style("YouTube Summarizer").dim()
    );
    println!(
        "{} Processing video ID: {}",
        style("✓").green().bold(),
        style(&video_id).yellow()
    );

    let provider = InnerTubeClient::new(reqwest::Client::new());
    let summarizer = GeminiSummarizer::new(gemini, model);

    let spinner = create_spinner("Extracting transcript and generating summary...");
    let report = match ytsum::pipeline::run(&provider, &summarizer, &video_id, &lang).await {
        Ok(report) => {
            spinner.finish_and_clear();
            report
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!(
                "{} {}",
                style("Error:").red().bold(),
                ytsum::output::render_transcript_error(&e)
            );
            std::process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!(
            "Video: {} ({})\nSource: {} captions\nLanguage: {}\nSegments: {}",
            report.title,
            report.video_id,
            report.track_kind,
            report.language,
            report.segment_count,
        );
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", ytsum::output::render_report(&report));

    Ok(())
}
