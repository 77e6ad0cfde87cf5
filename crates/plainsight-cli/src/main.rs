mod display;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use plainsight_ai::{DEFAULT_ENDPOINT, HttpCompletionClient, MisinformationTool, SimplificationTool};
use plainsight_core::{AnalysisRequest, SimplificationRequest};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "plainsight",
    version,
    about = "Misinformation scoring and legal-text simplification backed by a remote model"
)]
struct Cli {
    /// Completion endpoint accepting `{"prompt"}` and returning `{"result"}`.
    #[arg(long, global = true, env = "PLAINSIGHT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Print the outcome as JSON instead of a panel.
    #[arg(long, global = true)]
    json: bool,

    /// Also write the outcome to PATH (Markdown for `.md`, JSON otherwise).
    #[arg(long, global = true, value_name = "PATH")]
    report: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a URL or a text passage for misinformation.
    Analyze(AnalyzeArgs),
    /// Rewrite legal text in plain English.
    Simplify(SimplifyArgs),
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct AnalyzeArgs {
    /// Article or social media URL.
    #[arg(long)]
    url: Option<String>,

    /// Text, headline, or social media post.
    #[arg(long)]
    text: Option<String>,
}

impl AnalyzeArgs {
    fn into_request(self) -> AnalysisRequest {
        match (self.url, self.text) {
            (Some(url), _) => AnalysisRequest::url(url),
            (None, text) => AnalysisRequest::text(text.unwrap_or_default()),
        }
    }
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SimplifyArgs {
    /// Legal text to simplify.
    #[arg(long)]
    text: Option<String>,

    /// UTF-8 text file holding the legal document.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl SimplifyArgs {
    fn into_request(self) -> anyhow::Result<SimplificationRequest> {
        let legal_text = match (self.text, self.file) {
            (Some(text), _) => text,
            (None, Some(path)) => read_document(&path)?,
            (None, None) => String::new(),
        };
        Ok(SimplificationRequest::new(legal_text))
    }
}

fn read_document(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading legal document {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        endpoint = %cli.endpoint,
        "plainsight starting"
    );

    let client = HttpCompletionClient::new(&cli.endpoint);

    match cli.command {
        Command::Analyze(args) => {
            let tool = MisinformationTool::new(client);
            let outcome = tool.submit(&args.into_request()).await?;
            if cli.json {
                println!("{}", report::to_json(&outcome, Utc::now())?);
            } else {
                display::print_analysis(&outcome);
            }
            if let Some(path) = &cli.report {
                report::write(path, &outcome)?;
            }
        }
        Command::Simplify(args) => {
            let tool = SimplificationTool::new(client);
            let outcome = tool.submit(&args.into_request()?).await?;
            if cli.json {
                println!("{}", report::to_json(&outcome, Utc::now())?);
            } else {
                display::print_simplification(&outcome);
            }
            if let Some(path) = &cli.report {
                report::write(path, &outcome)?;
            }
        }
    }

    Ok(())
}
