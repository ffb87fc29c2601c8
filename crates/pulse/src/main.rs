use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pulse::cli::commands;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(
  about = "Pulse - Industry News and Insight Dashboard\nBrowse, search and submit platform records from the terminal"
)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Browse the news collection
  News {
    /// Case-insensitive filter applied across searchable fields
    #[arg(short, long)]
    search: Option<String>,
    /// Open the detail view for one record id
    #[arg(short, long)]
    open: Option<i64>,
  },
  /// Browse the industry-insight collection
  Insights {
    /// Case-insensitive filter applied across searchable fields
    #[arg(short, long)]
    search: Option<String>,
    /// Open the detail view for one record id
    #[arg(short, long)]
    open: Option<i64>,
  },
  /// Submit a news record
  AddNews {
    /// Headline of the record
    title: String,
    /// Body text
    content: String,
    /// Publication or origin
    source: String,
  },
  /// Submit an industry insight record
  AddInsight {
    /// Industry the insight describes
    industry_name: String,
    /// Market size in currency units
    market_size: f64,
    /// Industry size in currency units
    industry_size: f64,
    /// Growth rate percentage (may be negative)
    growth_rate: f64,
    /// Narrative of what drives the industry
    key_drivers: String,
  },
  /// Upload a PDF or image document for AI analysis
  Analyze {
    /// Path to the document
    file: PathBuf,
  },
}

async fn handle(command: Command) -> Result<()> {
  match command {
    Command::News { search, open } => commands::news(search, open).await,
    Command::Insights { search, open } => commands::insights(search, open).await,
    Command::AddNews { title, content, source } => commands::add_news(title, content, source).await,
    Command::AddInsight { industry_name, market_size, industry_size, growth_rate, key_drivers } => {
      commands::add_insight(industry_name, market_size, industry_size, growth_rate, key_drivers)
        .await
    }
    Command::Analyze { file } => commands::analyze(file).await,
  }
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  if let Err(err) = handle(cli.command).await {
    herald::error(&format!("{err:#}"));
    std::process::exit(1);
  }
}
