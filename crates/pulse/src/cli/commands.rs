//! Command handlers gluing the HTTP client, collection views and
//! rendering together

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use colored::*;

use crate::cli::client::get_client;
use crate::cli::display;
use crate::records::{Identified, InsightSubmission, NewsSubmission, Searchable};
use crate::upload::UploadFlow;
use crate::view::{CollectionView, LoadState};

/// Browse the news collection, optionally filtered, optionally opening
/// one record's detail view
pub async fn news(search: Option<String>, open: Option<i64>) -> Result<()> {
  herald::info("Loading news...");

  let client = get_client();
  let mut view = CollectionView::new();
  let ticket = view.begin_load();
  let outcome = client.fetch_news().await.map_err(|err| format!("Failed to load news: {err}"));
  view.finish_load(ticket, outcome);

  render_collection(view, search, open, "News Collection", display::news_card, display::news_detail)
}

/// Browse the industry-insight collection
pub async fn insights(search: Option<String>, open: Option<i64>) -> Result<()> {
  herald::info("Loading industry insights...");

  let client = get_client();
  let mut view = CollectionView::new();
  let ticket = view.begin_load();
  let outcome = client
    .fetch_insights()
    .await
    .map_err(|err| format!("Failed to load industry insights: {err}"));
  view.finish_load(ticket, outcome);

  render_collection(
    view,
    search,
    open,
    "Industry Insights",
    display::insight_card,
    display::insight_detail,
  )
}

/// Render one loaded collection view: cards for the filtered set, then
/// the detail presenter when a record id was opened
fn render_collection<T, C, D>(
  mut view: CollectionView<T>,
  search: Option<String>,
  open: Option<i64>,
  heading: &str,
  card: C,
  detail: D,
) -> Result<()>
where
  T: Searchable + Identified,
  C: Fn(&T),
  D: Fn(&T),
{
  match view.state() {
    LoadState::Failed(message) => return Err(anyhow!(message.clone())),
    LoadState::Loading => return Err(anyhow!("collection load never completed")),
    LoadState::Loaded => {}
  }

  println!("{}", heading.bold());
  println!();

  if let Some(query) = &search {
    view.apply_query(query);
  }

  let visible = view.visible();
  if visible.is_empty() {
    match view.query() {
      "" => println!("No records yet."),
      query => println!("No matches found for: {}", query.yellow()),
    }
  } else {
    for record in visible {
      card(record);
    }
  }

  if let Some(id) = open {
    if !view.select_where(|record| record.id() == id) {
      return Err(anyhow!("No record with id {id}"));
    }
    if let Some(record) = view.active() {
      detail(record);
    }
  }

  Ok(())
}

/// Submit a news record
pub async fn add_news(title: String, content: String, source: String) -> Result<()> {
  let client = get_client();
  let submission = NewsSubmission { title, content, source };

  match client.create_news(&submission).await {
    Ok(record) => {
      println!("{} Added news {} (id {})", "✓".green(), record.title.bold(), record.id);
      Ok(())
    }
    Err(err) => Err(anyhow!("Error adding news: {err}")),
  }
}

/// Submit an industry insight record
pub async fn add_insight(
  industry_name: String,
  market_size: f64,
  industry_size: f64,
  growth_rate: f64,
  key_drivers: String,
) -> Result<()> {
  let client = get_client();
  let submission =
    InsightSubmission { industry_name, market_size, industry_size, growth_rate, key_drivers };

  match client.create_insight(&submission).await {
    Ok(record) => {
      println!("{} Added insight {} (id {})", "✓".green(), record.industry_name.bold(), record.id);
      Ok(())
    }
    Err(err) => Err(anyhow!("Error adding industry insight: {err}")),
  }
}

/// Upload one document for AI analysis
pub async fn analyze(file: PathBuf) -> Result<()> {
  let mut flow = UploadFlow::new();
  flow.choose_file(file);

  let path = match flow.begin() {
    Ok(path) => path,
    Err(err) => {
      flow.fail(err.to_string());
      return Err(anyhow!(err));
    }
  };

  herald::info(&format!("Analyzing {}...", path.display()));

  let client = get_client();
  match client.upload_document(&path).await {
    Ok(analysis) => {
      flow.succeed(analysis);
      if let Some(message) = flow.success() {
        println!("{} {message}", "✓".green());
      }
      println!();
      if let Some(result) = flow.result() {
        display::render_analysis(result);
      }
      Ok(())
    }
    Err(err) => {
      let message = format!("Error processing document: {err}");
      flow.fail(message.clone());
      Err(anyhow!(message))
    }
  }
}
