//! Card and detail rendering for the dashboard CLI

use colored::*;
use console::Term;

use crate::records::{InsightRecord, NewsRecord};
use crate::upload::DocumentAnalysis;

/// Extracted-text previews are clipped to this many characters
const EXTRACTED_TEXT_PREVIEW: usize = 2000;

/// Keyword chips shown on a card before the detail view
const CARD_KEYWORD_LIMIT: usize = 3;

/// Card bodies are clamped to this many wrapped lines
const CARD_BODY_LINES: usize = 3;

/// Current terminal width, with a floor so cards stay readable
pub fn terminal_width() -> usize {
  let (_rows, cols) = Term::stdout().size();
  (cols as usize).max(80)
}

/// Wrap text to a display width, preserving paragraph breaks
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let mut current = String::new();
    for word in paragraph.split_whitespace() {
      if current.is_empty() {
        current.push_str(word);
      } else if current.len() + 1 + word.len() <= width {
        current.push(' ');
        current.push_str(word);
      } else {
        lines.push(std::mem::take(&mut current));
        current.push_str(word);
      }
    }

    if !current.is_empty() {
      lines.push(current);
    }
  }

  lines
}

/// First `max_lines` wrapped lines, with an ellipsis when clamped
fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
  let mut lines = wrap_text(text, width);
  if lines.len() > max_lines {
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
      last.push('…');
    }
  }
  lines
}

/// Currency amount with thousands separators, e.g. "$1,250,000"
pub fn format_amount(amount: f64) -> String {
  let negative = amount < 0.0;
  // Round to cents first so "999.999" grows the whole part instead of
  // printing "$999.00".
  let magnitude = (amount.abs() * 100.0).round() / 100.0;
  let whole = magnitude.trunc() as u64;
  let fraction = magnitude.fract();

  let digits = whole.to_string();
  let mut grouped = String::new();
  for (position, digit) in digits.chars().enumerate() {
    if position > 0 && (digits.len() - position) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(digit);
  }

  let mut formatted = format!("${grouped}");
  if fraction > f64::EPSILON {
    // "0.50" -> ".50"
    formatted.push_str(&format!("{fraction:.2}")[1..]);
  }
  if negative {
    formatted.insert(0, '-');
  }
  formatted
}

/// Growth rate colored by sign
pub fn format_growth(rate: f64) -> ColoredString {
  let text = format!("{rate}%");
  if rate > 0.0 {
    text.as_str().green().bold()
  } else {
    text.as_str().red().bold()
  }
}

/// Chips like `[climate] [energy]`, clipped to a display limit
fn keyword_chips(keywords: &[String], limit: usize) -> String {
  keywords
    .iter()
    .take(limit)
    .map(|keyword| format!("[{}]", keyword.blue()))
    .collect::<Vec<_>>()
    .join(" ")
}

/// One news card: clamped content, keyword chips, source and date
pub fn news_card(record: &NewsRecord) {
  let width = terminal_width();

  println!("{}", record.title.bold());
  for line in clamp_lines(&record.content, width, CARD_BODY_LINES) {
    println!("{line}");
  }
  if let Some(keywords) = &record.keywords {
    if !keywords.is_empty() {
      println!("{}", keyword_chips(keywords, CARD_KEYWORD_LIMIT));
    }
  }
  println!("{} {}", "Source:".cyan(), record.source);
  println!("{}", format!("Added: {}", record.date_added.format("%Y-%m-%d")).dimmed());
  println!();
}

/// Full news detail view
pub fn news_detail(record: &NewsRecord) {
  let width = terminal_width();

  println!("{}", format!("=== {} ===", record.title).bold());
  for line in wrap_text(&record.content, width) {
    println!("{line}");
  }
  println!();
  println!("{} {}", "Source:".cyan(), record.source);
  println!("{}", format!("Added: {}", record.date_added.format("%Y-%m-%d %H:%M")).dimmed());
  if let Some(keywords) = &record.keywords {
    if !keywords.is_empty() {
      println!("{} {}", "Keywords:".cyan(), keyword_chips(keywords, keywords.len()));
    }
  }
}

/// One insight card: headline metrics and clamped key drivers
pub fn insight_card(record: &InsightRecord) {
  let width = terminal_width();

  println!("{}", record.industry_name.bold());
  println!(
    "{} {}   {} {}   {} {}",
    "Market:".cyan(),
    format_amount(record.market_size),
    "Industry:".cyan(),
    format_amount(record.industry_size),
    "Growth:".cyan(),
    format_growth(record.growth_rate),
  );
  for line in clamp_lines(&record.key_drivers, width, CARD_BODY_LINES) {
    println!("{line}");
  }
  println!("{}", format!("Last updated: {}", record.last_updated.format("%Y-%m-%d")).dimmed());
  println!();
}

/// Full insight detail view
pub fn insight_detail(record: &InsightRecord) {
  let width = terminal_width();

  println!("{}", format!("=== {} ===", record.industry_name).bold());
  println!("{} {}", "Market size:".cyan(), format_amount(record.market_size));
  println!("{} {}", "Industry size:".cyan(), format_amount(record.industry_size));
  println!("{} {}", "Growth rate:".cyan(), format_growth(record.growth_rate));
  println!();
  println!("{}", "Key drivers".bold());
  for line in wrap_text(&record.key_drivers, width) {
    println!("{line}");
  }
  println!();
  println!("{}", format!("Last updated: {}", record.last_updated.format("%Y-%m-%d %H:%M")).dimmed());
}

/// Render a document analysis: summary card, AI enrichment and the
/// extracted-text preview
pub fn render_analysis(analysis: &DocumentAnalysis) {
  let width = terminal_width();

  println!("{}", format!("=== {} ===", analysis.title).bold());
  for line in wrap_text(&analysis.summary, width) {
    println!("{line}");
  }
  println!("{} {}", "Source:".cyan(), analysis.source.as_deref().unwrap_or("Uploaded Document"));

  if let Some(ai) = &analysis.ai_analysis {
    if let Some(keywords) = &ai.keywords {
      if !keywords.is_empty() {
        println!();
        println!("{}", "Keywords".bold());
        println!("{}", keyword_chips(keywords, keywords.len()));
      }
    }

    if let Some(metrics) = &ai.metrics {
      if !metrics.is_empty() {
        println!();
        println!("{}", "Metrics".bold());
        for (name, value) in metrics {
          println!("  {} {}", format!("{name}:").cyan(), metric_value(value));
        }
      }
    }

    if let Some(insights) = &ai.insights {
      if !insights.is_empty() {
        println!();
        println!("{}", "Insights".bold());
        for insight in insights {
          let wrapped = wrap_text(insight, width.saturating_sub(4));
          for (position, line) in wrapped.into_iter().enumerate() {
            if position == 0 {
              println!("  {} {}", "•".yellow(), line);
            } else {
              println!("    {line}");
            }
          }
        }
      }
    }
  }

  if let Some(text) = &analysis.extracted_text {
    println!();
    println!("{}", "Extracted text".bold());
    let preview: String = text.chars().take(EXTRACTED_TEXT_PREVIEW).collect();
    for line in wrap_text(&preview, width) {
      println!("{line}");
    }
    if text.chars().count() > EXTRACTED_TEXT_PREVIEW {
      println!("{}", format!("… (showing first {EXTRACTED_TEXT_PREVIEW} characters)").dimmed());
    }
  }
}

/// Metric values arrive as arbitrary JSON scalars
fn metric_value(value: &serde_json::Value) -> String {
  match value {
    serde_json::Value::String(text) => text.clone(),
    other => other.to_string(),
  }
}
