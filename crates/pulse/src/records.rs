//! Record shapes served by the remote collection API
//!
//! Two tagged record kinds exist: news entries and industry insights.
//! Each enumerates exactly the fields that participate in client-side
//! search, so filtering never silently matches on identifiers or
//! timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text a record exposes to the search/filter engine
pub trait Searchable {
  /// Space-joined content of every field that participates in search
  fn search_text(&self) -> String;
}

impl<T: Searchable> Searchable for &T {
  fn search_text(&self) -> String {
    (**self).search_text()
  }
}

/// Records carry a server-assigned identifier, unique and stable
/// within a fetched collection
pub trait Identified {
  fn id(&self) -> i64;
}

/// A news entry as served by the collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
  pub id: i64,
  pub title: String,
  pub content: String,
  pub source: String,
  pub date_added: DateTime<Utc>,
  /// Keyword tags attached by the analysis pipeline, if any
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub keywords: Option<Vec<String>>,
}

impl Searchable for NewsRecord {
  fn search_text(&self) -> String {
    let mut text = format!("{} {} {}", self.title, self.content, self.source);
    if let Some(keywords) = &self.keywords {
      for keyword in keywords {
        text.push(' ');
        text.push_str(keyword);
      }
    }
    text
  }
}

impl Identified for NewsRecord {
  fn id(&self) -> i64 {
    self.id
  }
}

/// An industry insight as served by the collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecord {
  pub id: i64,
  pub industry_name: String,
  /// Market size in currency units
  pub market_size: f64,
  pub industry_size: f64,
  /// Growth rate percentage, negative for shrinking industries
  pub growth_rate: f64,
  pub key_drivers: String,
  pub last_updated: DateTime<Utc>,
}

impl Searchable for InsightRecord {
  fn search_text(&self) -> String {
    // Numeric fields join in display form so a query like "8.5" still
    // finds an 8.5% growth rate.
    format!(
      "{} {} {} {} {}",
      self.industry_name, self.key_drivers, self.market_size, self.industry_size, self.growth_rate
    )
  }
}

impl Identified for InsightRecord {
  fn id(&self) -> i64 {
    self.id
  }
}

/// Body for POST {base}/news/
#[derive(Debug, Clone, Serialize)]
pub struct NewsSubmission {
  pub title: String,
  pub content: String,
  pub source: String,
}

/// Body for POST {base}/industry-insights/
#[derive(Debug, Clone, Serialize)]
pub struct InsightSubmission {
  pub industry_name: String,
  pub market_size: f64,
  pub industry_size: f64,
  pub growth_rate: f64,
  pub key_drivers: String,
}
