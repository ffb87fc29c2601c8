//! Document upload flow: local validation, single-flight guard and
//! analysis result bookkeeping

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File kinds accepted for analysis, judged by extension
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

/// Rejections produced before any network activity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Please select a file first")]
  NoFileSelected,
  #[error("Please upload only PDF or image files (PNG, JPG, JPEG)")]
  UnsupportedKind,
  #[error("An upload is already in progress")]
  UploadInFlight,
}

/// Check that a path names an accepted document kind
pub fn validate_document(path: &Path) -> Result<(), ValidationError> {
  let extension =
    path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_ascii_lowercase());

  match extension {
    Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
    _ => Err(ValidationError::UnsupportedKind),
  }
}

/// Content type to declare for an accepted document
pub fn mime_for(path: &Path) -> &'static str {
  let extension =
    path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_ascii_lowercase());

  match extension.as_deref() {
    Some("pdf") => "application/pdf",
    Some("png") => "image/png",
    _ => "image/jpeg",
  }
}

/// Structured result returned by the analysis endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
  pub title: String,
  pub summary: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub extracted_text: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ai_analysis: Option<AiAnalysis>,
}

/// AI enrichment attached to an analysis, every part optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub keywords: Option<Vec<String>>,
  /// Named metrics; values are whatever scalar the model produced
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metrics: Option<BTreeMap<String, serde_json::Value>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub insights: Option<Vec<String>>,
}

/// Upload flow state: one staged file, at most one request in flight
#[derive(Debug, Default)]
pub struct UploadFlow {
  file: Option<PathBuf>,
  busy: bool,
  result: Option<DocumentAnalysis>,
  error: Option<String>,
  success: Option<String>,
}

impl UploadFlow {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stage a file for upload, clearing transient messages
  pub fn choose_file(&mut self, path: PathBuf) {
    self.file = Some(path);
    self.clear_messages();
  }

  pub fn clear_file(&mut self) {
    self.file = None;
    self.clear_messages();
  }

  fn clear_messages(&mut self) {
    self.error = None;
    self.success = None;
  }

  /// Validate the staged file and mark the flow busy.
  ///
  /// Fails without any network activity when no file is staged, the
  /// kind is not accepted, or a request is already outstanding.
  pub fn begin(&mut self) -> Result<PathBuf, ValidationError> {
    if self.busy {
      return Err(ValidationError::UploadInFlight);
    }

    let path = self.file.clone().ok_or(ValidationError::NoFileSelected)?;
    validate_document(&path)?;

    self.clear_messages();
    self.busy = true;
    Ok(path)
  }

  /// Record a completed analysis: replaces any previous result and
  /// clears the staged file
  pub fn succeed(&mut self, analysis: DocumentAnalysis) {
    self.busy = false;
    self.result = Some(analysis);
    self.success = Some("Document processed successfully with AI analysis!".to_string());
    self.file = None;
  }

  /// Record a failed upload; any previous result stays untouched
  pub fn fail(&mut self, message: impl Into<String>) {
    self.busy = false;
    self.error = Some(message.into());
  }

  pub fn is_busy(&self) -> bool {
    self.busy
  }

  pub fn file(&self) -> Option<&Path> {
    self.file.as_deref()
  }

  pub fn result(&self) -> Option<&DocumentAnalysis> {
    self.result.as_ref()
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  pub fn success(&self) -> Option<&str> {
    self.success.as_deref()
  }
}
