//! Per-view collection state: load lifecycle, filtered projection and
//! single-record selection
//!
//! Each dashboard view owns one [`CollectionView`]. The canonical
//! record set is written exactly once per load, the filtered view is a
//! pure projection re-derived on every query change, and at most one
//! record is ever presented.

use crate::records::Searchable;
use crate::search;

/// Load lifecycle of a collection view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
  /// A fetch is outstanding; render a neutral progress indicator
  Loading,
  /// The canonical collection is populated (possibly empty)
  Loaded,
  /// The fetch failed; only the message may be shown, never stale data
  Failed(String),
}

/// Ties a load completion to the generation that started it.
///
/// A completion carrying a stale ticket arrived after the view moved on
/// (reload, unmount) and must be dropped instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

pub struct CollectionView<T: Searchable> {
  state: LoadState,
  records: Vec<T>,
  filtered: Vec<usize>,
  query: String,
  selected: Option<usize>,
  presenter_open: bool,
  generation: u64,
}

impl<T: Searchable> Default for CollectionView<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Searchable> CollectionView<T> {
  /// A view is born loading; there is no idle rendered state
  pub fn new() -> Self {
    Self {
      state: LoadState::Loading,
      records: Vec::new(),
      filtered: Vec::new(),
      query: String::new(),
      selected: None,
      presenter_open: false,
      generation: 0,
    }
  }

  /// Start (or restart) a load, invalidating any outstanding ticket
  pub fn begin_load(&mut self) -> LoadTicket {
    self.generation += 1;
    self.state = LoadState::Loading;
    LoadTicket(self.generation)
  }

  /// Apply a load completion.
  ///
  /// Returns false when the ticket is stale and the completion was
  /// dropped without touching the view.
  pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<Vec<T>, String>) -> bool {
    if ticket != LoadTicket(self.generation) {
      return false;
    }

    self.selected = None;
    self.presenter_open = false;
    self.query.clear();

    match outcome {
      Ok(records) => {
        self.records = records;
        self.filtered = (0..self.records.len()).collect();
        self.state = LoadState::Loaded;
      }
      Err(message) => {
        self.records.clear();
        self.filtered.clear();
        self.state = LoadState::Failed(message);
      }
    }

    true
  }

  pub fn state(&self) -> &LoadState {
    &self.state
  }

  /// The canonical collection as last fetched, unaffected by filtering
  pub fn records(&self) -> &[T] {
    &self.records
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  /// Re-derive the filtered view from (canonical set, query).
  ///
  /// Pure projection; safe to call on every keystroke.
  pub fn apply_query(&mut self, query: &str) {
    self.query = query.to_string();
    self.filtered = search::filter_indices(&self.records, &self.query);
  }

  /// The records currently displayed, in canonical order
  pub fn visible(&self) -> Vec<&T> {
    self.filtered.iter().map(|&index| &self.records[index]).collect()
  }

  /// Select a record by canonical index and open the presenter.
  ///
  /// Selecting a new record implicitly deselects the previous one.
  pub fn select(&mut self, index: usize) -> bool {
    if index >= self.records.len() {
      return false;
    }
    self.selected = Some(index);
    self.presenter_open = true;
    true
  }

  /// Select the first record matching a predicate
  pub fn select_where<P>(&mut self, predicate: P) -> bool
  where
    P: FnMut(&T) -> bool,
  {
    match self.records.iter().position(predicate) {
      Some(index) => self.select(index),
      None => false,
    }
  }

  /// Close the presenter. The selection is retained (exit animation)
  /// but unreadable until the next select.
  pub fn close(&mut self) {
    self.presenter_open = false;
  }

  pub fn is_open(&self) -> bool {
    self.presenter_open
  }

  /// The record behind the open presenter, if any
  pub fn active(&self) -> Option<&T> {
    if !self.presenter_open {
      return None;
    }
    self.selected.map(|index| &self.records[index])
  }
}
