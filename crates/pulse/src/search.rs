//! Pure client-side filtering over a fetched collection

use crate::records::Searchable;

/// Indices of the records matching a query, in collection order.
///
/// The empty query selects everything. Otherwise a record matches when
/// the query is a case-insensitive substring of its enumerated search
/// text. Membership is binary: no ranking, no re-sorting, and the
/// canonical collection is never touched.
pub fn filter_indices<T: Searchable>(records: &[T], query: &str) -> Vec<usize> {
  if query.is_empty() {
    return (0..records.len()).collect();
  }

  let needle = query.to_lowercase();
  records
    .iter()
    .enumerate()
    .filter(|(_, record)| record.search_text().to_lowercase().contains(&needle))
    .map(|(index, _)| index)
    .collect()
}

/// Borrowing variant of [`filter_indices`]
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
  filter_indices(records, query).into_iter().map(|index| &records[index]).collect()
}
