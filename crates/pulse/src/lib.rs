//! Pulse - Industry News and Insight Dashboard
//!
//! Terminal client for the news / industry-insight platform: fetches
//! record collections from the remote REST API, filters them locally,
//! renders cards and detail views, submits new records and forwards
//! documents to the server-side AI analysis endpoint.

pub mod cli;
pub mod records;
pub mod search;
pub mod upload;
pub mod view;
