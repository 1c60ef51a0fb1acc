//! Feddit sentiment proxy.
//!
//! Wraps the upstream Feddit discussion-forum API behind a deduplicating,
//! TTL-cached client, enriches fetched comments with sentiment scores, and
//! serves filtered/sorted views over HTTP.
//!
//! Module paths read `feddit::feddit::` because the crate (`feddit`)
//! contains a `feddit` submodule for the upstream API client.

pub mod app;
pub mod config;
pub mod feddit;
pub mod logging;
pub mod sentiment;
pub mod state;
pub mod web;
