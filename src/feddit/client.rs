//! Feddit API client: a deduplicating, cache-backed reader of the upstream
//! forum service.
//!
//! Every fetch is keyed by its canonical path plus sorted query parameters.
//! The first caller to miss the cache takes that key's lock and performs the
//! real network call; concurrent callers for the same key wait on the lock
//! and find the freshly cached payload on the mandatory re-check. Distinct
//! keys never contend. Failures are surfaced to the caller, never cached.

use crate::config::Config;
use crate::feddit::cache::RequestCache;
use crate::feddit::errors::FedditApiError;
use crate::feddit::json;
use crate::feddit::locks::LockRegistry;
use crate::feddit::models::{CommentsPage, Subfeddit, SubfedditListing};
use anyhow::Context;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Page size used when scanning the subfeddit listing for a title match.
const SUBFEDDIT_LISTING_LIMIT: u32 = 100;

const SUBFEDDITS_PATH: &str = "/api/v1/subfeddits/";
const SUBFEDDIT_PATH: &str = "/api/v1/subfeddit/";
const COMMENTS_PATH: &str = "/api/v1/comments/";

pub struct FedditApi {
    http: reqwest::Client,
    base_url: String,
    cache: RequestCache,
    locks: LockRegistry,
    /// Caps in-flight upstream requests at the configured pool size;
    /// excess callers wait for a permit instead of opening more sockets.
    permits: Semaphore,
}

impl FedditApi {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .pool_max_idle_per_host(config.keepalive_connections)
            .build()
            .context("failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            base_url: config.feddit_api_url.trim_end_matches('/').to_owned(),
            cache: RequestCache::new(config.cache_size, Duration::from_secs(config.cache_ttl)),
            locks: LockRegistry::new(),
            permits: Semaphore::new(config.max_connections),
        })
    }

    /// Cached, deduplicated GET against the upstream.
    ///
    /// The re-check after lock acquisition is load-bearing: without it,
    /// every caller that waited on the lock would redo the network call the
    /// moment the winner released it.
    pub async fn fetch(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Arc<Value>, FedditApiError> {
        let key = request_key(path, params);

        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        let lock = self.locks.lock_for(&key);
        let _guard = lock.lock().await;

        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache filled while waiting on lock");
            return Ok(hit);
        }

        let payload = Arc::new(self.get_json(path, params).await?);
        self.cache.insert(key, payload.clone());
        Ok(payload)
    }

    /// Resolve a subfeddit by title, case-insensitively.
    ///
    /// Scans the listing endpoint, then fetches the detail record for the
    /// matched id. Both legs go through the deduplicated `fetch`.
    pub async fn resolve_subfeddit(&self, name: &str) -> Result<Subfeddit, FedditApiError> {
        let payload = self
            .fetch(
                SUBFEDDITS_PATH,
                &[("limit", SUBFEDDIT_LISTING_LIMIT.to_string())],
            )
            .await?;
        let listing: SubfedditListing = json::from_value(&payload)
            .map_err(|source| invalid_response(SUBFEDDITS_PATH, source))?;

        let wanted = name.to_lowercase();
        let matched = listing
            .subfeddits
            .iter()
            .find(|s| s.title.to_lowercase() == wanted)
            .ok_or_else(|| FedditApiError::NotFound(name.to_owned()))?;

        let payload = self
            .fetch(SUBFEDDIT_PATH, &[("subfeddit_id", matched.id.to_string())])
            .await?;
        json::from_value(&payload).map_err(|source| invalid_response(SUBFEDDIT_PATH, source))
    }

    /// Fetch one page of comments for a subfeddit. Raw comments only;
    /// sentiment enrichment happens in the caller.
    pub async fn get_comments(
        &self,
        subfeddit_id: i64,
        limit: u32,
        skip: u32,
    ) -> Result<CommentsPage, FedditApiError> {
        let payload = self
            .fetch(
                COMMENTS_PATH,
                &[
                    ("subfeddit_id", subfeddit_id.to_string()),
                    ("limit", limit.to_string()),
                    ("skip", skip.to_string()),
                ],
            )
            .await?;
        json::from_value(&payload).map_err(|source| invalid_response(COMMENTS_PATH, source))
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value, FedditApiError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| unavailable(path, anyhow::Error::new(e)))?;

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| unavailable(path, e.into()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%path, status = status.as_u16(), "upstream returned error status");
            return Err(unavailable(path, anyhow::anyhow!("status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| unavailable(path, e.into()))?;
        serde_json::from_slice(&body).map_err(|e| invalid_response(path, e.into()))
    }
}

fn unavailable(path: &str, source: anyhow::Error) -> FedditApiError {
    FedditApiError::Unavailable {
        path: path.to_owned(),
        source,
    }
}

fn invalid_response(path: &str, source: anyhow::Error) -> FedditApiError {
    FedditApiError::InvalidResponse {
        path: path.to_owned(),
        source,
    }
}

/// Canonical cache key: path plus query parameters sorted by name, so
/// construction order never splits logically identical requests.
fn request_key(path: &str, params: &[(&str, String)]) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort();
    let mut key = String::from(path);
    for (name, value) in sorted {
        key.push(':');
        key.push_str(name);
        key.push('=');
        key.push_str(value);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_key_ignores_parameter_order() {
        let forward = request_key(
            "/api/v1/comments/",
            &[("limit", "2".into()), ("skip", "0".into())],
        );
        let reversed = request_key(
            "/api/v1/comments/",
            &[("skip", "0".into()), ("limit", "2".into())],
        );
        assert_eq!(forward, reversed);
    }

    #[test]
    fn request_key_distinguishes_values() {
        let a = request_key("/api/v1/comments/", &[("skip", "0".into())]);
        let b = request_key("/api/v1/comments/", &[("skip", "1".into())]);
        assert_ne!(a, b);
    }

    #[test]
    fn request_key_distinguishes_paths() {
        let a = request_key("/api/v1/subfeddit/", &[("subfeddit_id", "1".into())]);
        let b = request_key("/api/v1/comments/", &[("subfeddit_id", "1".into())]);
        assert_ne!(a, b);
    }
}
