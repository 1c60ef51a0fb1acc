//! Error types for the Feddit API client.

#[derive(Debug, thiserror::Error)]
pub enum FedditApiError {
    /// Network failure, timeout, or non-2xx status from the upstream.
    /// Never cached; the next call retries at the network.
    #[error("upstream request to {path} failed")]
    Unavailable {
        path: String,
        #[source]
        source: anyhow::Error,
    },
    /// No subfeddit title matched during name resolution.
    #[error("no subfeddit titled '{0}'")]
    NotFound(String),
    /// The upstream answered 2xx but the payload shape was wrong.
    #[error("unexpected response shape from {path}")]
    InvalidResponse {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}
