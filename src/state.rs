//! Application state shared across handlers.

use crate::feddit::FedditApi;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub feddit: Arc<FedditApi>,
    /// Page size for comment listings when the caller omits `limit`.
    pub default_comment_limit: u32,
}

impl AppState {
    pub fn new(feddit: Arc<FedditApi>, default_comment_limit: u32) -> Self {
        Self {
            feddit,
            default_comment_limit,
        }
    }
}
