//! Port interface for the call-log list endpoint.

use async_trait::async_trait;
use voicedeck_domain::{CallLogPage, Result};

/// Trait for the remote call-log list and favorite-flag operations.
#[async_trait]
pub trait CallLogGateway: Send + Sync {
    /// Fetch one page of call logs for an organization, filtered by `query`
    /// (empty string means unfiltered). Pages are 1-based.
    async fn fetch_page(
        &self,
        organization_id: &str,
        page: u32,
        limit: u32,
        query: &str,
    ) -> Result<CallLogPage>;

    /// Set the starred flag on a call log. Returns the value the server
    /// acknowledged.
    async fn set_starred(
        &self,
        organization_id: &str,
        call_id: &str,
        starred: bool,
    ) -> Result<bool>;
}
