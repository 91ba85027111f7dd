//! Port interface for the organization list endpoint.

use async_trait::async_trait;
use voicedeck_domain::{Organization, Result};

/// Trait for fetching the organizations a user belongs to.
#[async_trait]
pub trait OrganizationGateway: Send + Sync {
    /// Fetch the organization list for the given user.
    async fn fetch_organizations(&self, user_id: i64) -> Result<Vec<Organization>>;
}
