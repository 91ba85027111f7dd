//! Typed gateways over the remote HTTP API.

pub mod auth;
pub mod call_logs;
pub mod client;
pub mod errors;
pub mod organizations;
pub mod sessions;

pub use auth::{AccessTokenProvider, AnonymousTokenProvider, StoredTokenProvider};
pub use call_logs::HttpCallLogGateway;
pub use errors::ApiError;
pub use organizations::HttpOrganizationGateway;
pub use sessions::HttpAuthGateway;
