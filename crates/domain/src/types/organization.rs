//! Organization snapshots returned by the organizations endpoint.

use serde::{Deserialize, Serialize};

/// An organization the signed-in user belongs to.
///
/// Immutable snapshot; the list is refreshed per activation and only the
/// selected organization id is persisted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub business_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub category: String,
    /// Remaining minute balance.
    #[serde(default)]
    pub minutes: f64,
    #[serde(default)]
    pub role_id: i64,
}
