//! Session, profile, and connectivity types.

use serde::{Deserialize, Serialize};

/// User profile as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
}

impl UserProfile {
    /// Display name assembled from first/last name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// A named permission attached to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub permission: String,
}

/// A role granted to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub role_name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// The authenticated session as issued by the login endpoint.
///
/// Mutated only on login, OTP verification, organization selection, and
/// logout; destroyed (cleared) on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub access_token: String,
    pub user_data: UserProfile,
    #[serde(default)]
    pub role: Vec<Role>,
}

/// Network reachability snapshot reported by the connectivity oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connectivity {
    pub connected: bool,
    pub internet_reachable: bool,
}

impl Connectivity {
    /// Fully online: a link is up and the internet is reachable over it.
    #[must_use]
    pub const fn is_online(self) -> bool {
        self.connected && self.internet_reachable
    }

    /// Convenience constructor for the online state.
    #[must_use]
    pub const fn online() -> Self {
        Self { connected: true, internet_reachable: true }
    }

    /// Convenience constructor for the offline state.
    #[must_use]
    pub const fn offline() -> Self {
        Self { connected: false, internet_reachable: false }
    }
}
