//! Domain constants

/// Credential-store key for the bearer token.
pub const KEY_ACCESS_TOKEN: &str = "accessToken";
/// Credential-store key for the serialized user profile.
pub const KEY_USER: &str = "user";
/// Credential-store key for the numeric user id.
pub const KEY_USER_ID: &str = "userId";
/// Credential-store key for the serialized role list.
pub const KEY_ROLE: &str = "role";
/// Credential-store key for the full login session payload.
pub const KEY_LOGIN_SESSION: &str = "loginResponse";
/// Credential-store key for the selected organization id. The only list
/// state persisted client-side.
pub const KEY_SELECTED_ORGANIZATION_ID: &str = "SELECTED_ORGANIZATION_ID";

/// Default page size for call-log fetches.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// Quiet interval a query must hold before a filtered fetch fires.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
/// Minimum query length for a filtered fetch.
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;
/// Remote call timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
