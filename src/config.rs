/// Default host for the mobile API family (lists).
pub const DEFAULT_MOBILE_URL: &str = "https://mobile.reverehq.com";
/// Default host for the calling API family. Stored for completeness; no
/// endpoint in this crate calls it.
pub const DEFAULT_CALL_URL: &str = "https://calling.reverehq.com";
/// Default host for the sync API family (authentication, people).
pub const DEFAULT_SYNC_URL: &str = "https://sync.revmsg.net";

/// Client configuration. Immutable once handed to [`crate::Client::new`].
///
/// Exactly one of `api_key` or `sync_key` must be set for construction to
/// succeed. The retry, timeout and rate-limit fields are stored but have no
/// effect on request handling.
#[derive(Debug, Clone)]
pub struct Config {
    pub mobile_url: String,
    pub call_url: String,
    pub sync_url: String,
    /// Key for the mobile API family.
    pub api_key: Option<String>,
    /// Long-lived key exchanged for a bearer token at construction.
    pub sync_key: Option<String>,
    /// Short-lived token for the sync API family. Usually obtained via the
    /// sync key exchange, but may be supplied directly.
    pub bearer_token: Option<String>,
    pub api_version: String,
    pub retry_count: u32,
    pub retry_delay: u64,
    pub timeout: u64,
    pub wait_on_rate_limit: bool,
}

impl Config {
    pub fn with_api_key(api_key: &str) -> Self {
        Config {
            api_key: Some(api_key.to_string()),
            ..Config::default()
        }
    }

    pub fn with_sync_key(sync_key: &str) -> Self {
        Config {
            sync_key: Some(sync_key.to_string()),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mobile_url: DEFAULT_MOBILE_URL.to_string(),
            call_url: DEFAULT_CALL_URL.to_string(),
            sync_url: DEFAULT_SYNC_URL.to_string(),
            api_key: None,
            sync_key: None,
            bearer_token: None,
            api_version: "v1".to_string(),
            retry_count: 0,
            retry_delay: 3,
            timeout: 60,
            wait_on_rate_limit: true,
        }
    }
}
