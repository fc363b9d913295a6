// Backend client configuration

/// Transport timeout ceiling in seconds; a round trip older than this
/// produces a failure
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 600;

/// Connection settings for the extraction backend.
///
/// Passed explicitly to the client constructor; request logic never reads
/// ambient environment state.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend, e.g. "https://extractor.example.com"
    pub base_url: String,

    /// Pre-shared credential sent as the X-API-Key header on every request
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Optional SOCKS5/HTTP proxy URL (e.g. "socks5://127.0.0.1:1080")
    pub proxy: Option<String>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            proxy: None,
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }
}
