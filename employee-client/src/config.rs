//! Client configuration

/// Client configuration for connecting to the employee server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL without the `/api` suffix (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
    }
}
