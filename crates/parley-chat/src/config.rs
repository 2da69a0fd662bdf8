use parley_types::{DEFAULT_ENDPOINT, INVOKE_PATH};
use url::Url;

use crate::error::ConfigError;

/// Where exchanges are sent and how loudly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    verbose: bool,
}

impl ClientConfig {
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: normalize_endpoint(endpoint)?,
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Base URL without a trailing slash
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Full URL of the invoke route
    pub fn invoke_url(&self) -> String {
        format!("{}{}", self.endpoint, INVOKE_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            verbose: false,
        }
    }
}

/// Require an http(s) URL with a host, then drop surrounding whitespace and trailing slashes
pub fn normalize_endpoint(endpoint: &str) -> Result<String, ConfigError> {
    let trimmed = endpoint.trim();
    let invalid = || ConfigError::InvalidEndpoint(endpoint.to_string());

    let parsed = Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
