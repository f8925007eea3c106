use std::env;
use std::time::Duration;

use reqwest::Client;
use tracing::warn;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the server lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `NURA_BASE_URL` and `NURA_HTTP_TIMEOUT_SECS`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the default base URL cannot be parsed.
    pub fn from_env() -> Result<Self, url::ParseError> {
        let from_env = env::var("NURA_BASE_URL").ok().and_then(|raw| {
            let parsed = parse_base_url(&raw);
            if parsed.is_none() {
                warn!(%raw, "ignoring invalid NURA_BASE_URL");
            }
            parsed
        });
        let base_url = match from_env {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let mut config = Self::new(base_url);
        if let Some(secs) = env::var("NURA_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the TLS backend cannot be initialised.
    pub fn http_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder().timeout(self.timeout).build()
    }

    /// `base_url` joined with `path`, without doubling slashes.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Parse a base URL, accepting it with or without a trailing slash.
#[must_use]
pub fn parse_base_url(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let url = Url::parse(trimmed).ok()?;
    if url.cannot_be_a_base() {
        return None;
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig::new(Url::parse("http://school.test/").unwrap());
        assert_eq!(
            config.endpoint("/api/performance/s1"),
            "http://school.test/api/performance/s1"
        );
    }

    #[test]
    fn rejects_relative_and_empty_base() {
        assert!(parse_base_url("").is_none());
        assert!(parse_base_url("school.test/api").is_none());
        assert!(parse_base_url("mailto:office@school.test").is_none());
        assert!(parse_base_url("https://school.test").is_some());
    }
}
