//! HTTP client for the observatory listing page.

use std::time::Duration;

use async_trait::async_trait;
use encoding_rs::WINDOWS_1254;
use kandilli_common::{Error, Event, Result};

use crate::parse::{extract_pre, parse_listing};
use crate::source::EventSource;

/// Recent-events listing of the Kandilli Observatory.
pub const DEFAULT_UPSTREAM_URL: &str = "http://www.koeri.boun.edu.tr/scripts/lst1.asp";

/// Live client fetching the upstream listing page.
///
/// Stateless apart from the connection pool: every [`events`] call performs
/// a full fetch, decode and parse of the page.
///
/// [`events`]: EventSource::events
pub struct KandilliClient {
    http: reqwest::Client,
    url: String,
}

impl KandilliClient {
    /// Create a client for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url: url.into() })
    }

    /// Fetch the page and decode it from windows-1254.
    ///
    /// The listing carries Turkish place names outside ASCII, so the body
    /// must be decoded from the legacy charset rather than read as UTF-8.
    async fn fetch_document(&self) -> Result<String> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!("upstream returned {status}")));
        }

        let body = response.bytes().await?;
        let (text, _, _) = WINDOWS_1254.decode(&body);
        Ok(text.into_owned())
    }
}

#[async_trait]
impl EventSource for KandilliClient {
    async fn events(&self) -> Result<Vec<Event>> {
        let html = self.fetch_document().await?;
        let text = extract_pre(&html)?;
        Ok(parse_listing(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = KandilliClient::new(DEFAULT_UPSTREAM_URL, Duration::from_secs(30));
        assert!(client.is_ok());
    }

    #[test]
    fn test_windows_1254_round_trip() {
        // 0xDD is 'İ' in windows-1254; invalid as UTF-8.
        let raw = [0xDD, b'Z', b'M', b'I', b'R'];
        let (text, _, _) = WINDOWS_1254.decode(&raw);
        assert_eq!(text, "İZMIR");
    }
}
