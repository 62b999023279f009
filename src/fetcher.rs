// src/fetcher.rs
use crate::config::ScrapingConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Why a fetch produced no page. A value, not a panic: callers log it and
/// move on to the next target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Non-2xx response
    Status(u16),
    Timeout,
    Network(String),
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchFailure::Status(code) => write!(f, "HTTP error: {}", code),
            FetchFailure::Timeout => write!(f, "request timed out"),
            FetchFailure::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

impl std::error::Error for FetchFailure {}

/// Single-shot page fetcher with browser-like headers. No retries, no
/// backoff; politeness is a jittered serial delay between requests.
pub struct PageFetcher {
    client: Client,
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl PageFetcher {
    pub fn new(config: &ScrapingConfig) -> crate::models::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            delay_min_ms: config.delay_min_ms,
            delay_max_ms: config.delay_max_ms,
        })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchFailure::Timeout
            } else {
                FetchFailure::Network(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(FetchFailure::Status(response.status().as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }

    /// Sleep a uniform-random duration inside the configured window. Called
    /// between sequential requests to stay under anti-bot radar.
    pub async fn polite_pause(&self) {
        let delay = jittered_delay_ms(self.delay_min_ms, self.delay_max_ms);
        debug!("Pausing {}ms before next request", delay);
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

fn jittered_delay_ms(min_ms: u64, max_ms: u64) -> u64 {
    if max_ms <= min_ms {
        return min_ms;
    }
    fastrand::u64(min_ms..=max_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_inside_window() {
        for _ in 0..200 {
            let delay = jittered_delay_ms(1000, 3000);
            assert!((1000..=3000).contains(&delay));
        }
    }

    #[test]
    fn degenerate_window_is_fixed_delay() {
        assert_eq!(jittered_delay_ms(500, 500), 500);
        assert_eq!(jittered_delay_ms(500, 100), 500);
    }

    #[test]
    fn failure_messages_name_the_cause() {
        assert_eq!(FetchFailure::Status(404).to_string(), "HTTP error: 404");
        assert_eq!(FetchFailure::Timeout.to_string(), "request timed out");
    }
}
