//! HTTP client with request pacing for the stagemarkt query-hub
//!
//! One configured `reqwest` client per instance, browser-like headers and
//! a minimum interval between consecutive requests.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};

use crate::error::{Result, StagemarktError};
use crate::pagination::MAX_PAGE_SIZE;
use crate::url::{BASE_URL, build_endpoint_url};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the query-hub API (default: the live service)
    pub base_url: String,
    /// Maximum requests per second, `<= 0` disables pacing (default: 1.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Page size cap for paginated searches (default: 20)
    pub max_page_size: usize,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            requests_per_second: 1.0,
            timeout_secs: 30,
            max_page_size: MAX_PAGE_SIZE,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Rate limiter to control request frequency
///
/// Ensures requests are spaced at least `min_interval` apart.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    ///
    /// # Arguments
    /// * `requests_per_second` - Maximum number of requests allowed per second;
    ///   zero, negative or non-finite values disable waiting
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = if requests_per_second.is_finite() && requests_per_second > 0.0 {
            Duration::try_from_secs_f64(1.0 / requests_per_second).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };
        let now = Instant::now();
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(now.checked_sub(min_interval).unwrap_or(now))),
        }
    }

    /// Acquire permission to make a request
    ///
    /// If called before the minimum interval has passed since the last request,
    /// this method will sleep until the interval has elapsed.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            let wait_time = self.min_interval - elapsed;
            sleep(wait_time).await;
        }

        *last = Instant::now();
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// HTTP client for the query-hub endpoints
///
/// Handles all HTTP communication, including:
/// - Request pacing through [`RateLimiter`]
/// - Browser-like headers (User-Agent, Accept-Language, Referer)
/// - Mapping of error statuses to [`StagemarktError`]
pub struct QueryHubClient {
    client: reqwest::Client,
    rate_limiter: RateLimiter,
    base_url: String,
}

impl QueryHubClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("nl-NL,nl;q=0.9,en;q=0.8"),
        );
        headers.insert(REFERER, HeaderValue::from_static("https://stagemarkt.nl/"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(StagemarktError::HttpError)?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(config.requests_per_second),
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the body of an endpoint
    ///
    /// # Arguments
    /// * `path` - Endpoint path (e.g., "/education-search")
    /// * `params` - Query parameters, repeated keys allowed
    ///
    /// # Errors
    /// - `HttpError` - Network errors
    /// - `RateLimited` - Server returned 429
    /// - `NotFound` - Server returned 404
    /// - `UnexpectedStatus` - Any other non-success status
    pub async fn get(&self, path: &str, params: &[(String, String)]) -> Result<String> {
        let url = build_endpoint_url(&self.base_url, path);

        self.rate_limiter.acquire().await;
        debug!(endpoint = path, params = params.len(), "GET");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(StagemarktError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(StagemarktError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StagemarktError::NotFound(url));
        }

        if !status.is_success() {
            return Err(StagemarktError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        response.text().await.map_err(StagemarktError::HttpError)
    }

    /// Get a reference to the rate limiter (for testing)
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_creation() {
        let limiter = RateLimiter::new(2.0);
        assert_eq!(limiter.min_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_rate_limiter_interval_calculation() {
        let limiter = RateLimiter::new(4.0);
        assert_eq!(limiter.min_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_rate_limiter_disabled() {
        assert_eq!(RateLimiter::new(0.0).min_interval(), Duration::ZERO);
        assert_eq!(RateLimiter::new(-1.0).min_interval(), Duration::ZERO);
        assert_eq!(RateLimiter::new(f64::NAN).min_interval(), Duration::ZERO);
    }

    #[test]
    fn test_rate_limiter_tiny_rate_saturates() {
        let limiter = RateLimiter::new(1e-20);
        assert_eq!(limiter.min_interval(), Duration::MAX);
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://stagemarkt.nl/api/query-hub");
        assert_eq!(config.requests_per_second, 1.0);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_page_size, 20);
    }

    #[test]
    fn test_client_creation() {
        let client = QueryHubClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            requests_per_second: 10.0,
            timeout_secs: 5,
            ..Default::default()
        };
        let client = QueryHubClient::with_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
        assert_eq!(client.rate_limiter().min_interval(), Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_rate_limiter_acquire() {
        let limiter = RateLimiter::new(10.0); // 100ms interval

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        let elapsed = start.elapsed();

        // Second acquire should wait at least 100ms
        assert!(elapsed >= Duration::from_millis(90)); // Allow small tolerance
    }

    #[tokio::test]
    async fn test_disabled_rate_limiter_does_not_wait() {
        let limiter = RateLimiter::new(0.0);

        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
