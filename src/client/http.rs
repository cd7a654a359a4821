//! HTTP client for the random-data users endpoint.

use super::response::decode_users;
use super::UserSource;
use crate::error::{FetchErrorKind, Result, UserdeckError};
use crate::model::UserRecord;
use reqwest::blocking::Client;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://random-data-api.com/api/v2";

/// Number of records requested per fetch.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Users API client configuration.
#[derive(Debug, Clone)]
pub struct RandomDataClientConfig {
    /// Base URL, without the `/users` path
    pub api_base: String,
    /// Records requested per fetch
    pub page_size: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for RandomDataClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Blocking client for `GET {api_base}/users?size={page_size}`.
///
/// Performs exactly one request per call; there is no retry.
pub struct RandomDataClient {
    client: Client,
    config: RandomDataClientConfig,
}

fn network_error(msg: &str, err: &reqwest::Error) -> UserdeckError {
    UserdeckError::fetch(msg, FetchErrorKind::Network(err.to_string()))
}

impl RandomDataClient {
    /// Create a new client.
    pub fn new(config: RandomDataClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e))?;

        Ok(Self { client, config })
    }

    /// The full request URL, including the page size query.
    #[must_use]
    pub fn users_url(&self) -> String {
        format!(
            "{}/users?size={}",
            self.config.api_base.trim_end_matches('/'),
            self.config.page_size
        )
    }

    /// Fetch one page of users.
    pub fn request_users(&self) -> Result<Vec<UserRecord>> {
        let url = self.users_url();
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_error("Failed to send users request", &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UserdeckError::fetch(
                format!("GET {url}"),
                FetchErrorKind::Status {
                    status: status.as_u16(),
                },
            ));
        }

        let body = response
            .text()
            .map_err(|e| network_error("Failed to read users response", &e))?;

        decode_users(&body)
    }
}

impl UserSource for RandomDataClient {
    fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        self.request_users()
    }

    fn name(&self) -> &'static str {
        "random-data-api"
    }
}
