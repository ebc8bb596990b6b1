//! Users API Client
//!
//! The boundary through which user records enter the program, and its
//! reqwest-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DigestError, Result};
use crate::models::{User, UsersResponse};

// == User Source ==
/// Anything that can produce the full collection of user records.
///
/// A fetch either returns every user or fails outright; retries and
/// timeouts are the implementation's business.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>>;
}

// == HTTP User Client ==
/// Fetches users from a JSON endpoint returning `{ "users": [...] }`.
#[derive(Debug, Clone)]
pub struct HttpUserClient {
    /// Users endpoint URL
    api_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl HttpUserClient {
    /// Creates a client for `api_url` with the given per-request timeout.
    ///
    /// # Errors
    /// Returns `FetchFailure` if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_url: api_url.into(),
            client,
        })
    }

    /// Creates a client from the endpoint and timeout in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url.clone(), config.request_timeout())
    }
}

#[async_trait]
impl UserSource for HttpUserClient {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        info!("Fetching users from {}", self.api_url);

        let response = self.client.get(&self.api_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DigestError::FetchFailure(format!(
                "{} returned HTTP {}",
                self.api_url, status
            )));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes", body.len());

        let payload: UsersResponse = serde_json::from_slice(&body)?;
        info!("Fetched {} users", payload.users.len());
        Ok(payload.users)
    }
}
