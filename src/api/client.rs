//! HTTP client for the remote board API.
//!
//! The endpoint is expected to answer a single GET with a JSON body
//! shaped `{ "tickets": [...], "users": [...] }`. Transport failures
//! and non-2xx statuses are treated uniformly as a load failure.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::{CorkboardError, Result};
use crate::types::{Ticket, User};

/// Raw response body as the endpoint serves it.
#[derive(Debug, Deserialize)]
pub(crate) struct BoardPayload {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// Normalized, immutable result of one successful load.
///
/// Tickets keep their API order and are shared by `Arc`; the view
/// transform references them without copying. The user map is built
/// once and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct BoardData {
    pub tickets: Arc<Vec<Arc<Ticket>>>,
    pub users: Arc<HashMap<String, User>>,
}

impl BoardData {
    pub(crate) fn from_payload(payload: BoardPayload) -> Self {
        let tickets: Vec<Arc<Ticket>> = payload.tickets.into_iter().map(Arc::new).collect();

        let mut users = HashMap::with_capacity(payload.users.len());
        for user in payload.users {
            users.insert(user.id.clone(), user);
        }

        Self {
            tickets: Arc::new(tickets),
            users: Arc::new(users),
        }
    }

    /// Look up a user record by a ticket's `user_id`.
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Client for the board endpoint.
pub struct ApiClient {
    client: Client,
    endpoint: Url,
}

impl ApiClient {
    /// Create a client for the given endpoint.
    ///
    /// Configures the HTTP client with a 30s connect timeout and 60s
    /// total timeout.
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Create a client from configuration (env override, config file,
    /// built-in default, in that order).
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoint_url()?)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the board snapshot.
    ///
    /// Issues exactly one request. The caller decides when a new load
    /// lifetime starts; this method never retries on its own.
    pub async fn fetch_board(&self) -> Result<BoardData> {
        tracing::debug!(endpoint = %self.endpoint, "fetching board snapshot");

        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorkboardError::Api(format!(
                "board request failed with status {}",
                status
            )));
        }

        let payload: BoardPayload = response
            .json()
            .await
            .map_err(|e| CorkboardError::Api(format!("malformed board response: {}", e)))?;

        tracing::debug!(
            tickets = payload.tickets.len(),
            users = payload.users.len(),
            "board snapshot loaded"
        );

        Ok(BoardData::from_payload(payload))
    }
}
