//! REST API helpers for the boards endpoint.
//!
//! `BoardsApi` is the seam the fetch action talks to. `HttpBoardsApi` is the
//! `reqwest` implementation; tests substitute their own.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is reported as an `ApiError` with the transport detail
//! attached. Callers decide how much of it reaches the user.

use std::collections::HashSet;
use std::time::Duration;

use super::types::Board;
use crate::config::ClientConfig;

/// Path of the board collection resource.
pub const API_BOARDS: &str = "/api/boards";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by boards API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body was not a JSON array of boards with unique ids and
    /// non-empty names.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599 })
    }
}

// =============================================================================
// SEAM
// =============================================================================

/// Source of the board list.
#[async_trait::async_trait]
pub trait BoardsApi: Send + Sync {
    /// Fetch every board visible to the current user, in server order.
    async fn fetch_boards(&self) -> Result<Vec<Board>, ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpBoardsApi {
    http: reqwest::Client,
    boards_url: String,
}

impl HttpBoardsApi {
    /// Build a client for the API rooted at `config.api_base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, boards_url: boards_endpoint(&config.api_base_url) })
    }

    #[must_use]
    pub fn boards_url(&self) -> &str {
        &self.boards_url
    }
}

#[async_trait::async_trait]
impl BoardsApi for HttpBoardsApi {
    async fn fetch_boards(&self) -> Result<Vec<Board>, ApiError> {
        let response = self
            .http
            .get(&self.boards_url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        parse_boards(&text)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn boards_endpoint(base_url: &str) -> String {
    format!("{}{API_BOARDS}", base_url.trim_end_matches('/'))
}

fn parse_boards(json: &str) -> Result<Vec<Board>, ApiError> {
    let boards: Vec<Board> = serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    validate_boards(&boards)?;
    Ok(boards)
}

fn validate_boards(boards: &[Board]) -> Result<(), ApiError> {
    let mut seen = HashSet::with_capacity(boards.len());
    for board in boards {
        if board.name.is_empty() {
            return Err(ApiError::Parse(format!("board {} has an empty name", board.id)));
        }
        if !seen.insert(board.id) {
            return Err(ApiError::Parse(format!("duplicate board id {}", board.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
