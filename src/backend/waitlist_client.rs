//! src/backend/waitlist_client.rs

use std::fmt::Formatter;

use anyhow::Context;
use reqwest::{Client, StatusCode};

use crate::config::WaitlistBackendSettings;
use crate::domain::{ListingEnvelope, WaitlistEmail, WaitlistEntry};
use crate::utils::error_helpers::error_chain_fmt;

#[derive(serde::Serialize)]
struct JoinRequest<'a> {
    email: &'a str,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    /// The backend already holds this address (409 Conflict).
    AlreadyListed,
}

#[derive(thiserror::Error)]
pub enum JoinError {
    #[error("The waitlist backend answered with an unexpected status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("The waitlist backend rejected the submission with status {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Failed to reach the waitlist backend")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for JoinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(thiserror::Error)]
pub enum ListError {
    /// The backend answered but reported `success: false`.
    #[error("{0}")]
    Backend(String),

    #[error("Failed to fetch the waitlist from the backend")]
    Unreachable(#[from] anyhow::Error),
}

impl std::fmt::Debug for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// HTTP client for the external waitlist service.
pub struct WaitlistClient {
    http_client: Client,
    base_url: String,
}

impl WaitlistClient {
    pub fn new(settings: &WaitlistBackendSettings) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[tracing::instrument(
        name = "Submitting an email to the waitlist backend",
        skip(self, email),
        fields(waitlist_email = %email)
    )]
    pub async fn join(&self, email: &WaitlistEmail) -> Result<JoinOutcome, JoinError> {
        let url = format!("{}/api/v1/waitlist/join", self.base_url);
        let request_body = JoinRequest {
            email: email.as_ref(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(JoinOutcome::Joined),
            StatusCode::CONFLICT => Ok(JoinOutcome::AlreadyListed),
            s if s.is_client_error() || s.is_server_error() => {
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.message)
                    .filter(|m| !m.trim().is_empty());
                Err(JoinError::Rejected { status, message })
            }
            s => Err(JoinError::UnexpectedStatus(s)),
        }
    }

    #[tracing::instrument(name = "Fetching the waitlist from the backend", skip(self))]
    pub async fn list(&self) -> Result<Vec<WaitlistEntry>, ListError> {
        let url = format!("{}/api/v1/waitlist/mails", self.base_url);

        let envelope = self
            .http_client
            .get(&url)
            .send()
            .await
            .context("Failed to send the listing request")?
            .error_for_status()
            .context("The listing request failed")?
            .json::<ListingEnvelope>()
            .await
            .context("Failed to decode the listing response")?;

        if !envelope.success {
            return Err(ListError::Backend(
                envelope
                    .message
                    .unwrap_or_else(|| "Failed to fetch emails".to_string()),
            ));
        }

        tracing::info!(count = envelope.data.len(), "Fetched waitlist entries");
        Ok(envelope.data)
    }
}
