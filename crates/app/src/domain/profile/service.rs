//! Profile service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};

use crate::{
    domain::profile::{errors::ProfileServiceError, models::Profile},
    session::Session,
};

/// Authenticated access to the user's saved contact details.
#[automock]
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch the profile for the session's user.
    async fn fetch(&self, session: &Session) -> Result<Profile, ProfileServiceError>;

    /// Save the profile for the session's user, replacing the stored row.
    async fn save(&self, session: &Session, profile: &Profile)
    -> Result<(), ProfileServiceError>;
}

/// HTTP client for the profile service.
#[derive(Debug, Clone)]
pub struct HttpProfileService {
    base_url: String,
    http: Client,
}

impl HttpProfileService {
    /// Create a new client against the given API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }
}

#[async_trait]
impl ProfileService for HttpProfileService {
    async fn fetch(&self, session: &Session) -> Result<Profile, ProfileServiceError> {
        let response = self
            .http
            .get(format!("{}/api/profile", self.base_url))
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(fetch_failure(status, &text));
        }

        Ok(response.json().await?)
    }

    async fn save(
        &self,
        session: &Session,
        profile: &Profile,
    ) -> Result<(), ProfileServiceError> {
        let response = self
            .http
            .post(format!("{}/api/profile", self.base_url))
            .bearer_auth(&session.access_token)
            .json(profile)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(save_failure(status, &text));
        }

        Ok(())
    }
}

/// Map a non-success fetch response onto the error taxonomy.
fn fetch_failure(status: StatusCode, text: &str) -> ProfileServiceError {
    match status {
        StatusCode::UNAUTHORIZED => ProfileServiceError::NotAuthenticated,
        StatusCode::NOT_FOUND => ProfileServiceError::NotFound,
        _ => ProfileServiceError::UnexpectedResponse(format!(
            "profile fetch failed with status {status}: {text}"
        )),
    }
}

/// Saves upsert the row, so there is no missing-row status to map.
fn save_failure(status: StatusCode, text: &str) -> ProfileServiceError {
    match status {
        StatusCode::UNAUTHORIZED => ProfileServiceError::NotAuthenticated,
        _ => ProfileServiceError::UnexpectedResponse(format!(
            "profile save failed with status {status}: {text}"
        )),
    }
}
