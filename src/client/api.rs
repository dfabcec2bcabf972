use async_trait::async_trait;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::client::browser::Filter;
use crate::entities::contact_me::NewContactMessage;

/// A project as the browsing UI sees it. Server responses carry extra
/// bookkeeping fields (`created_at`); those are ignored here. Fields a
/// card can render without are lenient so one sparse record degrades
/// instead of sinking the whole listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("request failed: {_0}")]
    Transport(String),

    #[display("server responded with status {_0}")]
    Status(u16),

    #[display("malformed response body: {_0}")]
    MalformedBody(String),
}

impl std::error::Error for ApiError {}

/// Read side of the portfolio API, as needed by the project browser.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    async fn list_projects(&self, filter: Filter) -> Result<Vec<ProjectRecord>, ApiError>;
}

/// Write side used by the contact page.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    async fn submit_contact(&self, message: &NewContactMessage) -> Result<(), ApiError>;
}

/// HTTP client for the portfolio API. The base URL is always passed in
/// explicitly; nothing here guesses an origin from the environment.
#[derive(Clone)]
pub struct PortfolioApi {
    base: String,
    http: reqwest::Client,
}

impl PortfolioApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        PortfolioApi::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        PortfolioApi { base, http }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }
}

#[async_trait]
impl ProjectDirectory for PortfolioApi {
    async fn list_projects(&self, filter: Filter) -> Result<Vec<ProjectRecord>, ApiError> {
        let url = match filter.category() {
            None => self.endpoint("/projects"),
            Some(category) => format!(
                "{}?category={}",
                self.endpoint("/projects"),
                urlencoding::encode(category)
            ),
        };

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Vec<ProjectRecord>>()
            .await
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}

#[async_trait]
impl ContactGateway for PortfolioApi {
    async fn submit_contact(&self, message: &NewContactMessage) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/contact"))
            .json(message)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(())
    }
}
