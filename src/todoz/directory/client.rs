use crate::config::TodozConfig;
use crate::error::{Result, TodozError};
use crate::model::UserPage;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Outcome of one page fetch.
///
/// `status` is recorded whenever the server answered, including when the answer
/// was an error status or an undecodable body. It is `None` only when no response
/// arrived at all.
#[derive(Debug)]
pub struct PageResponse {
    pub status: Option<u16>,
    pub page: Result<UserPage>,
}

#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl UsersClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &TodozConfig) -> Self {
        Self::new(&config.users_api_url, &config.users_api_key)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET {api_url}?page={page}` with the API key header. No timeout, no retry.
    pub async fn fetch_page(&self, page: u32) -> PageResponse {
        debug!(url = %self.api_url, page, "fetching users");

        let response = match self
            .http
            .get(&self.api_url)
            .query(&[("page", page)])
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, page, "user fetch failed");
                return PageResponse {
                    status: None,
                    page: Err(TodozError::Http(e)),
                };
            }
        };

        let status = response.status();
        debug!(status = status.as_u16(), page, "users response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), %body, "error body");
            warn!(status = status.as_u16(), page, "user fetch rejected");
            return PageResponse {
                status: Some(status.as_u16()),
                page: Err(TodozError::HttpStatus(status.as_u16())),
            };
        }

        let page_result = response.json::<UserPage>().await.map_err(|e| {
            warn!(error = %e, page, "user page undecodable");
            TodozError::Http(e)
        });
        if let Ok(users) = &page_result {
            debug!(count = users.data.len(), total_pages = users.total_pages, "users received");
        }

        PageResponse {
            status: Some(status.as_u16()),
            page: page_result,
        }
    }
}
