// GitHub API HTTP client.
// Handles authentication headers and response status translation.

use log::debug;
use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Deserialize;

use crate::error::{CacheError, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Error body returned by the GitHub REST API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// GitHub API client with default authentication headers.
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHub client with the given token.
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| CacheError::Other(e.to_string()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("gh-cache"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(CacheError::Api)?;

        Ok(Self { client })
    }

    /// Create a client from the GITHUB_TOKEN (or GH_TOKEN) environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .map_err(|_| CacheError::MissingToken)?;
        Self::new(&token)
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(CacheError::Api)?;

        Self::check_response(response).await
    }

    /// Check response status, turning non-success statuses into errors that
    /// carry the server's message.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);

        Err(CacheError::HttpStatus {
            status: status.as_u16(),
            message,
        })
    }
}
