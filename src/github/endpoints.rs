// GitHub API endpoint functions.
// Typed access to the Actions cache endpoints of the REST API.

use crate::error::Result;
use crate::repo::Repo;

use super::client::GitHubClient;
use super::types::CachesResponse;

/// Query parameters for the cache list endpoint.
#[derive(Debug, Clone)]
pub struct ListCachesQuery {
    /// Full git ref to filter by (e.g. `refs/heads/main`).
    pub ref_name: Option<String>,
    /// Cache key prefix to filter by.
    pub key: Option<String>,
    /// Server-side sort field.
    pub sort: &'static str,
    /// Sort direction, `asc` or `desc`.
    pub direction: &'static str,
    /// Page size, capped at 100 by the API.
    pub per_page: u32,
}

impl GitHubClient {
    /// Get Actions caches for a repository.
    pub async fn get_caches(&self, repo: &Repo, query: &ListCachesQuery) -> Result<CachesResponse> {
        let mut params: Vec<(&str, String)> = vec![
            ("sort", query.sort.to_string()),
            ("direction", query.direction.to_string()),
            ("per_page", query.per_page.to_string()),
        ];
        if let Some(ref_name) = &query.ref_name {
            params.push(("ref", ref_name.clone()));
        }
        if let Some(key) = &query.key {
            params.push(("key", key.clone()));
        }

        let response = self
            .get_with_params(
                &format!("/repos/{}/{}/actions/caches", repo.owner, repo.name),
                &params,
            )
            .await?;
        let caches: CachesResponse = response.json().await?;
        Ok(caches)
    }
}
