// GitHub API response types.
// Defines structs for deserializing Actions cache API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored Actions cache entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionsCache {
    pub id: u64,
    pub key: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub size_in_bytes: u64,
    pub version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

/// Paginated response from the cache list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachesResponse {
    pub total_count: u64,
    pub actions_caches: Vec<ActionsCache>,
}
