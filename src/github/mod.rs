// GitHub REST API integration.
// Client, typed endpoints, and response types for the Actions cache API.

mod client;
mod endpoints;
mod types;

pub use client::GitHubClient;
pub use endpoints::ListCachesQuery;
pub use types::{ActionsCache, CachesResponse};
