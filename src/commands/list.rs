// List command implementation.
// Fetches the caches for a repository and pretty-prints them.

use log::debug;

use crate::cli::ListArgs;
use crate::display;
use crate::error::HandledError;
use crate::github::{ActionsCache, GitHubClient, ListCachesQuery};
use crate::repo::Repo;

/// Execute the list command.
pub async fn run_list(repo_flag: Option<&str>, args: &ListArgs) -> Result<(), HandledError> {
    let repo = Repo::resolve(repo_flag)?;
    let client = GitHubClient::from_env()?;

    let query = ListCachesQuery {
        ref_name: args.branch.as_deref().map(expand_ref),
        key: args.key.clone(),
        sort: args.sort.as_param(),
        direction: args.order.as_param(),
        per_page: args.limit,
    };

    debug!("listing caches for {}", repo);
    let response = client
        .get_caches(&repo, &query)
        .await
        .map_err(|e| HandledError::classify(e, "The given repo does not exist."))?;

    if response.total_count == 0 {
        println!("No caches found in {}", repo);
        return Ok(());
    }

    println!("{}", total_size_header(&response.actions_caches));
    println!(
        "Showing {} of {} in {}",
        response.actions_caches.len(),
        display::singular_or_plural(response.total_count, "cache entry", "cache entries"),
        repo
    );
    println!();
    display::print_trimmed_cache_list(&response.actions_caches);

    Ok(())
}

/// Build the total-size header for the fetched caches.
fn total_size_header(caches: &[ActionsCache]) -> String {
    let total: u64 = caches.iter().map(|c| c.size_in_bytes).sum();
    format!(
        "Total caches size {}",
        display::format_cache_size(total as f64)
    )
}

/// Expand a bare branch name into a full ref, leaving full refs alone.
fn expand_ref(branch: &str) -> String {
    if branch.starts_with("refs/") {
        branch.to_string()
    } else {
        format!("refs/heads/{}", branch)
    }
}
