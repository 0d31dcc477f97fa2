// CLI argument definitions using clap derive.

use clap::{Parser, Subcommand, ValueEnum};

/// List GitHub Actions caches for a repository.
#[derive(Parser, Debug)]
#[command(name = "gh-cache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target repository in OWNER/REPO form (defaults to the current repo)
    #[arg(short = 'R', long, global = true)]
    pub repo: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the Actions caches in a repository
    List(ListArgs),
}

/// Arguments for the list command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter caches by the branch or full ref that created them
    #[arg(short = 'B', long)]
    pub branch: Option<String>,

    /// Filter caches by key prefix
    #[arg(long)]
    pub key: Option<String>,

    /// Maximum number of caches to fetch
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: u32,

    /// Field used for server-side ordering
    #[arg(long, value_enum, default_value = "last-accessed")]
    pub sort: SortField,

    /// Sort direction
    #[arg(long, value_enum, default_value = "desc")]
    pub order: SortOrder,
}

/// Sort field accepted by the cache list endpoint.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    LastAccessed,
    Size,
    Created,
}

impl SortField {
    pub fn as_param(self) -> &'static str {
        match self {
            SortField::LastAccessed => "last_accessed_at",
            SortField::Size => "size_in_bytes",
            SortField::Created => "created_at",
        }
    }
}

/// Sort direction accepted by the cache list endpoint.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["gh-cache", "list"]).unwrap();
        let Commands::List(args) = cli.command;
        assert_eq!(args.limit, 30);
        assert_eq!(args.sort, SortField::LastAccessed);
        assert_eq!(args.order, SortOrder::Desc);
        assert!(args.branch.is_none());
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::try_parse_from([
            "gh-cache", "list", "-R", "actions/cache", "-B", "main", "--limit", "100", "--sort",
            "size", "--order", "asc",
        ])
        .unwrap();
        assert_eq!(cli.repo.as_deref(), Some("actions/cache"));
        let Commands::List(args) = cli.command;
        assert_eq!(args.branch.as_deref(), Some("main"));
        assert_eq!(args.limit, 100);
        assert_eq!(args.sort.as_param(), "size_in_bytes");
        assert_eq!(args.order.as_param(), "asc");
    }

    #[test]
    fn test_limit_out_of_range() {
        assert!(Cli::try_parse_from(["gh-cache", "list", "--limit", "101"]).is_err());
        assert!(Cli::try_parse_from(["gh-cache", "list", "--limit", "0"]).is_err());
    }
}
