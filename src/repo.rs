// Repository resolution.
// Parses explicit OWNER/REPO arguments and falls back to the environment or
// the local git remote.

use std::fmt;
use std::process::Command;
use std::str::FromStr;

use log::debug;

use crate::error::{CacheError, Result};

/// A GitHub repository addressed by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub owner: String,
    pub name: String,
}

impl Repo {
    /// Resolve the target repository: an explicit argument wins, then the
    /// GH_REPO environment variable, then the origin remote of the current
    /// git checkout.
    pub fn resolve(flag: Option<&str>) -> Result<Self> {
        if let Some(spec) = flag {
            return spec.parse();
        }

        match std::env::var("GH_REPO") {
            Ok(spec) if !spec.is_empty() => return spec.parse(),
            _ => {}
        }

        Self::from_git_remote()
    }

    fn from_git_remote() -> Result<Self> {
        let output = Command::new("git")
            .args(["remote", "get-url", "origin"])
            .output()
            .map_err(|e| CacheError::RepoResolution(e.to_string()))?;

        if !output.status.success() {
            return Err(CacheError::RepoResolution(
                "no origin remote found".to_string(),
            ));
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("resolving repository from remote {}", url);
        parse_remote_url(&url).ok_or_else(|| {
            CacheError::RepoResolution(format!("could not parse remote url \"{}\"", url))
        })
    }
}

impl FromStr for Repo {
    type Err = CacheError;

    /// Accepts `OWNER/REPO` and `HOST/OWNER/REPO`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        let (owner, name) = match parts.as_slice() {
            [owner, name] => (*owner, *name),
            [_host, owner, name] => (*owner, *name),
            _ => return Err(CacheError::InvalidRepo(s.to_string())),
        };

        if owner.is_empty() || name.is_empty() {
            return Err(CacheError::InvalidRepo(s.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse an SSH or HTTPS git remote URL into owner and name.
fn parse_remote_url(url: &str) -> Option<Repo> {
    let path = if let Some(rest) = url.strip_prefix("git@") {
        rest.split_once(':')?.1
    } else {
        let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
        rest.split_once('/')?.1
    };

    let path = path.strip_suffix(".git").unwrap_or(path);
    let (owner, name) = path.split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }

    Some(Repo {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}
