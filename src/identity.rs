//! Repository identity resolution from git metadata.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ResolutionError;
use crate::ports::GitRepo;

lazy_static! {
    // origin\t<scheme>://[user@]host[:port]/owner/repo.git
    // origin\t[user@]host:owner/repo.git
    static ref ORIGIN_REMOTE_RE: Regex = Regex::new(
        r"origin\t(?:[A-Za-z][A-Za-z0-9+.-]*://[^/\s]+/|[^\s:/]+:)([^/\s]+)/([^/\s]+)\.git(?:\s|$)"
    )
    .expect("origin remote regex");
}

/// Who built what: the owner, repository name and commit of the checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    /// Full hexadecimal SHA of HEAD.
    pub commit_hash: String,
    /// Account or organization owning the repository.
    pub owner: String,
    /// Repository name without the `.git` extension.
    pub repo_name: String,
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo_name, self.commit_hash)
    }
}

/// Resolve the identity of the checkout behind `git`.
///
/// Only the last line of each command's output is inspected. With several
/// remotes configured, `git remote -v` must list `origin` last.
///
/// # Errors
///
/// Returns a [`ResolutionError`] when either git query fails or the last
/// remote line is not a recognizable `origin` URL.
pub fn resolve(git: &dyn GitRepo) -> Result<RepositoryIdentity, ResolutionError> {
    let head = git.rev_parse_head().map_err(|e| ResolutionError::Head(e.to_string()))?;
    let commit_hash = last_line(&head).trim().to_string();
    if commit_hash.is_empty() {
        return Err(ResolutionError::Head("git rev-parse HEAD printed nothing".into()));
    }

    let remotes = git.list_remotes().map_err(|e| ResolutionError::Repository(e.to_string()))?;
    let (owner, repo_name) = parse_origin(last_line(&remotes))
        .ok_or_else(|| ResolutionError::UnrecognizedRemote { output: remotes.clone() })?;

    let identity = RepositoryIdentity { commit_hash, owner, repo_name };
    log::debug!("resolved repository identity {identity}");
    Ok(identity)
}

/// Extract `(owner, repo)` from a single `git remote -v` line.
#[must_use]
pub fn parse_origin(line: &str) -> Option<(String, String)> {
    let caps = ORIGIN_REMOTE_RE.captures(line)?;
    Some((caps.get(1)?.as_str().to_string(), caps.get(2)?.as_str().to_string()))
}

fn last_line(output: &str) -> &str {
    output.trim_end().lines().last().unwrap_or("")
}
