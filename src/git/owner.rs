use git2::ConfigLevel;
use libgit2_sys as raw;
use std::path::Path;
use tracing::debug;

use crate::error::{GitError, Result};
use crate::git::repository::GitRepository;

/// Configuration key holding the owner, shared with gitweb and cgit.
pub const OWNER_KEY: &str = "gitweb.owner";

/// Longest owner string returned, in bytes.
pub const OWNER_CAPACITY: usize = 256;

impl GitRepository {
    /// Owner recorded in the repository's own config. Global and system
    /// configuration are not consulted.
    pub fn owner(&self) -> Result<String> {
        self.with_repo(|repo| {
            let config = repo.config()?.open_level(ConfigLevel::Local)?;
            let owner = config.get_string(OWNER_KEY)?;

            if owner.is_empty() {
                return Err(GitError::not_found(
                    raw::GIT_ERROR_CONFIG,
                    &format!("config value '{}' is empty", OWNER_KEY),
                )
                .into());
            }

            debug!(path = %self.path().display(), owner = %owner, "resolved owner");
            Ok(truncate(&owner, OWNER_CAPACITY).to_string())
        })
    }
}

/// Open `repo_path` and read its owner.
pub fn get_repo_owner<P: AsRef<Path>>(repo_path: P) -> Result<String> {
    GitRepository::open_bare(repo_path)?.owner()
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::fixtures;

    fn set_owner(repo: &git2::Repository, owner: &str) {
        repo.config()
            .unwrap()
            .open_level(ConfigLevel::Local)
            .unwrap()
            .set_str(OWNER_KEY, owner)
            .unwrap();
    }

    #[test]
    fn reads_configured_owner() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = fixtures::init_bare(tmp.path());
        set_owner(&repo, "Lauri Hietala <lauri@example.com>");

        let owner = get_repo_owner(tmp.path()).unwrap();
        assert_eq!(owner, "Lauri Hietala <lauri@example.com>");
    }

    #[test]
    fn missing_owner_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        fixtures::init_bare(tmp.path());

        let err = get_repo_owner(tmp.path()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_owner_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = fixtures::init_bare(tmp.path());
        set_owner(&repo, "");

        let err = get_repo_owner(tmp.path()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn owner_whitespace_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = fixtures::init_bare(tmp.path());
        set_owner(&repo, "  Ada Author  ");

        assert_eq!(get_repo_owner(tmp.path()).unwrap(), "  Ada Author  ");
    }

    #[test]
    fn long_owner_with_leading_space_keeps_capacity() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = fixtures::init_bare(tmp.path());
        set_owner(&repo, &format!(" {}", "o".repeat(OWNER_CAPACITY)));

        let owner = get_repo_owner(tmp.path()).unwrap();
        assert_eq!(owner.len(), OWNER_CAPACITY);
        assert!(owner.starts_with(' '));
    }

    #[test]
    fn long_owner_is_truncated() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = fixtures::init_bare(tmp.path());
        set_owner(&repo, &"o".repeat(OWNER_CAPACITY + 50));

        let owner = get_repo_owner(tmp.path()).unwrap();
        assert_eq!(owner.len(), OWNER_CAPACITY);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = format!("{}é", "a".repeat(OWNER_CAPACITY - 1));
        assert_eq!(truncate(&s, OWNER_CAPACITY), "a".repeat(OWNER_CAPACITY - 1));
        assert_eq!(truncate("short", OWNER_CAPACITY), "short");
    }

    #[test]
    fn missing_repository_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(get_repo_owner(tmp.path().join("none.git")).is_err());
    }
}
