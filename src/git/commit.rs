use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::git::repository::{GitRepository, commit_to_record};
use crate::models::Commit;

impl GitRepository {
    /// Resolve any revision expression libgit2 understands (full or
    /// abbreviated hash, branch, tag, `HEAD~2`, ...) to a commit.
    pub fn commit(&self, revision: &str) -> Result<Commit> {
        self.with_repo(|repo| {
            let commit = repo.revparse_single(revision)?.peel_to_commit()?;
            debug!(revision, hash = %commit.id(), "resolved commit");
            Ok(commit_to_record(&commit))
        })
    }
}

/// Open `repo_path` and resolve `revision` to one commit.
pub fn get_commit<P: AsRef<Path>>(repo_path: P, revision: &str) -> Result<Commit> {
    GitRepository::open_bare(repo_path)?.commit(revision)
}
