use git2::Sort;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::git::repository::{GitRepository, commit_to_record};
use crate::models::Commit;

/// 1-based page of history, converted to the walker's `skip`/`max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// Commits to skip before this page. Page 0 is treated as page 1.
    pub fn skip(&self) -> usize {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }

    /// A page that came back short is the end of history. A zero-sized
    /// page never advances, so it is always the last one.
    pub fn is_last(&self, returned: usize) -> bool {
        returned < self.size || self.size == 0
    }
}

impl GitRepository {
    /// Walk ancestors of `start_ref`, newest first, skipping `skip` commits
    /// and returning at most `max`.
    ///
    /// The walk follows every parent of a merge, while each record only
    /// names the first parent in `parent_hash` (all of them are in `parents`).
    pub fn commits(&self, start_ref: &str, max: usize, skip: usize) -> Result<Vec<Commit>> {
        if max == 0 {
            return Ok(Vec::new());
        }

        self.with_repo(|repo| {
            let start = repo.revparse_single(start_ref)?.peel_to_commit()?;

            let mut revwalk = repo.revwalk()?;
            revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
            revwalk.push(start.id())?;

            // Skipped commits still go through `?` so a broken walk is
            // reported instead of yielding a short page.
            let mut commits = Vec::with_capacity(max.min(64));
            for (index, oid) in revwalk.enumerate() {
                let oid = oid?;
                if index < skip {
                    continue;
                }
                commits.push(commit_to_record(&repo.find_commit(oid)?));
                if commits.len() == max {
                    break;
                }
            }

            debug!(
                path = %self.path().display(),
                start_ref,
                skip,
                max,
                count = commits.len(),
                "walked history"
            );
            Ok(commits)
        })
    }
}

/// Open `repo_path` and walk one page of history from `start_ref`.
pub fn get_commits<P: AsRef<Path>>(
    repo_path: P,
    start_ref: &str,
    max: usize,
    skip: usize,
) -> Result<Vec<Commit>> {
    if max == 0 {
        return Ok(Vec::new());
    }
    GitRepository::open_bare(repo_path)?.commits(start_ref, max, skip)
}
