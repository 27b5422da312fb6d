use git2::Repository;
use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::{Commit, Signature};

/// An open bare repository.
///
/// Opened per call and dropped when the call returns, which releases every
/// engine handle it owns on success and error paths alike.
pub struct GitRepository {
    repo: Repository,
    path: PathBuf,
}

impl GitRepository {
    /// Open `path` as a bare repository. The directory must itself be a
    /// git directory; no parent discovery takes place.
    pub fn open_bare<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open_bare(path)?;

        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn with_repo<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Repository) -> Result<T>,
    {
        f(&self.repo)
    }
}

/// Map a repository name taken from a route onto `root`.
///
/// The name must be a single ordinary path component so it cannot point
/// outside the root.
pub fn resolve_repo_path<P: AsRef<Path>>(root: P, name: &str) -> Result<PathBuf> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(root.as_ref().join(part)),
        _ => Err(AppError::InvalidPath(name.to_string())),
    }
}

pub fn commit_to_record(commit: &git2::Commit) -> Commit {
    let parents: Vec<String> = commit.parent_ids().map(|id| id.to_string()).collect();
    let time = commit.author().when();

    Commit {
        hash: commit.id().to_string(),
        parent_hash: parents.first().cloned().unwrap_or_default(),
        parents,
        tree_id: commit.tree_id().to_string(),
        message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        author: signature_to_record(&commit.author()),
        committer: signature_to_record(&commit.committer()),
        timestamp: time.seconds(),
        offset_minutes: time.offset_minutes(),
    }
}

fn signature_to_record(signature: &git2::Signature) -> Signature {
    Signature {
        name: String::from_utf8_lossy(signature.name_bytes()).into_owned(),
        email: String::from_utf8_lossy(signature.email_bytes()).into_owned(),
    }
}
