//! Bare repository discovery.
//!
//! A directory entry counts as a repository when libgit2 opens it as a bare
//! repository. Hidden entries and plain files are skipped, and the scan never
//! descends below the root.

use std::fs;
use std::path::Path;

use git2::Repository;
use tracing::{debug, instrument};

use crate::error::{GitError, Result};
use crate::models::BareRepo;

/// List at most `max` bare repositories directly under `root`.
///
/// Order follows the directory enumeration. A missing or unreadable root is
/// an error; a readable root without repositories is an empty list.
#[instrument(skip(root), fields(root = %root.as_ref().display()))]
pub fn list_bare_repos<P: AsRef<Path>>(root: P, max: usize) -> Result<Vec<BareRepo>> {
    if max == 0 {
        return Ok(Vec::new());
    }

    let root = root.as_ref();
    let root = fs::canonicalize(root).map_err(|e| {
        GitError::from_io(&format!("failed to resolve '{}'", root.display()), &e)
    })?;
    let entries = fs::read_dir(&root).map_err(|e| {
        GitError::from_io(&format!("failed to read directory '{}'", root.display()), &e)
    })?;

    let mut repos = Vec::new();
    for entry in entries {
        if repos.len() >= max {
            break;
        }

        let entry = entry.map_err(|e| {
            GitError::from_io(&format!("failed to read directory '{}'", root.display()), &e)
        })?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        match Repository::open_bare(&path) {
            Ok(_) => repos.push(BareRepo { path, name }),
            Err(e) => debug!(path = %path.display(), error = %e.message(), "not a bare repository"),
        }
    }

    debug!(count = repos.len(), "scan finished");
    Ok(repos)
}
