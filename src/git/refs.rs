use git2::ObjectType;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::git::repository::GitRepository;
use crate::models::Reference;

impl GitRepository {
    /// Every reference under `refs/`, each peeled to the object it finally
    /// points at: symbolic references are followed and annotated tags are
    /// peeled to their target.
    pub fn references(&self) -> Result<Vec<Reference>> {
        self.with_repo(|repo| {
            let mut references = Vec::new();

            for reference in repo.references()? {
                let reference = reference?;
                let target = reference.peel(ObjectType::Any)?;

                references.push(Reference {
                    hash: target.id().to_string(),
                    name: String::from_utf8_lossy(reference.name_bytes()).into_owned(),
                    shorthand: String::from_utf8_lossy(reference.shorthand_bytes()).into_owned(),
                });
            }

            debug!(path = %self.path().display(), count = references.len(), "listed references");
            Ok(references)
        })
    }
}

/// Open `repo_path` and list its references.
pub fn get_references<P: AsRef<Path>>(repo_path: P) -> Result<Vec<Reference>> {
    GitRepository::open_bare(repo_path)?.references()
}
