use serde::{Deserialize, Serialize};

/// Snapshot of one reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Object id the reference ultimately points to
    pub hash: String,
    /// Fully qualified name, e.g. `refs/heads/main`
    pub name: String,
    /// Display form, e.g. `main`
    pub shorthand: String,
}

impl Reference {
    pub fn is_branch(&self) -> bool {
        self.name.starts_with("refs/heads/")
    }

    pub fn is_tag(&self) -> bool {
        self.name.starts_with("refs/tags/")
    }
}
