use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A bare repository found while scanning a root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BareRepo {
    /// Absolute path of the repository directory
    pub path: PathBuf,
    /// Directory name, used as the repository's name in routes
    pub name: String,
}
