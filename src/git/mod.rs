//! Read-only access to bare repositories.
//!
//! Every free function opens the repository it is given, reads, and drops
//! every engine handle before returning. Nothing is cached between calls.
//! - `engine`: process-wide init/shutdown
//! - `scan`: bare repository discovery under a root directory
//! - `refs`: reference listing
//! - `commit`: single revision lookup
//! - `history`: paginated history walk
//! - `owner`: repository owner lookup

pub mod commit;
pub mod engine;
pub mod history;
pub mod owner;
pub mod refs;
pub mod repository;
pub mod scan;

#[cfg(test)]
pub(crate) mod fixtures;

pub use commit::get_commit;
pub use engine::EngineOptions;
pub use history::{Page, get_commits};
pub use owner::get_repo_owner;
pub use refs::get_references;
pub use repository::{GitRepository, resolve_repo_path};
pub use scan::list_bare_repos;
