//! Read-only inspection of bare git repositories.
//!
//! Call [`git::engine::init`] once before anything else and
//! [`git::engine::shutdown`] once after the last call has returned.

pub mod error;
pub mod git;
pub mod models;

pub use error::{AppError, GitError, Result};
pub use git::{
    EngineOptions, GitRepository, Page, get_commit, get_commits, get_references, get_repo_owner,
    list_bare_repos, resolve_repo_path,
};
pub use models::{BareRepo, Commit, Reference, Signature};
