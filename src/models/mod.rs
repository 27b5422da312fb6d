//! Plain data records returned by the access layer.
//!
//! These are point-in-time snapshots, serializable for whatever presentation
//! layer renders them.
//! - `repo`: BareRepo (discovered repository)
//! - `commit`: Commit, Signature
//! - `refs`: Reference (branch or tag)

pub mod commit;
pub mod refs;
pub mod repo;

pub use commit::*;
pub use refs::*;
pub use repo::*;
