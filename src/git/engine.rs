//! Process-wide libgit2 lifecycle.
//!
//! The hosting application calls `init` once at start-up and `shutdown` once
//! after every other call has returned. Both run their body at most once no
//! matter how many threads race on them. Calling anything in this crate after
//! `shutdown` is unsupported.

use std::ffi::c_int;
use std::sync::{Once, OnceLock};

use libgit2_sys as raw;
use tracing::{debug, info};

use crate::error::{GitError, Result};

static ENGINE: OnceLock<std::result::Result<(), GitError>> = OnceLock::new();
static SHUTDOWN: Once = Once::new();

/// Global engine settings applied during `init`.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Maximum number of pack files kept memory-mapped at once
    pub mwindow_file_limit: Option<usize>,
}

/// Initialise the engine. Later calls return the outcome of the first one.
pub fn init(options: &EngineOptions) -> Result<()> {
    ENGINE.get_or_init(|| start(options)).clone()?;
    Ok(())
}

/// Tear the engine down. Only the first call does anything, and only if
/// `init` succeeded.
pub fn shutdown() {
    SHUTDOWN.call_once(|| {
        if let Some(Ok(())) = ENGINE.get() {
            // SAFETY: balances the git_libgit2_init performed in `start`.
            let remaining = unsafe { raw::git_libgit2_shutdown() };
            info!(remaining, "git engine shut down");
        }
    });
}

pub fn is_initialized() -> bool {
    matches!(ENGINE.get(), Some(Ok(()))) && !SHUTDOWN.is_completed()
}

fn start(options: &EngineOptions) -> std::result::Result<(), GitError> {
    // git2 keeps its own reference on the library; ours is taken on top of it
    // so that `shutdown` never drops the count to zero under git2's feet.
    raw::init();

    // SAFETY: plain library call with no arguments.
    let ret = unsafe { raw::git_libgit2_init() };
    if ret < 0 {
        return Err(last_error(ret));
    }
    debug!(references = ret, "git engine initialised");

    if let Some(limit) = options.mwindow_file_limit {
        // SAFETY: GIT_OPT_SET_MWINDOW_FILE_LIMIT takes a single size_t.
        let ret = unsafe {
            raw::git_libgit2_opts(raw::GIT_OPT_SET_MWINDOW_FILE_LIMIT as c_int, limit)
        };
        if ret < 0 {
            return Err(last_error(ret));
        }
        debug!(limit, "mwindow file limit set");
    }

    Ok(())
}

/// Translate the failure libgit2 recorded for this thread.
fn last_error(code: c_int) -> GitError {
    GitError::from(git2::Error::last_error(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(&EngineOptions::default()).unwrap();
        init(&EngineOptions::default()).unwrap();
        assert!(ENGINE.get().is_some());
    }

    #[test]
    fn concurrent_init_runs_once() {
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| init(&EngineOptions::default())))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().is_ok());
            }
        });
        assert!(matches!(ENGINE.get(), Some(Ok(()))));
    }

    #[test]
    fn options_are_accepted() {
        let options = EngineOptions {
            mwindow_file_limit: Some(128),
        };
        init(&options).unwrap();
    }

    #[test]
    fn engine_failure_is_translated() {
        init(&EngineOptions::default()).unwrap();

        // SAFETY: an unknown option key takes no further arguments.
        let ret = unsafe { raw::git_libgit2_opts(-1 as c_int) };
        assert!(ret < 0);

        let err = last_error(ret);
        assert_eq!(err.code, ret);
        assert!(!err.message.is_empty());
        assert_ne!(err.message, crate::error::UNKNOWN_GIT_ERROR);
    }

    #[test]
    fn shutdown_runs_once() {
        init(&EngineOptions::default()).unwrap();
        shutdown();
        shutdown();
        assert!(SHUTDOWN.is_completed());
        assert!(!is_initialized());

        // git2 still holds its own reference, so the library stays usable.
        let tmp = tempfile::tempdir().unwrap();
        git2::Repository::init_bare(tmp.path()).unwrap();
    }
}
