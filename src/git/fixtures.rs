//! Scratch repositories for tests.

use git2::{Oid, Repository, Signature, Time};
use std::path::Path;

pub const AUTHOR_NAME: &str = "Ada Author";
pub const AUTHOR_EMAIL: &str = "ada@example.com";
pub const COMMITTER_NAME: &str = "Cid Committer";
pub const COMMITTER_EMAIL: &str = "cid@example.com";
pub const OFFSET_MINUTES: i32 = 120;

/// Bare repository whose HEAD points at `refs/heads/main`.
pub fn init_bare(path: &Path) -> Repository {
    let repo = Repository::init_bare(path).unwrap();
    repo.set_head("refs/heads/main").unwrap();
    repo
}

/// Write a commit with one file named after its message, without moving
/// any reference.
pub fn commit(repo: &Repository, parents: &[Oid], message: &str, seconds: i64) -> Oid {
    commit_at(repo, parents, message, seconds, seconds)
}

/// Like `commit`, with separate author and committer times.
pub fn commit_at(
    repo: &Repository,
    parents: &[Oid],
    message: &str,
    author_seconds: i64,
    committer_seconds: i64,
) -> Oid {
    let blob = repo.blob(message.as_bytes()).unwrap();
    let mut builder = repo.treebuilder(None).unwrap();
    builder.insert("file.txt", blob, 0o100644).unwrap();
    let tree = repo.find_tree(builder.write().unwrap()).unwrap();

    let author_time = Time::new(author_seconds, OFFSET_MINUTES);
    let committer_time = Time::new(committer_seconds, 0);
    let author = Signature::new(AUTHOR_NAME, AUTHOR_EMAIL, &author_time).unwrap();
    let committer = Signature::new(COMMITTER_NAME, COMMITTER_EMAIL, &committer_time).unwrap();

    let parents: Vec<git2::Commit> = parents
        .iter()
        .map(|oid| repo.find_commit(*oid).unwrap())
        .collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(None, &author, &committer, message, &tree, &parent_refs)
        .unwrap()
}

/// Point `name` at `target`, creating or moving it.
pub fn set_ref(repo: &Repository, name: &str, target: Oid) {
    repo.reference(name, target, true, "test").unwrap();
}

/// `count` commits in a line on `refs/heads/main`, oldest first, one
/// minute apart.
pub fn linear_history(repo: &Repository, count: usize) -> Vec<Oid> {
    let mut oids: Vec<Oid> = Vec::with_capacity(count);
    for i in 0..count {
        let parents: Vec<Oid> = oids.last().copied().into_iter().collect();
        let oid = commit(
            repo,
            &parents,
            &format!("commit {}\n", i + 1),
            1_600_000_000 + 60 * i as i64,
        );
        oids.push(oid);
    }
    if let Some(tip) = oids.last() {
        set_ref(repo, "refs/heads/main", *tip);
    }
    oids
}
