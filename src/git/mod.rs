//! Version-control capability, backed by the `git` binary.

mod utils;

use std::path::Path;
use std::time::Duration;

use crate::error::CommandError;
use crate::runner::{self, Invocation, OutputMode};

pub use utils::remove_history;

/// The git operations the scaffolding workflows rely on.
pub trait Vcs {
    /// Shallow clone of `branch` from `url` into `dest`, without populating
    /// the working tree.
    fn clone_no_checkout(&self, url: &str, dest: &Path, branch: &str) -> Result<(), CommandError>;

    /// Raw `ls-tree -z` listing of the entries directly below `prefix` at
    /// `reference`, one NUL-terminated record per entry.
    fn list_tree(&self, repo: &Path, reference: &str, prefix: &str) -> Result<String, CommandError>;

    fn sparse_checkout_init(&self, repo: &Path) -> Result<(), CommandError>;

    fn sparse_checkout_set(&self, repo: &Path, scopes: &[&str]) -> Result<(), CommandError>;

    fn checkout(&self, repo: &Path, reference: &str) -> Result<(), CommandError>;
}

/// [`Vcs`] implemented by invoking `git`, each call bounded by `timeout`.
#[derive(Debug, Clone)]
pub struct GitCli {
    timeout: Duration,
}

impl GitCli {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn git(repo: &Path) -> Invocation {
        Invocation::new("git").current_dir(repo)
    }

    fn run(&self, invocation: Invocation) -> Result<(), CommandError> {
        runner::run(&invocation, OutputMode::Inherit, self.timeout).map(drop)
    }
}

pub(crate) fn clone_invocation(url: &str, dest: &Path, branch: &str) -> Invocation {
    Invocation::new("git")
        .args(["clone", "--depth=1", "--no-checkout", "--branch", branch, "--"])
        .arg(url)
        .arg(dest)
}

// `-z` keeps paths verbatim; without it core.quotePath C-quotes non-ASCII names
pub(crate) fn list_tree_invocation(repo: &Path, reference: &str, prefix: &str) -> Invocation {
    GitCli::git(repo).args(["ls-tree", "-z", reference, prefix])
}

impl Vcs for GitCli {
    fn clone_no_checkout(&self, url: &str, dest: &Path, branch: &str) -> Result<(), CommandError> {
        self.run(clone_invocation(url, dest, branch))
    }

    fn list_tree(&self, repo: &Path, reference: &str, prefix: &str) -> Result<String, CommandError> {
        let invocation = list_tree_invocation(repo, reference, prefix);
        runner::run(&invocation, OutputMode::Capture, self.timeout)
    }

    fn sparse_checkout_init(&self, repo: &Path) -> Result<(), CommandError> {
        self.run(Self::git(repo).args(["sparse-checkout", "init", "--cone"]))
    }

    fn sparse_checkout_set(&self, repo: &Path, scopes: &[&str]) -> Result<(), CommandError> {
        self.run(
            Self::git(repo)
                .args(["sparse-checkout", "set"])
                .args(scopes.iter().copied()),
        )
    }

    fn checkout(&self, repo: &Path, reference: &str) -> Result<(), CommandError> {
        self.run(Self::git(repo).args(["checkout", reference, "--"]))
    }
}
