//! Turns a chosen template into a fresh project directory.
//!
//! The work is an ordered plan of [`Step`]s. Each successful step advances
//! the [`MaterializeState`]; the first failing step stops the plan and the
//! [`Rollback`] policy removes whatever the plan created.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use console::style;
use indicatif::ProgressBar;
use log::{debug, info, warn};

use crate::config::ScaffoldConfig;
use crate::error::{ScaffoldError, StepError};
use crate::git::{self, Vcs};
use crate::progressbar;

/// Temporary name of the template root while its chosen template is moved out.
const STAGING_DIR: &str = ".starter-kit-template";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeState {
    NotStarted,
    Cloned,
    SparseInitialized,
    ScopeSet,
    CheckedOut,
    Relocated,
    Cleaned,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clone,
    SparseInit,
    SparseSet,
    Checkout,
    Relocate,
    StripMetadata,
}

impl Step {
    pub const PLAN: [Step; 6] = [
        Step::Clone,
        Step::SparseInit,
        Step::SparseSet,
        Step::Checkout,
        Step::Relocate,
        Step::StripMetadata,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Step::Clone => "clone repository",
            Step::SparseInit => "enable sparse checkout",
            Step::SparseSet => "limit checkout to template",
            Step::Checkout => "check out branch",
            Step::Relocate => "move template to project root",
            Step::StripMetadata => "remove repository metadata",
        }
    }

    /// State reached once this step succeeded.
    pub fn reaches(self) -> MaterializeState {
        match self {
            Step::Clone => MaterializeState::Cloned,
            Step::SparseInit => MaterializeState::SparseInitialized,
            Step::SparseSet => MaterializeState::ScopeSet,
            Step::Checkout => MaterializeState::CheckedOut,
            Step::Relocate => MaterializeState::Relocated,
            Step::StripMetadata => MaterializeState::Cleaned,
        }
    }

    /// Steps that hand the terminal's stderr to git.
    pub fn runs_git(self) -> bool {
        !matches!(self, Step::Relocate | Step::StripMetadata)
    }

    /// What undoes the effects of a failed step.
    pub fn compensation(self) -> Rollback {
        // the existence check ran before the clone, so even a half-finished
        // clone only ever leaves behind a directory this run created
        Rollback::RemoveTarget
    }

    fn execute(self, job: &Job<'_>) -> Result<(), StepError> {
        let target = job.target;
        let vcs = job.vcs;
        match self {
            Step::Clone => {
                vcs.clone_no_checkout(&job.config.repo_url, target, &job.config.branch)?
            }
            Step::SparseInit => vcs.sparse_checkout_init(target)?,
            Step::SparseSet => vcs.sparse_checkout_set(target, &[job.scope.as_str()])?,
            Step::Checkout => vcs.checkout(target, &job.config.branch)?,
            Step::Relocate => relocate(target, &job.config.template_root, job.template)?,
            Step::StripMetadata => strip_metadata(target)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollback {
    RemoveTarget,
}

impl Rollback {
    fn apply(self, target: &Path) {
        match self {
            Rollback::RemoveTarget => match fs::remove_dir_all(target) {
                Ok(()) => debug!("rolled back {}", target.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!(
                    "Cannot remove the incomplete project `{}`: {}",
                    target.display(),
                    e
                ),
            },
        }
    }
}

struct Job<'a> {
    vcs: &'a dyn Vcs,
    config: &'a ScaffoldConfig,
    target: &'a Path,
    template: &'a str,
    scope: String,
}

/// Create `base_dir/project_name` holding only the files of `template`.
///
/// Nothing is touched when the target already exists. Any failure after that
/// check removes the target again before the error is returned.
pub fn create_project(
    vcs: &dyn Vcs,
    config: &ScaffoldConfig,
    base_dir: &Path,
    project_name: &Path,
    template: &str,
) -> Result<PathBuf, ScaffoldError> {
    let target = vacant_target(base_dir, project_name)?;

    info!(
        "🚀 {}",
        style(format!(
            "Creating project '{}' from template '{template}'...",
            project_name.display()
        ))
        .bold()
        .yellow()
    );

    let job = Job {
        vcs,
        config,
        target: &target,
        template,
        scope: config.template_dir(template),
    };
    run_plan(&job)?;

    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(target.display()).underlined()
    );
    Ok(target)
}

/// Path of the project directory, provided nothing exists there yet.
pub fn vacant_target(base_dir: &Path, project_name: &Path) -> Result<PathBuf, ScaffoldError> {
    let target = base_dir.join(project_name);
    if target.symlink_metadata().is_ok() {
        return Err(ScaffoldError::TargetExists(target));
    }
    Ok(target)
}

fn run_plan(job: &Job<'_>) -> Result<MaterializeState, ScaffoldError> {
    let mut state = MaterializeState::NotStarted;
    let total = Step::PLAN.len();

    for (idx, step) in Step::PLAN.into_iter().enumerate() {
        let pb = step_progress(step, idx, total);
        let outcome = step.execute(job);
        pb.finish_and_clear();

        if let Err(source) = outcome {
            debug!("{:?} failed in state {:?}", step, state);
            step.compensation().apply(job.target);
            return Err(ScaffoldError::Materialize {
                step: step.label(),
                source,
            });
        }
        state = step.reaches();
        debug!("state: {:?}", state);
    }

    Ok(MaterializeState::Done)
}

/// Spinner for one step. Hidden while git runs, since git writes its own
/// progress and errors to the same stderr.
fn step_progress(step: Step, idx: usize, total: usize) -> ProgressBar {
    if step.runs_git() {
        return ProgressBar::hidden();
    }
    progressbar::spinner(format!("[{}/{}]", idx + 1, total), step.label())
}

/// Move everything below `<root>/<template>` into the project root.
///
/// Cone-mode checkouts also bring in the files that sit directly in the
/// template's ancestor directories; those are dropped so the project holds
/// nothing but the template.
fn relocate(target: &Path, template_root: &str, template: &str) -> Result<(), StepError> {
    let staging = target.join(STAGING_DIR);
    let root = target.join(template_root);
    rename(&root, &staging)?;

    for entry in read_dir(target)? {
        let name = entry.file_name();
        if name == ".git" || name == STAGING_DIR {
            continue;
        }
        debug!("dropping {:?}, not part of the template", name);
        remove_path(&entry.path())?;
    }

    let source = staging.join(template);
    for entry in read_dir(&source)? {
        let dest = target.join(entry.file_name());
        if dest.symlink_metadata().is_ok() {
            return Err(StepError::Collision(dest));
        }
        rename(&entry.path(), &dest)?;
    }
    Ok(())
}

/// Remove `.git` and the emptied template root.
fn strip_metadata(target: &Path) -> Result<(), StepError> {
    git::remove_history(target).map_err(|source| StepError::Io {
        action: "cannot remove",
        path: target.join(".git"),
        source,
    })?;
    remove_path(&target.join(STAGING_DIR))
}

fn read_dir(dir: &Path) -> Result<Vec<fs::DirEntry>, StepError> {
    let io_err = |source| StepError::Io {
        action: "cannot read",
        path: dir.to_path_buf(),
        source,
    };
    fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)
}

fn rename(from: &Path, to: &Path) -> Result<(), StepError> {
    fs::rename(from, to).map_err(|source| StepError::Io {
        action: "cannot move",
        path: from.to_path_buf(),
        source,
    })
}

fn remove_path(path: &Path) -> Result<(), StepError> {
    let removed = match path.symlink_metadata() {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    };
    removed.map_err(|source| StepError::Io {
        action: "cannot remove",
        path: path.to_path_buf(),
        source,
    })
}
