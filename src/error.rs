use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Why a single external command did not succeed.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("`{command}` could not be started")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed ({status})")]
    Failed { command: String, status: ExitStatus },

    #[error("`{command}` timed out after {}s", .timeout.as_secs())]
    TimedOut { command: String, timeout: Duration },

    #[error("waiting for `{command}` failed")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Everything that ends a run early.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Cannot determine the current directory")]
    WorkingDir(#[source] io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to clone the template repository")]
    Clone(#[source] CommandError),

    #[error("Cannot read the template list")]
    Listing(#[source] Option<CommandError>),

    #[error("Template selection cancelled")]
    Cancelled,

    #[error("Template `{0}` does not exist")]
    UnknownTemplate(String),

    #[error("Target directory already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("Failed to create the project ({step})")]
    Materialize {
        step: &'static str,
        #[source]
        source: StepError,
    },
}

/// Failure of one materialization step, either a git command or a
/// filesystem move/removal done in-process.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("{action} `{}`", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` already exists in the project root", .0.display())]
    Collision(PathBuf),
}
