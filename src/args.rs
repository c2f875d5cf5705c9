use std::path::PathBuf;

use clap::{value_parser, Args, Parser, Subcommand};

use crate::config::{DEFAULT_BRANCH, DEFAULT_REPO, DEFAULT_TEMPLATE_ROOT, DEFAULT_TIMEOUT_SECS};

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const GIT_PARAMETERS: &str = "Git Parameters";
    pub const TEMPLATE_SELECTION: &str = "Template Selection";
}

#[derive(Parser, Debug)]
#[command(
    name = "starter-kit",
    arg_required_else_help(true),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct Cli {
    #[command(flatten)]
    pub app: AppArgs,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Create a new project directory from one of the repository templates
    Create(CreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Directory to create; it must not exist yet
    #[arg(value_name = "PROJECT_NAME", value_parser = value_parser!(PathBuf))]
    pub project_name: PathBuf,

    /// Use this template instead of asking for one
    #[arg(long, short, value_name = "NAME", help_heading = heading::TEMPLATE_SELECTION)]
    pub template: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AppArgs {
    /// Repository holding the templates. Can be a URL or a local path.
    #[arg(long, global = true, value_name = "URL", default_value = DEFAULT_REPO, help_heading = heading::GIT_PARAMETERS)]
    pub repo: String,

    /// Directory of the repository whose subdirectories are the templates
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_TEMPLATE_ROOT, help_heading = heading::TEMPLATE_SELECTION)]
    pub template_root: String,

    /// Branch to list templates from and to check out
    #[arg(long, short, global = true, default_value = DEFAULT_BRANCH, help_heading = heading::GIT_PARAMETERS)]
    pub branch: String,

    /// Seconds each git command may run before it is killed
    #[arg(long, global = true, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enables more verbose output.
    #[arg(long, short, global = true, action)]
    pub verbose: bool,
}

impl Default for AppArgs {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            template_root: DEFAULT_TEMPLATE_ROOT.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            verbose: false,
        }
    }
}

/// To get the arguments list from terminal
pub fn resolve_args() -> Cli {
    Cli::parse()
}
