//! Create a new project from a starter-kit template repository.
mod app_log;
mod args;
mod config;
mod error;
mod git;
mod interactive;
mod listing;
mod materialize;
mod progressbar;
mod runner;

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use console::style;
use log::error;

use app_log::log_env_init;
use args::{resolve_args, Action, CreateArgs};
use config::ScaffoldConfig;
use error::ScaffoldError;
use git::GitCli;
use interactive::{PresetPrompt, Prompt, TerminalPrompt};

fn main() {
    let cli = resolve_args();
    log_env_init(cli.app.verbose);

    let outcome = ScaffoldConfig::try_from(&cli.app)
        .map_err(anyhow::Error::from)
        .and_then(|config| match cli.action {
            Action::Create(create) => create_command(&config, create).map(drop),
        });

    if let Err(e) = outcome {
        error!("{}", style(format!("{e:#}")).bold().red());
        process::exit(1);
    }
}

/// `create <project-name>`: list, select, materialize.
fn create_command(config: &ScaffoldConfig, args: CreateArgs) -> Result<PathBuf> {
    let base_dir = env::current_dir().map_err(ScaffoldError::WorkingDir)?;
    // refuse early, before anything is fetched
    materialize::vacant_target(&base_dir, &args.project_name)?;
    let vcs = GitCli::new(config.timeout);

    let templates = listing::list_templates(&vcs, config, &base_dir)?;

    let prompt: Box<dyn Prompt> = match args.template {
        Some(name) => Box::new(PresetPrompt(name)),
        None => Box::new(TerminalPrompt),
    };
    let template = interactive::select_template(prompt.as_ref(), &templates)?;

    let project =
        materialize::create_project(&vcs, config, &base_dir, &args.project_name, &template)?;
    Ok(project)
}
