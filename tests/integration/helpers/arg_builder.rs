use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;

pub fn binary() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

pub trait BinaryArgBuilder {
    fn arg_create(&mut self, project_name: &str) -> &mut Self;
    fn arg_repo(&mut self, repo: impl AsRef<Path>) -> &mut Self;
    fn arg_template(&mut self, template: &str) -> &mut Self;
    fn arg_template_root(&mut self, root: &str) -> &mut Self;
    fn arg_branch(&mut self, branch: &str) -> &mut Self;
}

impl BinaryArgBuilder for Command {
    fn arg_create(&mut self, project_name: &str) -> &mut Self {
        self.arg("create").arg(project_name)
    }

    fn arg_repo(&mut self, repo: impl AsRef<Path>) -> &mut Self {
        self.arg("--repo").arg(repo.as_ref())
    }

    fn arg_template(&mut self, template: &str) -> &mut Self {
        self.arg("--template").arg(template)
    }

    fn arg_template_root(&mut self, root: &str) -> &mut Self {
        self.arg("--template-root").arg(root)
    }

    fn arg_branch(&mut self, branch: &str) -> &mut Self {
        self.arg("--branch").arg(branch)
    }
}
