use assert_cmd::prelude::*;
use std::fs;
use std::io::Write;
use std::process::Command;

use crate::helpers::project::Project;
use tempfile::TempDir;

pub struct ProjectBuilder {
    files: Vec<(String, String)>,
    root: TempDir,
    git: bool,
    branch: Option<String>,
}

pub fn tempdir() -> ProjectBuilder {
    ProjectBuilder {
        files: Vec::new(),
        root: tempfile::Builder::new()
            .prefix("starter-kit")
            .tempdir()
            .unwrap(),
        git: false,
        branch: None,
    }
}

impl ProjectBuilder {
    /// builds a template repository with
    /// - a top-level `README.md` and `cli/main.go`
    /// - a loose file directly in `templates/`
    /// - two templates, `web` and `api`
    pub fn init_default_repo(self) -> Self {
        self.with_default_templates().init_git()
    }

    pub fn with_default_templates(self) -> Self {
        self.file("README.md", "# starter kit")
            .file("cli/main.go", "package main")
            .file("templates/NOTES.md", "one directory per template")
            .file("templates/web/package.json", r#"{ "name": "web" }"#)
            .file("templates/web/.gitignore", "node_modules")
            .file("templates/web/src/index.ts", "export {};")
            .file("templates/api/main.go", "package main")
    }

    pub fn file(mut self, name: &str, contents: impl AsRef<str>) -> Self {
        self.files.retain(|(f, _)| f != name);
        self.files
            .push((name.to_string(), contents.as_ref().to_string()));
        self
    }

    pub fn init_git(mut self) -> Self {
        self.git = true;
        self
    }

    /// Commit everything to `branch` instead of `main`.
    pub fn branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_owned());
        self
    }

    fn git_commit(message: &str, current_directory: impl AsRef<std::path::Path>) {
        Command::new("git")
            .args([
                "-c",
                "user.name='Foo Bar'",
                "-c",
                "user.email='foo@bar.com'",
            ])
            .arg("commit")
            .arg("--no-gpg-sign")
            .arg("--allow-empty")
            .arg("--message")
            .arg(message)
            .current_dir(current_directory)
            .assert()
            .success();
    }

    pub fn build(self) -> Project {
        let path = self.root.path();

        for (file, contents) in self.files.iter() {
            let path = path.join(file);
            let parent = path
                .parent()
                .unwrap_or_else(|| panic!("couldn't find parent dir of {path:?}"));

            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("couldn't create {parent:?} directory"));

            fs::File::create(&path)
                .unwrap_or_else(|_| panic!("couldn't create file {path:?}"))
                .write_all(contents.as_ref())
                .unwrap_or_else(|_| panic!("couldn't write to file {path:?}: {contents:?}"));
        }

        if self.git {
            Command::new("git")
                .arg("init")
                .current_dir(path)
                .assert()
                .success();

            Command::new("git")
                .arg("add")
                .arg("--all")
                .current_dir(path)
                .assert()
                .success();

            Self::git_commit("initial commit", path);

            // On Git >=2.28.0 `init.defaultBranch` decides the initial branch
            // name, so rename it to keep the tests independent of it.
            let branch = self.branch.as_deref().unwrap_or("main");
            Command::new("git")
                .arg("branch")
                .arg("--move")
                .arg(branch)
                .current_dir(path)
                .assert()
                .success();
        }

        Project { root: self.root }
    }
}
