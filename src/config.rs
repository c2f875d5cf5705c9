use std::time::Duration;

use crate::args::AppArgs;
use crate::error::ScaffoldError;

pub const DEFAULT_REPO: &str = "https://github.com/fathurmdr/starter-kit.git";
pub const DEFAULT_TEMPLATE_ROOT: &str = "templates";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Name of the throw-away clone used to enumerate templates, relative to the
/// current directory.
pub const LISTING_DIR_NAME: &str = "starter-kit-list";

/// Settings shared by every step of a run. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub repo_url: String,
    pub template_root: String,
    pub branch: String,
    pub timeout: Duration,
    pub listing_dir_name: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO.to_string(),
            template_root: DEFAULT_TEMPLATE_ROOT.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            listing_dir_name: LISTING_DIR_NAME.to_string(),
        }
    }
}

impl TryFrom<&AppArgs> for ScaffoldConfig {
    type Error = ScaffoldError;

    fn try_from(args: &AppArgs) -> Result<Self, Self::Error> {
        let template_root = normalize_root(&args.template_root);
        if template_root.is_empty() {
            return Err(ScaffoldError::InvalidConfig(
                "the template root must name a directory".into(),
            ));
        }
        if args.branch.trim().is_empty() {
            return Err(ScaffoldError::InvalidConfig(
                "the branch name must not be empty".into(),
            ));
        }
        if args.timeout == 0 {
            return Err(ScaffoldError::InvalidConfig(
                "the timeout must be at least one second".into(),
            ));
        }

        Ok(Self {
            repo_url: args.repo.clone(),
            template_root,
            branch: args.branch.trim().to_string(),
            timeout: Duration::from_secs(args.timeout),
            listing_dir_name: LISTING_DIR_NAME.to_string(),
        })
    }
}

impl ScaffoldConfig {
    /// `<root>/`, as the listing prints it in front of every entry.
    pub fn root_prefix(&self) -> String {
        format!("{}/", self.template_root)
    }

    /// Repository-relative directory of one template.
    pub fn template_dir(&self, template: &str) -> String {
        format!("{}/{}", self.template_root, template)
    }
}

fn normalize_root(root: &str) -> String {
    root.trim().trim_matches('/').to_string()
}
