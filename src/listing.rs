use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use console::style;
use log::{debug, info, warn};

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::git::Vcs;

/// Throw-away clone used only to read the template names. Removed when dropped.
struct ListingWorkspace(PathBuf);

impl ListingWorkspace {
    fn prepare(path: PathBuf) -> Self {
        remove_if_present(&path);
        Self(path)
    }
}

impl Drop for ListingWorkspace {
    fn drop(&mut self) {
        remove_if_present(&self.0);
    }
}

fn remove_if_present(path: &Path) {
    match fs::remove_dir_all(path) {
        Ok(()) => debug!("removed {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Cannot remove `{}`: {}", path.display(), e),
    }
}

/// Names of all templates on the configured branch, in listing order.
///
/// The listing clone lives in `base_dir` for the duration of the call only. A
/// failed clone, a failed listing and an empty listing are all errors.
pub fn list_templates(
    vcs: &dyn Vcs,
    config: &ScaffoldConfig,
    base_dir: &Path,
) -> Result<Vec<String>, ScaffoldError> {
    info!(
        "📦 {}",
        style("Fetching the template list from the repository...").bold()
    );

    let listing = {
        let workspace = ListingWorkspace::prepare(base_dir.join(&config.listing_dir_name));
        vcs.clone_no_checkout(&config.repo_url, &workspace.0, &config.branch)
            .map_err(ScaffoldError::Clone)?;
        vcs.list_tree(&workspace.0, "HEAD", &config.root_prefix())
            .map_err(|e| ScaffoldError::Listing(Some(e)))?
    };

    let templates = parse_tree_listing(&listing, &config.template_root);
    if templates.is_empty() {
        return Err(ScaffoldError::Listing(None));
    }
    debug!("templates: {}", templates.join(", "));
    Ok(templates)
}

/// Turn `git ls-tree -z` output into template names.
///
/// Records are NUL-terminated. Full-format records
/// (`<mode> <type> <object>\t<path>`) keep only `tree` entries; records
/// without a tab are taken as bare paths. The `<root>/` prefix and any
/// leading separator are stripped.
pub fn parse_tree_listing(output: &str, template_root: &str) -> Vec<String> {
    output
        .split('\0')
        .filter_map(|record| match record.split_once('\t') {
            Some((meta, path)) => (meta.split_whitespace().nth(1) == Some("tree")).then_some(path),
            None => Some(record),
        })
        .map(|path| {
            path.strip_prefix(template_root)
                .filter(|rest| rest.starts_with('/'))
                .unwrap_or(path)
                .trim_matches('/')
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
