use std::fs::remove_dir_all;
use std::io;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use log::warn;

const REMOVE_ATTEMPTS: u8 = 5;

/// remove context of repository by removing `.git` from filesystem
pub fn remove_history(project_dir: &Path) -> io::Result<()> {
    let git_dir = project_dir.join(".git");
    if !git_dir.is_dir() {
        return Ok(());
    }

    let mut attempt = 0_u8;
    loop {
        attempt += 1;
        match remove_dir_all(&git_dir) {
            Ok(()) => return Ok(()),
            // windows keeps pack files locked for a moment after git exits
            Err(e) if attempt < REMOVE_ATTEMPTS && is_sharing_violation(&e) => {
                let wait_for = Duration::from_secs(1);
                warn!(
                    "Git history cleanup failed with a windows process blocking error. [Retry in {:?}]",
                    wait_for
                );
                sleep(wait_for);
            }
            Err(e) => return Err(e),
        }
    }
}

fn is_sharing_violation(e: &io::Error) -> bool {
    // ERROR_SHARING_VIOLATION
    cfg!(windows) && e.raw_os_error() == Some(32)
}
