use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct Project {
    pub root: TempDir,
}

impl Project {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn read(&self, path: &str) -> String {
        let path = self.path().join(path);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("couldn't read file {path:?}"))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.path().join(path).exists()
    }

    /// Sorted names of the entries directly inside `path`.
    pub fn entries(&self, path: &str) -> Vec<String> {
        let dir: PathBuf = self.path().join(path);
        let mut names: Vec<String> = fs::read_dir(&dir)
            .unwrap_or_else(|_| panic!("couldn't read dir {dir:?}"))
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
