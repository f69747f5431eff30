use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::utils::has_out_extension;

/// Every regular `.out` file below `root`, recursing into all subdirectories,
/// symlinked ones included. Order follows the walk and is not sorted.
pub fn find_out_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.with_context(|| format!("Cannot walk {}", root.display()))?;
        let path = entry.path();
        if path.is_file() && has_out_extension(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_out_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("cases/nested")).unwrap();
        for name in [
            "top.out",
            "top.test",
            "cases/a.out",
            "cases/a.test",
            "cases/readme.txt",
            "cases/nested/b.out",
        ] {
            fs::write(root.join(name), "").unwrap();
        }
        fs::create_dir_all(root.join("cases/dir.out")).unwrap();

        let mut found = find_out_files(root).unwrap();
        found.sort();

        let mut expected = vec![
            root.join("cases/a.out"),
            root.join("cases/nested/b.out"),
            root.join("top.out"),
        ];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("real")).unwrap();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("real/a.out"), "").unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("sub/link")).unwrap();

        let found = find_out_files(&root.join("sub")).unwrap();

        assert_eq!(found, vec![root.join("sub/link/a.out")]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_out_files(&dir.path().join("absent")).is_err());
    }
}
