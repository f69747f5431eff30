#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tracing::Level;

use fix_content_lengths::Options;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .with_test_writer()
        .try_init();
}

pub fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

pub fn options(path: &Path, dry_run: bool) -> Options {
    Options {
        path: path.to_path_buf(),
        dry_run,
        verbose: true,
    }
}
