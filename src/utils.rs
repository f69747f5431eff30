use std::path::{Path, PathBuf};

pub const TEST_EXT: &str = "test";
pub const OUT_EXT: &str = "out";

/// A request fixture and its expected response, same directory and stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePair {
    pub test: PathBuf,
    pub out: PathBuf,
}

impl FixturePair {
    /// Derives both counterparts from either one (or from any path sharing the stem).
    pub fn from_path(path: &Path) -> Self {
        FixturePair {
            test: path.with_extension(TEST_EXT),
            out: path.with_extension(OUT_EXT),
        }
    }

    /// First counterpart that is not a regular file, `.test` checked before `.out`.
    pub fn missing(&self) -> Option<&Path> {
        [&self.test, &self.out]
            .into_iter()
            .find(|p| !p.is_file())
            .map(PathBuf::as_path)
    }
}

pub fn has_out_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(OUT_EXT)
}
