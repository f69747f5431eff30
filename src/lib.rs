//
// lib.rs
// fix-content-lengths
//
// Library entry that re-exports modules so the binary and the integration tests can reach CLI parsing, scanning, checking and patching of functional-test fixtures.
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod content_length;
pub mod fixture;
pub mod patch;
pub mod scanner;
pub mod utils;

pub use cli::{build_options, Args, Options};
pub use content_length::{check_same_lines, extract, ContentLength, Misalignment};
pub use fixture::{process_dir, process_file, process_path, Counters, PairOutcome};
pub use patch::patch_content_lengths;
pub use scanner::find_out_files;
pub use utils::FixturePair;
