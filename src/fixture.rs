use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::Options;
use crate::content_length::{check_same_lines, extract, Misalignment};
use crate::patch::patch_content_lengths;
use crate::scanner::find_out_files;
use crate::utils::FixturePair;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    /// The `.test` file was rewritten.
    Patched { replaced: usize },
    /// Aligned, but left alone because of dry run.
    Verified,
    MissingCounterpart { missing: PathBuf },
    Misaligned(Misalignment),
}

impl PairOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PairOutcome::Patched { .. } | PairOutcome::Verified)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Counters {
    pub patched: usize,
    pub verified: usize,
    pub missing: usize,
    pub misaligned: usize,
    pub lines_replaced: usize,
}

impl Counters {
    pub fn record(&mut self, outcome: &PairOutcome) {
        match outcome {
            PairOutcome::Patched { replaced } => {
                self.patched += 1;
                self.lines_replaced += *replaced;
            }
            PairOutcome::Verified => self.verified += 1,
            PairOutcome::MissingCounterpart { .. } => self.missing += 1,
            PairOutcome::Misaligned(_) => self.misaligned += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.missing + self.misaligned
    }
}

/// Checks one fixture pair and, unless dry run, patches its `.test` file from
/// the `.out` values. `path` may name either side of the pair.
pub fn process_file(path: &Path, opts: &Options) -> Result<PairOutcome> {
    info!("* processing file {}", path.display());

    let pair = FixturePair::from_path(path);
    if let Some(missing) = pair.missing() {
        info!("  - cannot find {}, skipping!", missing.display());
        return Ok(PairOutcome::MissingCounterpart {
            missing: missing.to_path_buf(),
        });
    }
    debug!("  - found {}", pair.test.display());
    debug!("  - found {}", pair.out.display());

    debug!("  - extracting content length in .test file");
    let cl_test = extract(&pair.test)?;
    debug!("  - extracting content length in .out file");
    let cl_out = extract(&pair.out)?;

    if let Err(mismatch) = check_same_lines(&cl_test, &cl_out) {
        info!("  - {mismatch}, skipping!");
        return Ok(PairOutcome::Misaligned(mismatch));
    }

    if opts.dry_run {
        info!("  - dry run mode: not touching file");
        return Ok(PairOutcome::Verified);
    }

    let replaced = patch_content_lengths(&pair.test, &cl_out)?;
    Ok(PairOutcome::Patched { replaced })
}

/// Processes the pair anchored at every `.out` file below `dir`.
pub fn process_dir(dir: &Path, opts: &Options) -> Result<Counters> {
    let mut counters = Counters::default();
    for out in find_out_files(dir)? {
        let outcome = process_file(&out, opts)?;
        if !outcome.is_success() {
            debug!("  - skipped {}", out.display());
        }
        counters.record(&outcome);
    }
    Ok(counters)
}

/// Dispatches on `opts.path`: directories are walked, anything else is a single pair.
pub fn process_path(opts: &Options) -> Result<Counters> {
    if opts.path.is_dir() {
        process_dir(&opts.path, opts)
    } else {
        let mut counters = Counters::default();
        counters.record(&process_file(&opts.path, opts)?);
        Ok(counters)
    }
}
