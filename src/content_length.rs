use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::bytes::Regex;
use thiserror::Error;
use tracing::debug;

/// Anchored, case-sensitive; ASCII digits only.
pub(crate) static CONTENT_LENGTH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Content-Length: ([0-9]+)").expect("valid Content-Length regex"));

/// One `Content-Length: <value>` occurrence and the 1-based line it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLength {
    pub line: usize,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Misalignment {
    #[error("number of content-length entries does not match (.test has {target}, .out has {reference})")]
    Count { target: usize, reference: usize },

    #[error("item #{index} does not match: .test line {target_line} vs .out line {reference_line}")]
    Line {
        index: usize,
        target_line: usize,
        reference_line: usize,
    },
}

pub fn extract(path: &Path) -> Result<Vec<ContentLength>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    extract_from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot scan {}", path.display()))
}

pub fn extract_from_reader<R: BufRead>(mut reader: R) -> Result<Vec<ContentLength>> {
    let mut found = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;

        if let Some(value) = parse_value(&buf)? {
            debug!("  - push [{line}, {value}]");
            found.push(ContentLength { line, value });
        }
    }
    Ok(found)
}

/// Returns the value when `line` is a Content-Length line.
pub(crate) fn parse_value(line: &[u8]) -> Result<Option<u64>> {
    let Some(caps) = CONTENT_LENGTH_LINE.captures(line) else {
        return Ok(None);
    };
    // The capture is [0-9]+, hence valid UTF-8.
    let digits = std::str::from_utf8(&caps[1])?;
    let value = digits
        .parse::<u64>()
        .with_context(|| format!("Content-Length value out of range: {digits}"))?;
    Ok(Some(value))
}

/// Line positions must agree one to one; values are not compared.
pub fn check_same_lines(
    target: &[ContentLength],
    reference: &[ContentLength],
) -> Result<(), Misalignment> {
    if target.len() != reference.len() {
        return Err(Misalignment::Count {
            target: target.len(),
            reference: reference.len(),
        });
    }

    match target
        .iter()
        .zip(reference)
        .position(|(t, r)| t.line != r.line)
    {
        Some(index) => Err(Misalignment::Line {
            index,
            target_line: target[index].line,
            reference_line: reference[index].line,
        }),
        None => Ok(()),
    }
}
