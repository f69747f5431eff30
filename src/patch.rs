use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::content_length::{parse_value, ContentLength};

/// Rewrites every Content-Length line of `path` with the value at the same
/// occurrence index in `reference`; everything else is copied as is.
///
/// The new content is written to a temp file next to `path` and renamed over
/// it only once fully flushed. Any earlier failure drops (and deletes) the temp
/// file and leaves `path` untouched. Returns the number of lines replaced.
pub fn patch_content_lengths(path: &Path, reference: &[ContentLength]) -> Result<usize> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let source = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let permissions = source.metadata()?.permissions();
    let mut reader = BufReader::new(source);

    let temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Cannot create temp file in {}", dir.display()))?;
    let mut writer = BufWriter::new(temp);

    let mut replaced = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        if parse_value(&buf)?.is_some() {
            let Some(cl) = reference.get(replaced) else {
                bail!(
                    "{} has more Content-Length lines than the {} reference values",
                    path.display(),
                    reference.len()
                );
            };
            writeln!(writer, "Content-Length: {}", cl.value)?;
            debug!("  - patching \"Content-Length: {}\"", cl.value);
            replaced += 1;
        } else {
            writer.write_all(&buf)?;
        }
    }
    drop(reader);

    let temp = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Cannot flush patched copy of {}", path.display()))?;
    // Close the handle, keep the path (and its delete-on-drop guard) until the rename.
    let temp = temp.into_temp_path();
    fs::set_permissions(&temp, permissions)
        .with_context(|| format!("Cannot copy permissions of {}", path.display()))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Cannot replace {}", path.display()))?;

    Ok(replaced)
}
