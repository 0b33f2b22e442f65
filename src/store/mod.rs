// src/store/mod.rs
//! File-based persistence for pipeline inputs, intermediates and outputs.

pub mod format;

use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::error::{LinkFlipError, Result};
use crate::parse::SourceLine;

/// Expands input paths into the files to read.
///
/// A directory contributes its immediate files in name order, skipping hidden
/// files and `_`-prefixed markers such as `_SUCCESS`.
///
/// # Errors
/// Returns `Io` if a path does not exist or a directory cannot be listed.
pub fn discover(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let meta = fs::metadata(input).map_err(|e| LinkFlipError::io(e, input))?;
        if meta.is_file() {
            files.push(input.clone());
            continue;
        }
        let walker = WalkDir::new(input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && !is_marker(entry.file_name()) {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

fn is_marker(name: &std::ffi::OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name.starts_with('_')
}

/// Reads every line of every file, tagged with its origin.
///
/// # Errors
/// Returns `Io` naming the unreadable file, or `Parse` at the first line that
/// is not valid UTF-8.
pub fn read_lines(files: &[PathBuf]) -> Result<Vec<SourceLine>> {
    let mut lines = Vec::new();
    for path in files {
        let bytes = fs::read(path).map_err(|e| LinkFlipError::io(e, path))?;
        let origin: Arc<Path> = Arc::from(path.as_path());
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|b| **b == b'\n').count() + 1;
            SourceLine::new(Arc::clone(&origin), line, "").error("invalid UTF-8")
        })?;
        lines.extend(
            content
                .lines()
                .enumerate()
                .map(|(idx, text)| SourceLine::new(Arc::clone(&origin), idx + 1, text)),
        );
    }
    Ok(lines)
}

/// Writes `path` all-or-nothing: content goes to a sibling temp file that is
/// renamed into place only after `write` succeeds.
///
/// # Errors
/// Returns `Io` if writing or renaming fails; the temp file is removed.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LinkFlipError::io(e, parent))?;
    }
    let partial = partial_path(path);

    let result = File::create(&partial).and_then(|file| {
        let mut out = BufWriter::new(file);
        write(&mut out)?;
        out.flush()
    });
    if let Err(e) = result.and_then(|()| fs::rename(&partial, path)) {
        let _ = fs::remove_file(&partial);
        return Err(LinkFlipError::io(e, path));
    }
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "output".into(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.partial"))
}

/// Writes final output to `path`, or to stdout when no path is given.
///
/// # Errors
/// Returns `Io` on write failure.
pub fn emit<F>(path: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    match path {
        Some(path) => write_atomic(path, write),
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write(&mut out).and_then(|()| out.flush())?;
            Ok(())
        }
    }
}

/// Marker file identifying a directory this tool created for scratch data.
pub const SCRATCH_MARKER: &str = ".linkflip-scratch";

/// Prepares a scratch directory for a new run.
///
/// A missing or empty directory is created and marked. A marked directory
/// only loses the `owned` files from a previous run. A non-empty directory
/// without the marker is never touched.
///
/// # Errors
/// Returns `Config` if the directory holds foreign data, `Io` if it cannot be
/// prepared.
pub fn prepare_scratch(dir: &Path, owned: &[&str]) -> Result<()> {
    let marker = dir.join(SCRATCH_MARKER);
    if dir.exists() && !marker.is_file() {
        let mut entries = fs::read_dir(dir).map_err(|e| LinkFlipError::io(e, dir))?;
        if entries.next().is_some() {
            return Err(LinkFlipError::Config(format!(
                "refusing to reuse {}: not a linkflip scratch directory",
                dir.display()
            )));
        }
    }
    fs::create_dir_all(dir).map_err(|e| LinkFlipError::io(e, dir))?;
    File::create(&marker).map_err(|e| LinkFlipError::io(e, &marker))?;

    for name in owned {
        let path = dir.join(name);
        match fs::remove_file(&path) {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                return Err(LinkFlipError::io(e, path));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Rejects inputs that live inside `dir`.
///
/// # Errors
/// Returns `Config` naming the first input under `dir`.
pub fn ensure_outside(inputs: &[PathBuf], dir: &Path) -> Result<()> {
    let Ok(dir) = dir.canonicalize() else {
        return Ok(());
    };
    for input in inputs {
        if input.canonicalize().is_ok_and(|p| p.starts_with(&dir)) {
            return Err(LinkFlipError::Config(format!(
                "input {} lies inside scratch directory {}",
                input.display(),
                dir.display()
            )));
        }
    }
    Ok(())
}
