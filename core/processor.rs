use crate::CoreError;
use crate::encoding::{self, DecodedText};
use crate::stripper;
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Per-file result of one run: rewritten, left alone, or skipped on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Modified,
    Unchanged,
    Failed(String),
}

#[derive(Debug)]
pub struct ProcessedFileResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

fn process_single_file(path: &Path) -> Result<FileOutcome, CoreError> {
    let raw = fs::read(path).map_err(|source| CoreError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let DecodedText { text, encoding } =
        encoding::decode(&raw).ok_or_else(|| CoreError::Decode {
            path: path.display().to_string(),
        })?;

    let cleaned = stripper::strip_comments(&text).map_err(|message| CoreError::Strip {
        path: path.display().to_string(),
        message: message.to_string(),
    })?;

    if cleaned == text {
        return Ok(FileOutcome::Unchanged);
    }

    let bytes = encoding::encode(&cleaned, encoding).ok_or_else(|| CoreError::Encode {
        path: path.display().to_string(),
        encoding: encoding.name().to_string(),
    })?;

    write_atomic(path, &bytes)?;
    Ok(FileOutcome::Modified)
}

/// Replaces `path` in one step: the new content goes to a temp file in the
/// same directory, then renames over the original. A failure mid-write
/// leaves the original untouched.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), CoreError> {
    let write_error = |source: std::io::Error| CoreError::Write {
        path: path.display().to_string(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::Builder::new()
        .prefix(".decomment_")
        .tempfile_in(parent)
        .map_err(write_error)?;
    temp_file.write_all(bytes).map_err(write_error)?;
    temp_file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

pub fn process_files(files: Vec<PathBuf>) -> Vec<ProcessedFileResult> {
    files
        .par_iter()
        .map(|path| {
            let outcome = match process_single_file(path) {
                Ok(outcome) => outcome,
                Err(e) => FileOutcome::Failed(e.to_string()),
            };
            ProcessedFileResult {
                path: path.clone(),
                outcome,
            }
        })
        .collect()
}
