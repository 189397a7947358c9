//! File and stdin reading with size enforcement and UTF-8 validation.
//!
//! This module is the single entry point for all input I/O in the `pipedag`
//! binary. `pipedag-core` never touches the filesystem; all reading happens
//! here.
//!
//! Key behaviours:
//! - Disk files: size checked via `std::fs::metadata` before any read.
//! - Stdin: buffered with a `Read::take` cap so allocation is bounded.
//! - UTF-8 validation via `std::str::from_utf8` with byte-offset reporting.
//! - All I/O errors are converted to [`CliError`] variants with exit code 2.

use std::io::Read as _;
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`.
///
/// For disk files the file length is checked against `max_size` via
/// `std::fs::metadata` before any bytes are read. For stdin a capped reader
/// (`Read::take`) is used so that the allocation is bounded.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for: file not found, permission
/// denied, input over `max_size`, any other I/O error, or invalid UTF-8
/// (with the byte offset of the first bad sequence).
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

/// Reads a disk file, enforcing the size limit and UTF-8 requirement.
fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    // Size check via metadata, before any allocation.
    let file_size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => return Err(io_error_to_cli(&e, path)),
    };

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => return Err(io_error_to_cli(&e, path)),
    };

    bytes_to_string(&bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        },
    }
}

/// Reads the entire stdin stream, capped at `max_size` bytes.
///
/// Wraps the locked handle in `Read::take` so the buffer allocation is
/// bounded by the cap regardless of how much the peer writes.
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();

    let mut buf: Vec<u8> = Vec::new();
    handle
        .by_ref()
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    // Hitting the cap exactly is ambiguous: the stream may be exactly
    // max_size bytes (fine) or larger (truncated). One more byte off the
    // same handle settles it.
    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle.read(&mut probe).map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;
        // Anything left beyond the cap means the input was over the limit.
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    bytes_to_string(&buf, "-")
}

/// Converts a byte buffer to a `String`, returning a [`CliError`] with the
/// byte offset of the first invalid sequence on failure.
fn bytes_to_string(bytes: &[u8], source_label: &str) -> Result<String, CliError> {
    let text = std::str::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        // valid_up_to is the length of the longest valid prefix, which is
        // exactly the offset of the first bad byte.
        byte_offset: e.valid_up_to(),
    })?;
    Ok(text.to_owned())
}
