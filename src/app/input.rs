//! Reading raw domain lists from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error_handling::InputError;

/// Path value meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Whether `path` refers to stdin.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Rejects configurations that would read stdin twice.
///
/// # Errors
///
/// Returns `InputError::StdinUsedTwice` if both paths are `-`.
pub fn ensure_single_stdin(list_a: &Path, list_b: &Path) -> Result<(), InputError> {
    if is_stdin(list_a) && is_stdin(list_b) {
        return Err(InputError::StdinUsedTwice);
    }
    Ok(())
}

/// Reads one raw list, either from a file or from stdin (`-`).
///
/// # Errors
///
/// Returns an error if the source cannot be read, or `InputError::InvalidUtf8`
/// if its contents are not UTF-8.
pub fn read_list(path: &Path) -> Result<String> {
    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("Failed to open {}", path.display()))?
    };

    String::from_utf8(bytes).map_err(|_| InputError::InvalidUtf8(path.to_path_buf()).into())
}
