//! Locate a concrete profile file from a path argument.
//!
//! Users pass either the profile itself or the capture directory it landed
//! in; directories are searched recursively. Multiple candidates are not an
//! error: the lexicographically first is chosen and the alternatives are
//! listed at info level so the user can pass an exact file instead.

use crate::utils::error::ResolveError;
use log::info;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve a file-or-directory argument to a single profile file
///
/// `pattern` is a file name suffix, e.g. `heap.prof`.
///
/// # Errors
/// * `ResolveError::NoProfileFound` - directory contains no candidate
/// * `ResolveError::NotFileOrDirectory` - path does not exist
pub fn resolve_profile(path: &Path, pattern: &str) -> Result<PathBuf, ResolveError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    if !path.is_dir() {
        return Err(ResolveError::NotFileOrDirectory(path.to_path_buf()));
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(pattern))
        .map(|entry| entry.into_path())
        .collect();

    candidates.sort();

    if candidates.is_empty() {
        return Err(ResolveError::NoProfileFound {
            path: path.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    if candidates.len() > 1 {
        info!(
            "multiple profiles found in {}, using first. Pass the exact file if you need a different one.",
            path.display()
        );
        for candidate in &candidates {
            info!("    - {}", candidate.display());
        }
    }

    Ok(candidates.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_passes_through() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let resolved = resolve_profile(file.path(), "heap.prof").unwrap();
        assert_eq!(resolved, file.path());
    }

    #[test]
    fn test_directory_picks_first_candidate() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("run2")).unwrap();
        fs::write(dir.path().join("run2/b-heap.prof"), b"x").unwrap();
        fs::write(dir.path().join("a-heap.prof"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let resolved = resolve_profile(dir.path(), "heap.prof").unwrap();
        assert_eq!(resolved, dir.path().join("a-heap.prof"));
    }

    #[test]
    fn test_empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            resolve_profile(dir.path(), "heap.prof"),
            Err(ResolveError::NoProfileFound { .. })
        ));
    }

    #[test]
    fn test_missing_path_fails() {
        assert!(matches!(
            resolve_profile(Path::new("/definitely/not/here"), "heap.prof"),
            Err(ResolveError::NotFileOrDirectory(_))
        ));
    }
}
