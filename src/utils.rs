use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{CodeGenError, Result};

/// Ensure a directory exists, creating all parents if needed
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| CodeGenError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write a text file, replacing whatever was there before
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).map_err(|source| CodeGenError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

/// Get the file stem of a path as a string
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().and_then(|stem| stem.to_str()).map(String::from)
}

/// Sort paths by their full textual form
pub fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}

/// An RST heading rule as wide as the title
pub fn underline(title: &str, ch: char) -> String {
    std::iter::repeat(ch).take(title.chars().count()).collect()
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Reject names that would escape their parent directory
pub fn validate_name(kind: &'static str, name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');
    if invalid {
        return Err(CodeGenError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Accept a library given as a relative path below the root, such as
/// `libs/Einsums`, but nothing absolute or containing `..`
pub fn validate_library(library: &str) -> Result<()> {
    let path = Path::new(library);
    let nested_ok = path.components().any(|c| matches!(c, Component::Normal(_)))
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !nested_ok {
        return Err(CodeGenError::InvalidName {
            kind: "library",
            name: library.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mathlib"), "Mathlib");
        assert_eq!(capitalize("eXPERIMENTAL"), "Experimental");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_underline_matches_width() {
        assert_eq!(underline("blas3", '='), "=====");
    }

    #[test]
    fn test_sort_paths_is_textual() {
        let mut paths = vec![PathBuf::from("a/b"), PathBuf::from("a.b")];
        sort_paths(&mut paths);
        assert_eq!(paths, vec![PathBuf::from("a.b"), PathBuf::from("a/b")]);
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("module", "blas3").is_ok());
        assert!(validate_name("module", "").is_err());
        assert!(validate_name("module", "..").is_err());
        assert!(validate_name("module", "a/b").is_err());
    }

    #[test]
    fn test_validate_library_allows_nesting() {
        assert!(validate_library("mathlib").is_ok());
        assert!(validate_library("libs/Einsums").is_ok());
        assert!(validate_library("./mathlib").is_ok());
        assert!(validate_library(".").is_err());
        assert!(validate_library("").is_err());
        assert!(validate_library("../outside").is_err());
        assert!(validate_library("libs/../../outside").is_err());
        assert!(validate_library("/abs/lib").is_err());
    }
}
