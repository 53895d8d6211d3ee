use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as AnyhowContext;

use crate::error::Result;
use crate::utils::sort_paths;

/// The set of files written by one generation pass
#[derive(Debug, Default, Clone)]
pub struct GeneratedFiles {
  paths: HashSet<PathBuf>,
}

impl GeneratedFiles {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a generated file. Returns false if it was already recorded.
  pub fn insert(&mut self, path: PathBuf) -> bool {
    self.paths.insert(path)
  }

  pub fn contains(&self, path: &Path) -> bool {
    self.paths.contains(path)
  }

  pub fn len(&self) -> usize {
    self.paths.len()
  }

  pub fn is_empty(&self) -> bool {
    self.paths.is_empty()
  }

  /// All recorded paths, sorted by their full textual form
  pub fn sorted(&self) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = self.paths.iter().cloned().collect();
    sort_paths(&mut paths);
    paths
  }

  /// The sorted paths joined by newlines, for the build system to consume
  pub fn render(&self) -> String {
    self
      .sorted()
      .iter()
      .map(|p| p.to_string_lossy().into_owned())
      .collect::<Vec<String>>()
      .join("\n")
  }

  /// Files in `output_dir` with extension `ext` that this pass did not write.
  ///
  /// These are left over from annotations that no longer exist. They are only
  /// reported: generated names carry no trace of the annotation text, so a
  /// file like `Foo1.cpp` cannot be attributed to a header with certainty.
  pub fn stale_candidates(&self, output_dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(output_dir)
      .with_context(|| format!("Failed to list directory: {}", output_dir.display()))?;

    let mut stale = Vec::new();
    for entry in entries {
      let path = entry
        .with_context(|| format!("Failed to list directory: {}", output_dir.display()))?
        .path();
      let matches_ext = path.extension().map_or(false, |e| e == ext);
      if matches_ext && path.is_file() && !self.contains(&path) {
        stale.push(path);
      }
    }
    sort_paths(&mut stale);
    Ok(stale)
  }
}
