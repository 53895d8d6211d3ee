use regex::Regex;
use std::fs;
use std::path::Path;

use crate::config::InstantiationConfig;
use crate::error::{CodeGenError, Result};

/// One export annotation found in a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
  /// Position among the annotations of its header, zero-based
  pub index: usize,
  /// The annotation line, verbatim
  pub line: String,
}

/// Extracts export annotations from header text.
///
/// Matching is purely syntactic: any line starting with the export marker is
/// an annotation, and its text is never checked.
pub struct AnnotationScanner {
  pattern: Regex,
  config: InstantiationConfig,
}

impl AnnotationScanner {
  /// Create a scanner for the markers in `config`
  pub fn new(config: &InstantiationConfig) -> Result<Self> {
    let pattern = Regex::new(&format!("(?m)^{}.*$", regex::escape(&config.export_marker)))
      .map_err(CodeGenError::Regex)?;
    Ok(Self {
      pattern,
      config: config.clone(),
    })
  }

  /// Whether a header only holds forward declarations and must be skipped
  pub fn is_forward_header(&self, header: &Path) -> bool {
    let header = header.to_string_lossy();
    self
      .config
      .forward_markers
      .iter()
      .any(|marker| header.contains(marker.as_str()))
  }

  /// Extract annotations from header text, in order of appearance
  pub fn scan_str(&self, contents: &str) -> Vec<Annotation> {
    self
      .pattern
      .find_iter(contents)
      .enumerate()
      .map(|(index, m)| Annotation {
        index,
        line: m.as_str().trim_end_matches('\r').to_string(),
      })
      .collect()
  }

  /// Read a header below the include root and extract its annotations
  pub fn scan_header(&self, header: &Path) -> Result<Vec<Annotation>> {
    if self.is_forward_header(header) {
      tracing::debug!("skipping forward header {}", header.display());
      return Ok(Vec::new());
    }

    let path = self.config.include_root.join(header);
    let contents = fs::read_to_string(&path).map_err(|source| CodeGenError::HeaderRead {
      path: path.clone(),
      source,
    })?;

    let annotations = self.scan_str(&contents);
    tracing::debug!(
      "found {} annotation(s) in {}",
      annotations.len(),
      path.display()
    );
    Ok(annotations)
  }
}
