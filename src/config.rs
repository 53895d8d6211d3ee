use std::path::PathBuf;

/// Settings for expanding export annotations into instantiation sources
#[derive(Debug, Clone)]
pub struct InstantiationConfig {
  /// Directory headers are resolved against
  pub include_root: PathBuf,
  /// Directory generated sources are written into
  pub output_dir: PathBuf,
  /// Token that starts an annotation line
  pub export_marker: String,
  /// Token the export marker is rewritten to
  pub define_marker: String,
  /// Namespace wrapping the rewritten annotation
  pub namespace: String,
  /// Extension of generated sources, without the dot
  pub source_ext: String,
  /// Headers whose path contains any of these are never scanned
  pub forward_markers: Vec<String>,
}

impl InstantiationConfig {
  /// Create a config writing into `output_dir` with the default markers
  pub fn new(output_dir: impl Into<PathBuf>) -> Self {
    Self {
      output_dir: output_dir.into(),
      ..Self::default()
    }
  }

  pub fn with_include_root(mut self, include_root: impl Into<PathBuf>) -> Self {
    self.include_root = include_root.into();
    self
  }

  pub fn with_markers(mut self, export_marker: &str, define_marker: &str) -> Self {
    self.export_marker = export_marker.to_string();
    self.define_marker = define_marker.to_string();
    self
  }

  pub fn with_namespace(mut self, namespace: &str) -> Self {
    self.namespace = namespace.to_string();
    self
  }

  pub fn with_source_ext(mut self, ext: &str) -> Self {
    self.source_ext = ext.trim_start_matches('.').to_string();
    self
  }

  pub fn with_forward_markers<S: AsRef<str>>(mut self, markers: &[S]) -> Self {
    self.forward_markers = markers.iter().map(|m| m.as_ref().to_string()).collect();
    self
  }
}

impl Default for InstantiationConfig {
  fn default() -> Self {
    Self {
      include_root: PathBuf::from("include"),
      output_dir: PathBuf::from("."),
      export_marker: "EINSUMS_TENSOR_EXPORT".to_string(),
      define_marker: "EINSUMS_TENSOR_DEFINE".to_string(),
      namespace: "einsums".to_string(),
      source_ext: "cpp".to_string(),
      forward_markers: vec!["TensorForward".to_string()],
    }
  }
}

/// Module name reserved for "only rebuild the library registry"
pub const RECREATE_INDEX: &str = "--recreate-index";

/// Settings for module scaffolding and registry synchronization
#[derive(Debug, Clone)]
pub struct SkeletonConfig {
  /// Directory that holds the library directories
  pub root: PathBuf,
  /// Subdirectories starting with this prefix are not modules
  pub internal_prefix: String,
  /// Module name that skips scaffolding
  pub recreate_sentinel: String,
}

impl SkeletonConfig {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      ..Self::default()
    }
  }

  pub fn with_internal_prefix(mut self, prefix: &str) -> Self {
    self.internal_prefix = prefix.to_string();
    self
  }

  /// Directory of the named library
  pub fn library_dir(&self, library: &str) -> PathBuf {
    self.root.join(library)
  }

  /// Directory of a module within a library
  pub fn module_dir(&self, library: &str, module: &str) -> PathBuf {
    self.library_dir(library).join(module)
  }

  pub fn is_recreate_only(&self, module: &str) -> bool {
    module == self.recreate_sentinel
  }

  pub fn is_internal(&self, name: &str) -> bool {
    !self.internal_prefix.is_empty() && name.starts_with(&self.internal_prefix)
  }
}

impl Default for SkeletonConfig {
  fn default() -> Self {
    Self {
      root: PathBuf::from("."),
      internal_prefix: "_".to_string(),
      recreate_sentinel: RECREATE_INDEX.to_string(),
    }
  }
}
