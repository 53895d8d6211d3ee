use std::path::PathBuf;

use crate::config::SkeletonConfig;
use crate::error::Result;
use crate::registry::{Registry, RegistrySynchronizer};
use crate::templates;
use crate::utils::{ensure_dir, validate_library, validate_name, write_file};

/// Namespace directory under a module's `include/`
pub const INCLUDE_NAMESPACE: &str = "einsums";

/// Test categories, each with its own subdirectory and build manifest
pub const TEST_CATEGORIES: [&str; 3] = ["unit", "regressions", "performance"];

/// What a scaffolding pass created or overwrote
#[derive(Debug, Default)]
pub struct ScaffoldReport {
  pub module_dir: PathBuf,
  pub directories: Vec<PathBuf>,
  pub files: Vec<PathBuf>,
}

/// Creates the directory skeleton and boilerplate files of a module.
///
/// Every templated file is rewritten on each run, whatever it contains.
pub struct ModuleScaffolder {
  config: SkeletonConfig,
}

impl ModuleScaffolder {
  pub fn new(config: &SkeletonConfig) -> Self {
    Self {
      config: config.clone(),
    }
  }

  /// Directories of a module skeleton, relative to the module directory
  pub fn skeleton_dirs(module: &str) -> Vec<PathBuf> {
    let mut dirs = vec![
      PathBuf::from("docs"),
      PathBuf::from("examples"),
      PathBuf::from("include").join(INCLUDE_NAMESPACE).join(module),
      PathBuf::from("src"),
    ];
    dirs.extend(
      TEST_CATEGORIES
        .iter()
        .map(|category| PathBuf::from("tests").join(category)),
    );
    dirs
  }

  /// Templated files of a module skeleton, relative to the module directory
  pub fn skeleton_files(library: &str, module: &str) -> Vec<(PathBuf, String)> {
    let mut files = vec![
      (
        PathBuf::from("README.rst"),
        templates::module_readme(library, module),
      ),
      (
        PathBuf::from("CMakeLists.txt"),
        templates::module_cmakelists(library, module),
      ),
      (
        PathBuf::from("docs").join("index.rst"),
        templates::module_docs_index(library, module),
      ),
      (
        PathBuf::from("examples").join("CMakeLists.txt"),
        templates::examples_cmakelists(library, module),
      ),
      (
        PathBuf::from("tests").join("CMakeLists.txt"),
        templates::tests_cmakelists(library, module),
      ),
    ];
    for category in TEST_CATEGORIES {
      files.push((
        PathBuf::from("tests").join(category).join("CMakeLists.txt"),
        templates::test_category_cmakelists(library, module, category),
      ));
    }
    files
  }

  /// Create the module skeleton, overwriting any existing templated files
  pub fn scaffold(&self, library: &str, module: &str) -> Result<ScaffoldReport> {
    validate_library(library)?;
    validate_name("module", module)?;

    let module_dir = self.config.module_dir(library, module);
    let mut report = ScaffoldReport {
      module_dir: module_dir.clone(),
      ..ScaffoldReport::default()
    };

    ensure_dir(&module_dir)?;
    for dir in Self::skeleton_dirs(module) {
      let dir = module_dir.join(dir);
      ensure_dir(&dir)?;
      report.directories.push(dir);
    }

    for (file, contents) in Self::skeleton_files(library, module) {
      let path = module_dir.join(file);
      write_file(&path, &contents)?;
      report.files.push(path);
    }

    tracing::info!(
      "scaffolded module {} of {} ({} files)",
      module,
      library,
      report.files.len()
    );
    Ok(report)
  }
}

/// Outcome of one `create-module-skeleton` invocation
#[derive(Debug)]
pub struct SkeletonOutcome {
  /// None when only the registry was rebuilt
  pub scaffold: Option<ScaffoldReport>,
  pub registry: Registry,
}

/// Scaffold `module` in `library` unless it is the recreate sentinel, then
/// always resynchronize the library registry.
pub fn create_module_skeleton(
  config: &SkeletonConfig,
  library: &str,
  module: &str,
) -> Result<SkeletonOutcome> {
  let scaffold = if config.is_recreate_only(module) {
    tracing::info!("recreating the module index of {}", library);
    None
  } else {
    Some(ModuleScaffolder::new(config).scaffold(library, module)?)
  };

  let registry = RegistrySynchronizer::new(config).sync(library)?;
  Ok(SkeletonOutcome { scaffold, registry })
}
