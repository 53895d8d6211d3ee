use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::code_writer::CodeWriter;
use crate::config::SkeletonConfig;
use crate::error::{CodeGenError, Result};
use crate::templates;
use crate::utils::{underline, validate_library, write_file};

/// Build manifest of a library, listing its modules
pub const MANIFEST_FILE: &str = "CMakeLists.txt";
/// Documentation index of a library
pub const DOCS_INDEX_FILE: &str = "modules.rst";

/// The module set of a library and the registry files derived from it
#[derive(Debug, Clone)]
pub struct Registry {
  pub library: String,
  /// Module names, sorted
  pub modules: Vec<String>,
  pub manifest_path: PathBuf,
  pub docs_index_path: PathBuf,
}

/// Regenerates a library's registry files from the modules found on disk.
///
/// The files are always rewritten in full; hand edits do not survive.
pub struct RegistrySynchronizer {
  config: SkeletonConfig,
}

impl RegistrySynchronizer {
  pub fn new(config: &SkeletonConfig) -> Self {
    Self {
      config: config.clone(),
    }
  }

  /// Sorted names of the non-internal module directories of a library
  pub fn scan_modules(&self, library: &str) -> Result<Vec<String>> {
    let library_dir = self.config.library_dir(library);
    let entries = fs::read_dir(&library_dir).map_err(|e| match e.kind() {
      ErrorKind::NotFound => CodeGenError::LibraryNotFound(library_dir.clone()),
      _ => CodeGenError::Io(e),
    })?;

    let mut modules = Vec::new();
    for entry in entries {
      let path = entry?.path();
      if !path.is_dir() {
        continue;
      }
      let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        tracing::warn!("ignoring non UTF-8 directory {}", path.display());
        continue;
      };
      if self.config.is_internal(name) {
        tracing::debug!("ignoring internal directory {}", name);
        continue;
      }
      modules.push(name.to_string());
    }
    modules.sort();
    Ok(modules)
  }

  /// Render the library build manifest for `modules`
  pub fn render_manifest(library: &str, modules: &[String]) -> Result<String> {
    let mut writer = CodeWriter::with_options(Vec::new(), 4, "#");
    writer.write_raw(&templates::cmake_header())?;
    writer.write_comment(templates::DO_NOT_EDIT)?;
    writer.newline()?;
    writer.writeln("include(einsums_message)")?;
    writer.newline()?;

    writer.writeln("# cmake-format: off")?;
    writer.writeln(&format!("set(_einsums_{}_modules", library))?;
    writer.indent();
    for module in modules {
      writer.writeln(module)?;
    }
    writer.dedent();
    writer.writeln(")")?;
    writer.writeln("# cmake-format: on")?;
    writer.newline()?;

    writer.writeln("einsums_info(\"\")")?;
    writer.writeln(&format!(
      "einsums_info(\"  Configuring {} modules:\")",
      templates::library_binary(library)
    ))?;
    writer.newline()?;

    writer.writeln(&format!("foreach(module ${{_einsums_{}_modules}})", library))?;
    writer.indent();
    writer.writeln("add_subdirectory(${module})")?;
    writer.dedent();
    writer.writeln("endforeach()")?;

    into_string(writer)
  }

  /// Render the library documentation index for `modules`
  pub fn render_docs_index(library: &str, modules: &[String]) -> Result<String> {
    let mut writer = CodeWriter::with_options(Vec::new(), 3, "..");
    writer.write_raw(&templates::rst_header())?;
    writer.write_comment(templates::DO_NOT_EDIT)?;
    writer.newline()?;
    writer.writeln(&format!(".. _{}_modules:", library))?;
    writer.newline()?;

    let title = templates::library_title(library);
    let rule = underline(&title, '=');
    writer.writeln(&rule)?;
    writer.writeln(&title)?;
    writer.writeln(&rule)?;
    writer.newline()?;

    writer.writeln(".. toctree::")?;
    writer.indent();
    writer.writeln(":maxdepth: 2")?;
    writer.newline()?;
    for module in modules {
      writer.writeln(&format!("/libs/{}/{}/docs/index.rst", library, module))?;
    }
    writer.dedent();

    into_string(writer)
  }

  /// Rescan a library and rewrite both registry files
  pub fn sync(&self, library: &str) -> Result<Registry> {
    validate_library(library)?;

    let modules = self.scan_modules(library)?;
    let library_dir = self.config.library_dir(library);
    let manifest_path = library_dir.join(MANIFEST_FILE);
    let docs_index_path = library_dir.join(DOCS_INDEX_FILE);

    write_file(&manifest_path, &Self::render_manifest(library, &modules)?)?;
    write_file(&docs_index_path, &Self::render_docs_index(library, &modules)?)?;

    tracing::info!("registered {} module(s) in {}", modules.len(), library);
    Ok(Registry {
      library: library.to_string(),
      modules,
      manifest_path,
      docs_index_path,
    })
  }
}

fn into_string(writer: CodeWriter<Vec<u8>>) -> Result<String> {
  let bytes = writer.into_inner()?;
  String::from_utf8(bytes).map_err(|e| CodeGenError::Other(e.into()))
}
