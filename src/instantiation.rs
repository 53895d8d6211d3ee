use std::path::{Path, PathBuf};

use crate::annotation::{Annotation, AnnotationScanner};
use crate::code_writer::CodeWriter;
use crate::config::InstantiationConfig;
use crate::error::{CodeGenError, Result};
use crate::generated_code::GeneratedFiles;
use crate::utils::{ensure_dir, file_stem, write_file};

/// Replace the leading export marker of an annotation with the define marker.
/// Nothing else in the line is touched.
pub fn rewrite_annotation(line: &str, export_marker: &str, define_marker: &str) -> String {
  match line.strip_prefix(export_marker) {
    Some(rest) => format!("{}{}", define_marker, rest),
    None => line.to_string(),
  }
}

/// Writes one instantiation source per annotation
pub struct InstantiationEmitter {
  config: InstantiationConfig,
}

impl InstantiationEmitter {
  pub fn new(config: &InstantiationConfig) -> Self {
    Self {
      config: config.clone(),
    }
  }

  /// Path of the source generated for annotation `index` of `header`
  pub fn output_path(&self, header: &Path, index: usize) -> Result<PathBuf> {
    let stem = file_stem(header).ok_or_else(|| {
      CodeGenError::Other(anyhow::anyhow!(
        "Header has no usable file name: {}",
        header.display()
      ))
    })?;
    Ok(
      self
        .config
        .output_dir
        .join(format!("{}{}.{}", stem, index, self.config.source_ext)),
    )
  }

  /// Render the instantiation source for one annotation
  pub fn render(&self, header: &Path, line: &str) -> Result<String> {
    let mut writer = CodeWriter::new(Vec::new());
    writer.write_include(&header.to_string_lossy(), true)?;
    writer.newline()?;
    writer.begin_namespace(&self.config.namespace)?;
    writer.writeln(&rewrite_annotation(
      line,
      &self.config.export_marker,
      &self.config.define_marker,
    ))?;
    writer.end_namespace()?;

    let bytes = writer.into_inner()?;
    String::from_utf8(bytes).map_err(|e| CodeGenError::Other(e.into()))
  }

  /// Write the instantiation source for one annotation, replacing any previous file
  pub fn emit(&self, header: &Path, index: usize, line: &str) -> Result<PathBuf> {
    ensure_dir(&self.config.output_dir)?;
    let path = self.output_path(header, index)?;
    write_file(&path, &self.render(header, line)?)?;
    Ok(path)
  }
}

/// Scans headers and emits their instantiation sources
pub struct InstantiationGenerator {
  scanner: AnnotationScanner,
  emitter: InstantiationEmitter,
}

impl InstantiationGenerator {
  pub fn new(config: &InstantiationConfig) -> Result<Self> {
    Ok(Self {
      scanner: AnnotationScanner::new(config)?,
      emitter: InstantiationEmitter::new(config),
    })
  }

  /// Generate sources for one header, recording them in `generated`
  pub fn process_header(&self, header: &Path, generated: &mut GeneratedFiles) -> Result<usize> {
    let annotations: Vec<Annotation> = self.scanner.scan_header(header)?;
    for annotation in &annotations {
      let path = self
        .emitter
        .emit(header, annotation.index, &annotation.line)?;
      generated.insert(path);
    }
    Ok(annotations.len())
  }

  /// Generate sources for every header, stopping at the first failure
  pub fn run<P: AsRef<Path>>(&self, headers: &[P]) -> Result<GeneratedFiles> {
    ensure_dir(&self.emitter.config.output_dir)?;

    let mut generated = GeneratedFiles::new();
    for header in headers {
      let header = header.as_ref();
      let count = self.process_header(header, &mut generated)?;
      tracing::info!("{}: {} instantiation(s)", header.display(), count);
    }
    Ok(generated)
  }
}
