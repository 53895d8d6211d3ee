use std::io::Write;

use crate::error::{CodeGenError, Result};

/// A writer for generated text with indentation handling
pub struct CodeWriter<W: Write> {
  /// The underlying writer
  writer: W,
  /// Current indentation level
  indent_level: usize,
  /// Number of spaces per indentation level
  indent_size: usize,
  /// Prefix used by `write_comment`
  comment_prefix: &'static str,
}

impl<W: Write> CodeWriter<W> {
  /// Create a CodeWriter for C++ sources
  pub fn new(writer: W) -> Self {
    Self::with_options(writer, 4, "//")
  }

  /// Create a CodeWriter with custom indentation and comment prefix
  pub fn with_options(writer: W, indent_size: usize, comment_prefix: &'static str) -> Self {
    Self {
      writer,
      indent_level: 0,
      indent_size,
      comment_prefix,
    }
  }

  /// Increase the indentation level
  pub fn indent(&mut self) {
    self.indent_level += 1;
  }

  /// Decrease the indentation level
  pub fn dedent(&mut self) {
    if self.indent_level > 0 {
      self.indent_level -= 1;
    }
  }

  /// Get the current indentation level
  pub fn indent_level(&self) -> usize {
    self.indent_level
  }

  fn put(&mut self, bytes: &[u8]) -> Result<()> {
    self.writer.write_all(bytes).map_err(CodeGenError::Io)
  }

  /// Write each line of `content` at the current indentation, newline terminated.
  /// Blank lines are written without indentation.
  pub fn writeln(&mut self, content: &str) -> Result<()> {
    if content.is_empty() {
      return self.newline();
    }

    let indent = " ".repeat(self.indent_level * self.indent_size);
    for line in content.lines() {
      if !line.is_empty() {
        self.put(indent.as_bytes())?;
        self.put(line.as_bytes())?;
      }
      self.put(b"\n")?;
    }
    Ok(())
  }

  /// Write raw text with no indentation or trailing newline
  pub fn write_raw(&mut self, content: &str) -> Result<()> {
    self.put(content.as_bytes())
  }

  /// Write a newline
  pub fn newline(&mut self) -> Result<()> {
    self.put(b"\n")
  }

  /// Write one comment line per line of `comment`
  pub fn write_comment(&mut self, comment: &str) -> Result<()> {
    let prefix = self.comment_prefix;
    for line in comment.lines() {
      if line.is_empty() {
        self.writeln(prefix)?;
      } else {
        self.writeln(&format!("{} {}", prefix, line))?;
      }
    }
    Ok(())
  }

  /// Write a #include directive
  pub fn write_include(&mut self, header: &str, is_system: bool) -> Result<()> {
    if is_system {
      self.writeln(&format!("#include <{}>", header))
    } else {
      self.writeln(&format!("#include \"{}\"", header))
    }
  }

  /// Open a namespace block. The body is not indented.
  pub fn begin_namespace(&mut self, name: &str) -> Result<()> {
    self.writeln(&format!("namespace {} {{", name))
  }

  /// Close a namespace block
  pub fn end_namespace(&mut self) -> Result<()> {
    self.writeln("}")
  }

  /// Flush the underlying writer
  pub fn flush(&mut self) -> Result<()> {
    self.writer.flush().map_err(CodeGenError::Io)
  }

  /// Flush and hand back the underlying writer
  pub fn into_inner(mut self) -> Result<W> {
    self.flush()?;
    Ok(self.writer)
  }
}
