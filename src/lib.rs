// Build-time generators for header-driven instantiation sources and module skeletons

mod annotation;
pub mod cli;
mod code_writer;
pub mod config;
mod error;
mod generated_code;
mod instantiation;
mod registry;
mod scaffold;
pub mod templates;
mod utils;

pub use annotation::{Annotation, AnnotationScanner};
pub use code_writer::CodeWriter;
pub use config::{InstantiationConfig, SkeletonConfig, RECREATE_INDEX};
pub use error::{CodeGenError, Result};
pub use generated_code::GeneratedFiles;
pub use instantiation::{rewrite_annotation, InstantiationEmitter, InstantiationGenerator};
pub use registry::{Registry, RegistrySynchronizer, DOCS_INDEX_FILE, MANIFEST_FILE};
pub use scaffold::{
  create_module_skeleton, ModuleScaffolder, ScaffoldReport, SkeletonOutcome, INCLUDE_NAMESPACE,
  TEST_CATEGORIES,
};
