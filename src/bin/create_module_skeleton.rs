//! create-module-skeleton - scaffold a library module and refresh the library registry

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use einsums_codegen::cli::Verbosity;
use einsums_codegen::{create_module_skeleton, SkeletonConfig};

/// Generate the skeleton of MODULE_NAME in the LIB_NAME directory and regenerate
/// the library's module list
#[derive(Parser, Debug)]
#[command(name = "create-module-skeleton")]
#[command(version, about, long_about = None)]
#[command(after_help = "Pass --recreate-index as MODULE_NAME to only regenerate the module list.")]
struct Cli {
    /// Library directory holding the modules
    #[arg(value_name = "LIB_NAME")]
    lib_name: String,

    /// Module to create
    #[arg(value_name = "MODULE_NAME", allow_hyphen_values = true)]
    module_name: String,

    /// Directory containing the library directories
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() {
    let cli = Cli::parse();
    cli.verbosity.init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SkeletonConfig::new(&cli.root);
    let outcome = create_module_skeleton(&config, &cli.lib_name, &cli.module_name)
        .with_context(|| format!("Failed to update library {}", cli.lib_name))?;

    if let Some(report) = &outcome.scaffold {
        tracing::info!("module skeleton at {}", report.module_dir.display());
    }
    tracing::info!(
        "{} lists {} module(s)",
        outcome.registry.manifest_path.display(),
        outcome.registry.modules.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use einsums_codegen::RECREATE_INDEX;

    #[test]
    fn test_cli_parsing_basic() {
        let cli = Cli::parse_from(["create-module-skeleton", "mathlib", "blas3"]);
        assert_eq!(cli.lib_name, "mathlib");
        assert_eq!(cli.module_name, "blas3");
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn test_cli_accepts_recreate_sentinel() {
        let cli = Cli::parse_from(["create-module-skeleton", "full", RECREATE_INDEX]);
        assert_eq!(cli.module_name, RECREATE_INDEX);
    }

    #[test]
    fn test_cli_requires_both_names() {
        assert!(Cli::try_parse_from(["create-module-skeleton", "mathlib"]).is_err());
    }
}
