//! generate-instantiations - expand export annotations into instantiation sources

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use einsums_codegen::cli::Verbosity;
use einsums_codegen::{InstantiationConfig, InstantiationGenerator};

/// Generate one instantiation source per export annotation in the given headers
#[derive(Parser, Debug)]
#[command(name = "generate-instantiations")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to write the generated sources into
    #[arg(long, alias = "output_dir", value_name = "DIR")]
    output_dir: PathBuf,

    /// Print the sorted list of generated files to stdout
    #[arg(long, alias = "list_files")]
    list_files: bool,

    /// Directory the header paths are relative to
    #[arg(long, value_name = "DIR", default_value = "include")]
    include_root: PathBuf,

    /// Headers to scan, relative to the include root
    #[arg(value_name = "HEADER")]
    headers: Vec<PathBuf>,

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
    let config = InstantiationConfig::new(&cli.output_dir).with_include_root(&cli.include_root);
    let generator = InstantiationGenerator::new(&config)?;

    let generated = generator
        .run(&cli.headers)
        .context("Instantiation generation failed")?;

    match generated.stale_candidates(&config.output_dir, &config.source_ext) {
        Ok(stale) => {
            for path in stale {
                tracing::debug!("possibly stale instantiation: {}", path.display());
            }
        }
        Err(e) => tracing::debug!("skipping stale instantiation check: {:#}", e),
    }

    if cli.list_files {
        println!("{}", generated.render());
    }

    Ok(())
}
